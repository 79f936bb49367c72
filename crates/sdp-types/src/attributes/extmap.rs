//! RTP header extension mapping attribute (`a=extmap`)

use crate::Direction;
use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{Finish, IResult, ParseError};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::digit1,
    combinator::{map, map_res, opt},
    error::context,
    multi::many0,
    sequence::{preceded, tuple},
};
use std::{fmt, str::FromStr};

/// Extmap attribute (`a=extmap:<id>[/<direction>] <uri> [<attributes>]`)
///
/// Media-Level attribute
///
/// [RFC8285](https://www.rfc-editor.org/rfc/rfc8285.html#section-5)
#[derive(Debug, Clone, PartialEq)]
pub struct ExtMap {
    pub id: u8,
    pub direction: Direction,
    pub uri: BytesStr,
    pub extension_attributes: Vec<BytesStr>,
}

impl ExtMap {
    pub fn new(id: u8, uri: BytesStr) -> Self {
        Self {
            id,
            direction: Direction::SendRecv,
            uri,
            extension_attributes: vec![],
        }
    }

    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing extmap",
            map(
                tuple((
                    // id
                    map_res(digit1, FromStr::from_str),
                    // direction
                    opt(alt((
                        map(tag("/sendrecv"), |_| Direction::SendRecv),
                        map(tag("/recvonly"), |_| Direction::RecvOnly),
                        map(tag("/sendonly"), |_| Direction::SendOnly),
                        map(tag("/inactive"), |_| Direction::Inactive),
                    ))),
                    // uri
                    preceded(
                        take_while1(char::is_whitespace),
                        take_while1(|c: char| !c.is_whitespace()),
                    ),
                    // attributes
                    many0(preceded(
                        take_while1(char::is_whitespace),
                        map(take_while1(|c: char| !c.is_whitespace()), |attr| {
                            BytesStr::from_parse(src, attr)
                        }),
                    )),
                )),
                |(id, direction, uri, extension_attributes)| Self {
                    id,
                    direction: direction.unwrap_or(Direction::SendRecv),
                    uri: BytesStr::from_parse(src, uri),
                    extension_attributes,
                },
            ),
        )(i)
    }

    /// Parse the value of an `a=extmap` attribute
    pub fn parse_value(value: &BytesStr) -> Result<Self, ParseError> {
        let (_, extmap) = Self::parse(value.as_ref(), value).finish()?;
        Ok(extmap)
    }
}

impl fmt::Display for ExtMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)?;

        if self.direction == Direction::SendRecv {
            write!(f, " {}", self.uri)?;
        } else {
            write!(f, "/{} {}", self.direction, self.uri)?;
        }

        for attribute in &self.extension_attributes {
            write!(f, " {attribute}")?;
        }

        Ok(())
    }
}
