//! RtpMap attribute (`a=rtpmap`)

use crate::not_whitespace;
use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{Finish, IResult, ParseError};
use nom::bytes::complete::take_while1;
use nom::character::complete::{char, digit1};
use nom::combinator::{map, map_res, opt};
use nom::error::context;
use nom::sequence::{preceded, tuple};
use std::fmt;
use std::str::FromStr;

/// Rtpmap attribute (`a=rtpmap`)
///
/// Map a RTP payload number specified in the media description to a encoding.
///
/// Media-Level attribute
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-6.6)
#[derive(Debug, Clone)]
pub struct RtpMap {
    /// The number used in the media description which this maps a description to
    pub payload: u8,

    /// Name of the encoding
    pub encoding: BytesStr,

    /// Clock rate of the encoding
    pub clock_rate: u32,

    /// Additional parameters as a string (number of channels for audio)
    pub params: Option<BytesStr>,
}

impl RtpMap {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing rtpmap",
            map(
                tuple((
                    // payload num
                    map_res(digit1, FromStr::from_str),
                    // encoding
                    preceded(
                        take_while1(char::is_whitespace),
                        take_while1(|c: char| c != '/' && not_whitespace(c)),
                    ),
                    // clock rate
                    preceded(char('/'), map_res(digit1, FromStr::from_str)),
                    // optional params
                    opt(preceded(char('/'), take_while1(not_whitespace))),
                )),
                |(payload, encoding, clock_rate, params)| RtpMap {
                    payload,
                    encoding: BytesStr::from_parse(src, encoding),
                    clock_rate,
                    params: params.map(|params| BytesStr::from_parse(src, params)),
                },
            ),
        )(i)
    }

    /// Parse the value of an `a=rtpmap` attribute
    pub fn parse_value(value: &BytesStr) -> Result<Self, ParseError> {
        let (_, rtpmap) = Self::parse(value.as_ref(), value).finish()?;
        Ok(rtpmap)
    }

    /// The encoding as `name/clock-rate[/params]`, the part after the payload number
    pub fn encoding_descriptor(&self) -> String {
        match &self.params {
            Some(params) => format!("{}/{}/{}", self.encoding, self.clock_rate, params),
            None => format!("{}/{}", self.encoding, self.clock_rate),
        }
    }
}

impl fmt::Display for RtpMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.payload, self.encoding_descriptor())
    }
}
