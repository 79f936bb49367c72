use crate::{Attribute, Direction, Media, MediaType, TransportProtocol};
use bytesstr::BytesStr;
use std::fmt;

/// A single media section (`m=` line and its `a=` lines) of a session description
///
/// Attributes are kept in a flat list in the order they were added, since negotiation
/// must be able to copy attributes it does not know about verbatim.
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-5.14)
#[derive(Debug, Clone)]
pub struct MediaDescription {
    /// Media description's media field (m=)
    pub media: Media,

    /// Media level attributes (a=)
    pub attributes: Vec<Attribute>,
}

impl MediaDescription {
    /// Create a media description without any formats or attributes and port `0`
    pub fn new(media_type: MediaType, proto: TransportProtocol) -> Self {
        MediaDescription {
            media: Media {
                media_type,
                port: 0,
                ports_num: None,
                proto,
                fmts: vec![],
            },
            attributes: vec![],
        }
    }

    pub fn media_type(&self) -> MediaType {
        self.media.media_type
    }

    pub fn proto(&self) -> &TransportProtocol {
        &self.media.proto
    }

    pub fn port(&self) -> u16 {
        self.media.port
    }

    pub fn ports_num(&self) -> Option<u32> {
        self.media.ports_num
    }

    /// Payload types in order of preference
    pub fn fmts(&self) -> &[u8] {
        &self.media.fmts
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Set the port and optional number of ports of the media field
    pub fn set_port(&mut self, port: u16, ports_num: Option<u32>) {
        self.media.port = port;
        self.media.ports_num = ports_num;
    }

    pub fn add_fmt(&mut self, fmt: u8) {
        self.media.fmts.push(fmt);
    }

    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Returns an iterator over the values of all attributes with the given key
    ///
    /// Attributes without value are skipped.
    pub fn attribute_values<'a, 'k>(
        &'a self,
        key: &'k str,
    ) -> impl Iterator<Item = &'a BytesStr> + use<'a, 'k> {
        self.attributes
            .iter()
            .filter(move |attr| attr.key.as_str() == key)
            .filter_map(|attr| attr.value.as_ref())
    }

    /// Value of the first attribute with the given key
    pub fn attribute_value(&self, key: &str) -> Option<&BytesStr> {
        self.attribute_values(key).next()
    }

    /// Value of the first attribute with the given key that refers to the format `fmt`,
    /// e.g. `a=rtpmap:96 VP8/90000` for the key `rtpmap` and format `96`
    pub fn fmt_attribute_value(&self, key: &str, fmt: u8) -> Option<&BytesStr> {
        self.attribute_values(key).find(|value| {
            value
                .split_ascii_whitespace()
                .next()
                .and_then(|token| token.parse::<u8>().ok())
                == Some(fmt)
        })
    }

    /// Returns if an attribute with the same key and value is present
    pub fn contains_attribute(&self, attribute: &Attribute) -> bool {
        self.attributes.iter().any(|attr| attr == attribute)
    }

    /// Media direction attribute, `None` if not present
    pub fn direction(&self) -> Option<Direction> {
        self.attributes.iter().find_map(Direction::from_attribute)
    }
}

impl fmt::Display for MediaDescription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "m={}\r\n", self.media)?;

        for attr in &self.attributes {
            write!(f, "{attr}\r\n")?;
        }

        Ok(())
    }
}
