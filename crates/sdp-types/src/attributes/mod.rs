use bytesstr::BytesStr;
use std::fmt;

mod direction;
mod extmap;
mod rtcp_fb;
mod rtpmap;

pub use direction::Direction;
pub use extmap::ExtMap;
pub use rtcp_fb::{RtcpFeedback, RtcpFeedbackKind, RtcpFeedbackPt};
pub use rtpmap::RtpMap;

/// `key:[value]` pair of a media level attribute (`a=`)
///
/// The value is kept as-is, typed views like [`RtpMap`] or [`ExtMap`] are parsed from it on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name, the part before the optional `:`
    pub key: BytesStr,

    /// if the optional `:` is present the part after it is stored inside `value`
    pub value: Option<BytesStr>,
}

impl Attribute {
    /// Attribute with a value, e.g. `a=rtpmap:0 PCMU/8000`
    pub fn new(key: impl Into<BytesStr>, value: impl Into<BytesStr>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Property attribute without a value, e.g. `a=sendonly`
    pub fn flag(key: impl Into<BytesStr>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a={}", self.key)?;

        if let Some(value) = &self.value {
            write!(f, ":{value}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn attribute_print() {
        assert_eq!(
            Attribute::new("rtpmap", "0 PCMU/8000").to_string(),
            "a=rtpmap:0 PCMU/8000"
        );
        assert_eq!(Attribute::flag("rtcp-mux").to_string(), "a=rtcp-mux");
    }
}
