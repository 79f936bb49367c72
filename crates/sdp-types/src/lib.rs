//! Typed view of a single SDP media description (`m=` section) and the attributes
//! which are inspected during RTP offer/answer negotiation.
//!
//! Parsing and printing of whole session descriptions is not part of this crate. The
//! [`Display`](std::fmt::Display) implementations exist to make negotiation results readable.

mod attributes;
mod media;
mod media_description;

pub use attributes::{
    Attribute, Direction, ExtMap, RtcpFeedback, RtcpFeedbackKind, RtcpFeedbackPt, RtpMap,
};
pub use internal::ParseError;
pub use media::{Media, MediaType, TransportProtocol};
pub use media_description::MediaDescription;

fn not_whitespace(c: char) -> bool {
    !c.is_ascii_whitespace()
}
