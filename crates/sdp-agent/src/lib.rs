//! # SDP offer/answer for RTP media
//!
//! Creates and answers single SDP media descriptions following the offer/answer model
//! ([RFC3264](https://www.rfc-editor.org/rfc/rfc3264.html)).
//!
//! A [`MediaHandler`] negotiates one media description per call. [`RtpAvpMediaHandler`] implements
//! the RTP audio/video profile: it offers the codecs of a [`CodecCatalog`] and registered RTP header
//! extensions, and answers offers by intersecting them with what it supports.
//! [`RtpAvpfMediaHandler`] extends it with RTCP feedback.
//!
//! ```
//! use ezk_sdp_agent::{MediaHandler, MediaType, RtpAvpMediaHandler};
//!
//! let mut handler = RtpAvpMediaHandler::new();
//! handler.add_extmap(1, "urn:ietf:params:rtp-hdrext:ssrc-audio-level").unwrap();
//!
//! let offer = handler.create_offer(MediaType::Audio).unwrap();
//! assert_eq!(offer.fmts(), [98, 99, 0]);
//! ```

pub mod base;
mod catalog;
mod error;
mod extmap;
mod handler;
pub mod payload_type;
mod rtp_avp;
mod rtp_avpf;

pub use catalog::{CodecCatalog, CodecMapping, encoding_matches};
pub use error::{ExtMapError, NegotiationError, NegotiationErrorKind};
pub use extmap::ExtMapRegistry;
pub use handler::MediaHandler;
pub use rtp_avp::{RtpAvpConfig, RtpAvpMediaHandler};
pub use rtp_avpf::RtpAvpfMediaHandler;
pub use sdp_types::{Attribute, Direction, MediaDescription, MediaType, TransportProtocol};
