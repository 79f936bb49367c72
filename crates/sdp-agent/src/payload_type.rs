//! Static RTP payload types of the RTP audio/video profile
//!
//! [RFC3551](https://www.rfc-editor.org/rfc/rfc3551.html#section-6)

use sdp_types::MediaType;

/// First payload type of the range reserved for audio encodings
pub const AUDIO_BASE_PAYLOAD: u8 = 0;

/// First payload type of the range reserved for video encodings
pub const VIDEO_BASE_PAYLOAD: u8 = 24;

/// Canonical encodings of the static payload types, indexed by payload type
const STATIC_PAYLOAD_TYPES: [Option<&str>; 35] = [
    // audio
    Some("PCMU/8000/1"),
    None, // reserved
    None, // reserved
    Some("GSM/8000/1"),
    Some("G723/8000/1"),
    Some("DVI4/8000/1"),
    Some("DVI4/16000/1"),
    Some("LPC/8000/1"),
    Some("PCMA/8000/1"),
    Some("G722/8000/1"),
    Some("L16/44100/2"),
    Some("L16/44100/1"),
    Some("QCELP/8000/1"),
    Some("CN/8000/1"),
    Some("MPA/90000"),
    Some("G728/8000/1"),
    Some("DVI4/11025/1"),
    Some("DVI4/22050/1"),
    Some("G729/8000/1"),
    None, // reserved
    None, // unassigned
    None,
    None,
    None,
    // video
    None, // unassigned
    Some("CelB/90000"),
    Some("JPEG/90000"),
    None,
    Some("nv/90000"),
    None,
    None,
    Some("H261/90000"),
    Some("MPV/90000"),
    Some("MP2T/90000"),
    Some("H263/90000"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticPayloadType {
    /// Static payload type with its canonical `name/clock-rate[/channels]` encoding
    Static(&'static str),
    /// Reserved or unassigned slot inside the static range
    Unassigned,
    /// Not a static payload type
    OutOfStaticRange,
}

/// Look up `pt` in the static payload type table
pub fn classify(pt: u8) -> StaticPayloadType {
    match STATIC_PAYLOAD_TYPES.get(usize::from(pt)) {
        Some(&Some(encoding)) => StaticPayloadType::Static(encoding),
        Some(None) => StaticPayloadType::Unassigned,
        None => StaticPayloadType::OutOfStaticRange,
    }
}

/// Returns if `pt` lies within the static range, assigned or not
pub fn is_static_range(pt: u8) -> bool {
    classify(pt) != StaticPayloadType::OutOfStaticRange
}

/// The media type a static payload type is reserved for
pub fn reserved_media_type(pt: u8) -> Option<MediaType> {
    if !is_static_range(pt) {
        None
    } else if pt < VIDEO_BASE_PAYLOAD {
        Some(MediaType::Audio)
    } else {
        Some(MediaType::Video)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn audio_range() {
        assert_eq!(
            classify(AUDIO_BASE_PAYLOAD),
            StaticPayloadType::Static("PCMU/8000/1")
        );
        assert_eq!(classify(1), StaticPayloadType::Unassigned);
        assert_eq!(classify(8), StaticPayloadType::Static("PCMA/8000/1"));
        assert_eq!(classify(23), StaticPayloadType::Unassigned);
        assert_eq!(reserved_media_type(23), Some(MediaType::Audio));
    }

    #[test]
    fn video_range() {
        assert_eq!(classify(VIDEO_BASE_PAYLOAD), StaticPayloadType::Unassigned);
        assert_eq!(classify(26), StaticPayloadType::Static("JPEG/90000"));
        assert_eq!(reserved_media_type(24), Some(MediaType::Video));
    }

    #[test]
    fn last_static_payload_type_is_in_range() {
        assert_eq!(classify(34), StaticPayloadType::Static("H263/90000"));
        assert!(is_static_range(34));
        assert_eq!(reserved_media_type(34), Some(MediaType::Video));
    }

    #[test]
    fn dynamic_range() {
        assert_eq!(classify(35), StaticPayloadType::OutOfStaticRange);
        assert_eq!(classify(96), StaticPayloadType::OutOfStaticRange);
        assert_eq!(classify(u8::MAX), StaticPayloadType::OutOfStaticRange);
        assert_eq!(reserved_media_type(35), None);
    }
}
