use common::{init_logger, values};
use ezk_sdp_agent::{
    CodecCatalog, ExtMapError, MediaHandler, MediaType, NegotiationErrorKind, RtpAvpConfig,
    RtpAvpMediaHandler, TransportProtocol,
};
use std::sync::Arc;

mod common;

#[test]
fn only_audio_and_video_can_be_offered() {
    init_logger();

    let handler = RtpAvpMediaHandler::new();

    for media_type in [MediaType::Text, MediaType::App] {
        let err = handler.create_offer(media_type).unwrap_err();
        assert_eq!(err.kind(), NegotiationErrorKind::UnsupportedMedia);
    }
}

#[test]
fn audio_offer() {
    init_logger();

    let handler = RtpAvpMediaHandler::new();
    let offer = handler.create_offer(MediaType::Audio).unwrap();

    assert_eq!(offer.media_type(), MediaType::Audio);
    assert_eq!(*offer.proto(), TransportProtocol::RtpAvp);
    assert_eq!(offer.port(), 1);
    assert_eq!(offer.ports_num(), Some(1));
    assert_eq!(offer.fmts(), [98, 99, 0]);

    // PCMU is a static payload type and needs no rtpmap
    assert_eq!(
        values(&offer, "rtpmap"),
        ["98 OPUS/48000/2", "99 AMR/8000/1"]
    );
    assert!(offer.fmt_attribute_value("rtpmap", 0).is_none());
    assert!(offer.direction().is_none());
}

#[test]
fn video_offer() {
    init_logger();

    let handler = RtpAvpMediaHandler::new();
    let offer = handler.create_offer(MediaType::Video).unwrap();

    assert_eq!(offer.fmts(), [96, 97, 100, 101]);
    assert_eq!(
        values(&offer, "rtpmap"),
        [
            "96 H263-1998/90000",
            "97 VP8/90000",
            "100 MP4V-ES/90000",
            "101 H264/90000"
        ]
    );
}

#[test]
fn offer_text() {
    let handler = RtpAvpMediaHandler::new();
    let offer = handler.create_offer(MediaType::Audio).unwrap();

    assert_eq!(
        offer.to_string(),
        "m=audio 1/1 RTP/AVP 98 99 0\r\n\
        a=rtpmap:98 OPUS/48000/2\r\n\
        a=rtpmap:99 AMR/8000/1\r\n"
    );
}

#[test]
fn extmaps_are_offered_in_registration_order() {
    init_logger();

    let mut handler = RtpAvpMediaHandler::new();
    handler.add_extmap(3, "urn:example:c").unwrap();
    handler.add_extmap(1, "urn:example:a").unwrap();
    handler.add_extmap(2, "urn:example:b").unwrap();

    let offer = handler.create_offer(MediaType::Video).unwrap();

    assert_eq!(
        values(&offer, "extmap"),
        ["3 urn:example:c", "1 urn:example:a", "2 urn:example:b"]
    );
}

#[test]
fn duplicate_extmap_id() {
    init_logger();

    let mut handler = RtpAvpMediaHandler::new();
    handler.add_extmap(1, "urn:example:first").unwrap();

    assert_eq!(
        handler.add_extmap(1, "urn:example:second"),
        Err(ExtMapError::DuplicateId(1))
    );

    assert_eq!(handler.extmaps().len(), 1);
    assert_eq!(
        handler.extmaps().get(1).map(|uri| uri.as_str()),
        Some("urn:example:first")
    );

    let offer = handler.create_offer(MediaType::Audio).unwrap();
    assert_eq!(values(&offer, "extmap"), ["1 urn:example:first"]);
}

#[test]
fn misconfigured_catalog_fails_whole_offer() {
    init_logger();

    let catalog = CodecCatalog::new()
        .with_audio(98, "OPUS/48000/2")
        .with_audio(2, "G721/8000");

    let handler = RtpAvpMediaHandler::with_config(RtpAvpConfig {
        proto: None,
        catalog: Arc::new(catalog),
    });

    let err = handler.create_offer(MediaType::Audio).unwrap_err();
    assert_eq!(err.kind(), NegotiationErrorKind::UnexpectedError);
    assert_eq!(err.message(), "Trying to use an invalid PT (2)");

    // video is unaffected
    let offer = handler.create_offer(MediaType::Video).unwrap();
    assert!(offer.fmts().is_empty());
}

#[test]
fn custom_catalog_with_static_payload_types() {
    init_logger();

    let catalog = CodecCatalog::new()
        .with_audio(8, "PCMA/8000")
        .with_audio(9, "G722/8000")
        .with_audio(111, "OPUS/48000/2");

    let handler = RtpAvpMediaHandler::with_config(RtpAvpConfig {
        proto: None,
        catalog: Arc::new(catalog),
    });

    let offer = handler.create_offer(MediaType::Audio).unwrap();

    assert_eq!(offer.fmts(), [8, 9, 111]);
    assert_eq!(values(&offer, "rtpmap"), ["111 OPUS/48000/2"]);
}

#[test]
fn shared_catalog() {
    let catalog = Arc::new(CodecCatalog::new().with_video(102, "VP9/90000"));

    let a = RtpAvpMediaHandler::with_config(RtpAvpConfig {
        proto: None,
        catalog: catalog.clone(),
    });
    let b = RtpAvpMediaHandler::with_config(RtpAvpConfig {
        proto: Some(TransportProtocol::RtpSavp),
        catalog,
    });

    let a = a.create_offer(MediaType::Video).unwrap();
    let b = b.create_offer(MediaType::Video).unwrap();

    assert_eq!(a.fmts(), b.fmts());
    assert_eq!(*a.proto(), TransportProtocol::RtpAvp);
    assert_eq!(*b.proto(), TransportProtocol::RtpSavp);
}
