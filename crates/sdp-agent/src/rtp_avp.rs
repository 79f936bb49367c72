use crate::catalog::CodecCatalog;
use crate::payload_type::{self, StaticPayloadType};
use crate::{
    ExtMapError, ExtMapRegistry, MediaHandler, NegotiationError, NegotiationErrorKind, base,
    catalog::encoding_matches,
};
use bytesstr::BytesStr;
use sdp_types::{Attribute, ExtMap, MediaDescription, MediaType, RtpMap, TransportProtocol};
use std::sync::Arc;

pub(crate) const RTPMAP: &str = "rtpmap";
pub(crate) const EXTMAP: &str = "extmap";

#[derive(Debug, Default, Clone)]
pub struct RtpAvpConfig {
    /// Transport protocol to negotiate, `RTP/AVP` if not set
    pub proto: Option<TransportProtocol>,
    /// Codecs to offer and accept
    pub catalog: Arc<CodecCatalog>,
}

/// Media handler for the RTP audio/video profile
/// ([RFC3551](https://www.rfc-editor.org/rfc/rfc3551.html))
///
/// Negotiates the formats, `a=rtpmap` and `a=extmap` attributes of `audio` and `video` media.
/// The steps are public so handlers of derived profiles can reuse them.
///
/// A handler is not synchronized internally, register extensions before negotiating and use one
/// handler per negotiation session.
#[derive(Debug)]
pub struct RtpAvpMediaHandler {
    proto: TransportProtocol,
    catalog: Arc<CodecCatalog>,
    extmaps: ExtMapRegistry,
}

impl Default for RtpAvpMediaHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RtpAvpMediaHandler {
    pub fn new() -> Self {
        Self::with_config(RtpAvpConfig::default())
    }

    pub fn with_config(config: RtpAvpConfig) -> Self {
        Self {
            proto: config.proto.unwrap_or(TransportProtocol::RtpAvp),
            catalog: config.catalog,
            extmaps: ExtMapRegistry::new(),
        }
    }

    pub fn catalog(&self) -> &CodecCatalog {
        &self.catalog
    }

    pub fn extmaps(&self) -> &ExtMapRegistry {
        &self.extmaps
    }

    /// Register a RTP header extension, used by all following offers and answers
    pub fn add_extmap(&mut self, id: u8, uri: impl Into<BytesStr>) -> Result<(), ExtMapError> {
        self.extmaps.add(id, uri)
    }

    /// Add the payload types of the catalog to the offer's format list
    ///
    /// Fails if the catalog uses a payload type of the static range which is unassigned, reserved
    /// for the other media type or assigned to a different encoding, or uses a payload type twice.
    pub fn add_supported_fmts(&self, offer: &mut MediaDescription) -> Result<(), NegotiationError> {
        let media_type = offer.media.media_type;

        if !is_audio_or_video(media_type) {
            return Err(NegotiationError::unexpected(format!(
                "Unsupported media '{media_type}'"
            )));
        }

        for mapping in self.catalog.formats_for(media_type) {
            let pt = mapping.payload;

            match payload_type::classify(pt) {
                StaticPayloadType::OutOfStaticRange => {}
                StaticPayloadType::Unassigned => {
                    return Err(NegotiationError::unexpected(format!(
                        "Trying to use an invalid PT ({pt})"
                    )));
                }
                StaticPayloadType::Static(canonical) => {
                    match payload_type::reserved_media_type(pt) {
                        Some(MediaType::Video) if media_type == MediaType::Audio => {
                            return Err(NegotiationError::unexpected(format!(
                                "Trying to use a reserved video payload type for audio ({pt})"
                            )));
                        }
                        Some(MediaType::Audio) if media_type == MediaType::Video => {
                            return Err(NegotiationError::unexpected(format!(
                                "Trying to use a reserved audio payload type for video ({pt})"
                            )));
                        }
                        _ => {}
                    }

                    if !encoding_matches(mapping.name(), canonical) {
                        return Err(NegotiationError::unexpected(format!(
                            "Trying to use a reserved payload ({pt}) for '{}'",
                            mapping.encoding
                        )));
                    }
                }
            }

            if offer.media.fmts.contains(&pt) {
                return Err(NegotiationError::unexpected(format!(
                    "Payload type {pt} is used by more than one codec"
                )));
            }

            offer.add_fmt(pt);
        }

        Ok(())
    }

    /// Add an `a=extmap` attribute for every registered extension
    pub fn add_extmaps(&self, offer: &mut MediaDescription) {
        for (id, uri) in self.extmaps.iter() {
            let extmap = ExtMap::new(id, uri.clone());

            offer.add_attribute(Attribute::new(EXTMAP, extmap.to_string()));
        }
    }

    /// Add an `a=rtpmap` attribute for every dynamic payload type in the offer's format list
    ///
    /// Static payload types are fully defined by the profile, so their rtpmap is omitted
    /// ([RFC4566](https://www.rfc-editor.org/rfc/rfc4566.html#section-6)).
    pub fn add_rtpmap_attrs(&self, offer: &mut MediaDescription) {
        let media_type = offer.media.media_type;

        for &pt in &offer.media.fmts {
            if payload_type::is_static_range(pt) {
                continue;
            }

            if let Some(mapping) = self.catalog.find(media_type, pt) {
                offer
                    .attributes
                    .push(Attribute::new(RTPMAP, format!("{pt} {}", mapping.encoding)));
            }
        }
    }

    /// Returns if the offered format `fmt` maps to an encoding of the catalog
    ///
    /// The encoding is taken from the offer's rtpmap for `fmt`, or from the static payload type
    /// table if the offer has none.
    pub fn format_supported(&self, offer: &MediaDescription, fmt: u8) -> bool {
        let media_type = offer.media.media_type;

        let Some(value) = offer.fmt_attribute_value(RTPMAP, fmt) else {
            // Static payload types do not need a rtpmap
            return match payload_type::classify(fmt) {
                StaticPayloadType::Static(encoding) => {
                    self.catalog.supports_encoding(media_type, encoding)
                }
                _ => false,
            };
        };

        match RtpMap::parse_value(value) {
            Ok(rtpmap) => self
                .catalog
                .supports_encoding(media_type, &rtpmap.encoding_descriptor()),
            Err(e) => {
                log::debug!("Ignoring format {fmt} with malformed rtpmap '{value}': {e}");
                false
            }
        }
    }

    /// Add the offered formats which are supported to the answer and set its port, `0` if no
    /// format is supported
    pub fn add_supported_fmts_to_answer(
        &self,
        offer: &MediaDescription,
        answer: &mut MediaDescription,
    ) {
        for &fmt in &offer.media.fmts {
            if self.format_supported(offer, fmt) {
                answer.add_fmt(fmt);
            } else {
                log::debug!("Rejecting unsupported format {fmt}");
            }
        }

        let port = if answer.media.fmts.is_empty() {
            log::debug!(
                "No supported format in {} offer, disabling media",
                offer.media.media_type
            );
            0
        } else {
            1
        };

        answer.set_port(port, Some(1));
    }

    /// Copy every offered `a=extmap` whose URI is registered into the answer, keeping the
    /// offer's id. Each offered attribute is copied at most once.
    pub fn add_supported_extmaps(
        &self,
        offer: &MediaDescription,
        answer: &mut MediaDescription,
    ) -> Result<(), NegotiationError> {
        for value in offer.attribute_values(EXTMAP) {
            let extmap = ExtMap::parse_value(value).map_err(|e| {
                NegotiationError::new(
                    NegotiationErrorKind::InvalidParameter,
                    format!("Offer with wrong extmap '{value}': {e}"),
                )
            })?;

            if self.extmaps.contains_uri(&extmap.uri) {
                answer.add_attribute(Attribute::new(EXTMAP, value.clone()));
            } else {
                log::debug!("Rejecting unsupported extmap '{value}'");
            }
        }

        Ok(())
    }

    /// Copy the offer's rtpmap of every format in the answer
    ///
    /// A format without rtpmap must be a static payload type of a supported encoding, otherwise
    /// the whole answer fails, even though the format is already part of the answer.
    pub fn add_supported_rtpmap_attrs(
        &self,
        offer: &MediaDescription,
        answer: &mut MediaDescription,
    ) -> Result<(), NegotiationError> {
        let media_type = offer.media.media_type;

        for &fmt in &answer.media.fmts {
            if let Some(value) = offer.fmt_attribute_value(RTPMAP, fmt) {
                answer
                    .attributes
                    .push(Attribute::new(RTPMAP, value.clone()));
                continue;
            }

            match payload_type::classify(fmt) {
                StaticPayloadType::Static(encoding)
                    if self.catalog.supports_encoding(media_type, encoding) => {}
                StaticPayloadType::Static(_) => {
                    return Err(NegotiationError::unexpected(format!(
                        "No static payload '{fmt}' supported"
                    )));
                }
                _ => {
                    return Err(NegotiationError::unexpected(format!(
                        "No 'rtpmap:{fmt}' attribute found in offer"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl MediaHandler for RtpAvpMediaHandler {
    fn proto(&self) -> &TransportProtocol {
        &self.proto
    }

    fn init_offer(&self, media_type: MediaType) -> Result<MediaDescription, NegotiationError> {
        if !is_audio_or_video(media_type) {
            return Err(NegotiationError::new(
                NegotiationErrorKind::UnsupportedMedia,
                format!("Unsupported '{media_type}' media"),
            ));
        }

        base::init_offer(self, media_type)
    }

    fn add_offer_attributes(&self, offer: &mut MediaDescription) -> Result<(), NegotiationError> {
        self.add_supported_fmts(offer)?;
        self.add_extmaps(offer);
        self.add_rtpmap_attrs(offer);

        base::add_offer_attributes(self, offer)
    }

    fn init_answer(&self, offer: &MediaDescription) -> Result<MediaDescription, NegotiationError> {
        let media_type = offer.media.media_type;

        if !is_audio_or_video(media_type) {
            return Err(NegotiationError::new(
                NegotiationErrorKind::InvalidMedia,
                format!("Unsupported '{media_type}' media"),
            ));
        }

        base::init_answer(self, offer)
    }

    fn add_answer_attributes(
        &self,
        offer: &MediaDescription,
        answer: &mut MediaDescription,
    ) -> Result<(), NegotiationError> {
        base::add_answer_attributes(self, offer, answer)?;

        self.add_supported_fmts_to_answer(offer, answer);
        self.add_supported_extmaps(offer, answer)?;
        self.add_supported_rtpmap_attrs(offer, answer)
    }

    fn can_insert_attribute(
        &self,
        offer: &MediaDescription,
        attr: &Attribute,
        answer: &MediaDescription,
    ) -> bool {
        // rtpmap & extmap are negotiated by add_answer_attributes
        if matches!(attr.key.as_str(), RTPMAP | EXTMAP) {
            return false;
        }

        base::can_insert_attribute(self, offer, attr, answer)
    }
}

fn is_audio_or_video(media_type: MediaType) -> bool {
    matches!(media_type, MediaType::Audio | MediaType::Video)
}

#[cfg(test)]
mod test {
    use super::*;

    fn handler(catalog: CodecCatalog) -> RtpAvpMediaHandler {
        RtpAvpMediaHandler::with_config(RtpAvpConfig {
            proto: None,
            catalog: Arc::new(catalog),
        })
    }

    fn offer_error(catalog: CodecCatalog, media_type: MediaType) -> NegotiationError {
        handler(catalog).create_offer(media_type).unwrap_err()
    }

    #[test]
    fn unassigned_static_payload_type() {
        let err = offer_error(
            CodecCatalog::new().with_audio(1, "PCMU/8000"),
            MediaType::Audio,
        );

        assert_eq!(err.kind(), NegotiationErrorKind::UnexpectedError);
        assert_eq!(err.message(), "Trying to use an invalid PT (1)");
    }

    #[test]
    fn video_payload_type_for_audio() {
        let err = offer_error(
            CodecCatalog::new().with_audio(26, "JPEG/90000"),
            MediaType::Audio,
        );

        assert_eq!(err.kind(), NegotiationErrorKind::UnexpectedError);
        assert!(err.message().contains("reserved video payload type for audio"));
    }

    #[test]
    fn audio_payload_type_for_video() {
        let err = offer_error(
            CodecCatalog::new().with_video(8, "PCMA/8000"),
            MediaType::Video,
        );

        assert_eq!(err.kind(), NegotiationErrorKind::UnexpectedError);
        assert!(err.message().contains("reserved audio payload type for video"));
    }

    #[test]
    fn static_payload_type_for_other_encoding() {
        let err = offer_error(
            CodecCatalog::new().with_audio(0, "OPUS/48000/2"),
            MediaType::Audio,
        );

        assert_eq!(err.kind(), NegotiationErrorKind::UnexpectedError);
        assert_eq!(
            err.message(),
            "Trying to use a reserved payload (0) for 'OPUS/48000/2'"
        );
    }

    #[test]
    fn last_static_payload_type_is_checked() {
        let err = offer_error(
            CodecCatalog::new().with_video(34, "VP8/90000"),
            MediaType::Video,
        );
        assert_eq!(err.kind(), NegotiationErrorKind::UnexpectedError);

        let offer = handler(CodecCatalog::new().with_video(34, "H263/90000"))
            .create_offer(MediaType::Video)
            .unwrap();

        assert_eq!(offer.media.fmts, [34]);
        assert!(offer.attribute_value(RTPMAP).is_none());
    }

    #[test]
    fn duplicate_payload_type() {
        let err = offer_error(
            CodecCatalog::new()
                .with_video(96, "VP8/90000")
                .with_video(97, "H264/90000")
                .with_video(96, "VP9/90000"),
            MediaType::Video,
        );

        assert_eq!(err.kind(), NegotiationErrorKind::UnexpectedError);
        assert_eq!(err.message(), "Payload type 96 is used by more than one codec");
    }

    #[test]
    fn rtpmap_of_unsupported_static_payload_type() {
        let handler = RtpAvpMediaHandler::new();

        let mut offer = MediaDescription::new(MediaType::Audio, TransportProtocol::RtpAvp);
        offer.add_fmt(8);

        let mut answer = MediaDescription::new(MediaType::Audio, TransportProtocol::RtpAvp);
        answer.add_fmt(8);

        let err = handler
            .add_supported_rtpmap_attrs(&offer, &mut answer)
            .unwrap_err();

        assert_eq!(err.kind(), NegotiationErrorKind::UnexpectedError);
        assert_eq!(err.message(), "No static payload '8' supported");
    }

    #[test]
    fn custom_protocol() {
        let handler = RtpAvpMediaHandler::with_config(RtpAvpConfig {
            proto: Some(TransportProtocol::RtpSavp),
            ..Default::default()
        });

        let offer = handler.create_offer(MediaType::Audio).unwrap();
        assert_eq!(offer.media.proto, TransportProtocol::RtpSavp);
    }
}
