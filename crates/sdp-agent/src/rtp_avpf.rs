use crate::{
    CodecCatalog, ExtMapError, ExtMapRegistry, MediaHandler, NegotiationError,
    NegotiationErrorKind, RtpAvpConfig, RtpAvpMediaHandler,
};
use bytesstr::BytesStr;
use sdp_types::{
    Attribute, MediaDescription, MediaType, RtcpFeedback, RtcpFeedbackKind, TransportProtocol,
};
use std::sync::Arc;

const RTCP_FB: &str = "rtcp-fb";

/// Media handler for the RTP audio/video profile with RTCP based feedback
/// ([RFC4585](https://www.rfc-editor.org/rfc/rfc4585.html))
///
/// Negotiates like [`RtpAvpMediaHandler`] and additionally offers and answers `a=rtcp-fb`
/// attributes for generic NACK, and for video also picture loss indication and full intra
/// requests.
#[derive(Debug)]
pub struct RtpAvpfMediaHandler {
    avp: RtpAvpMediaHandler,
}

impl Default for RtpAvpfMediaHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RtpAvpfMediaHandler {
    pub fn new() -> Self {
        Self::with_catalog(Arc::default())
    }

    pub fn with_catalog(catalog: Arc<CodecCatalog>) -> Self {
        Self {
            avp: RtpAvpMediaHandler::with_config(RtpAvpConfig {
                proto: Some(TransportProtocol::RtpAvpf),
                catalog,
            }),
        }
    }

    pub fn catalog(&self) -> &CodecCatalog {
        self.avp.catalog()
    }

    pub fn extmaps(&self) -> &ExtMapRegistry {
        self.avp.extmaps()
    }

    pub fn add_extmap(&mut self, id: u8, uri: impl Into<BytesStr>) -> Result<(), ExtMapError> {
        self.avp.add_extmap(id, uri)
    }

    fn feedback_kinds(media_type: MediaType) -> Vec<RtcpFeedbackKind> {
        match media_type {
            MediaType::Video => vec![
                RtcpFeedbackKind::Nack,
                RtcpFeedbackKind::NackPli,
                RtcpFeedbackKind::CcmFir,
            ],
            _ => vec![RtcpFeedbackKind::Nack],
        }
    }

    fn supports_feedback(kind: &RtcpFeedbackKind) -> bool {
        matches!(
            kind,
            RtcpFeedbackKind::Nack | RtcpFeedbackKind::NackPli | RtcpFeedbackKind::CcmFir
        )
    }

    /// Add `a=rtcp-fb` attributes for every format of the offer
    pub fn add_rtcp_fb_attrs(&self, offer: &mut MediaDescription) {
        let kinds = Self::feedback_kinds(offer.media.media_type);

        for &pt in &offer.media.fmts {
            for kind in &kinds {
                let feedback = RtcpFeedback::new(pt, kind.clone());

                offer
                    .attributes
                    .push(Attribute::new(RTCP_FB, feedback.to_string()));
            }
        }
    }

    /// Copy the offered `a=rtcp-fb` attributes which apply to an answered format and are
    /// supported
    pub fn add_supported_rtcp_fb_attrs(
        &self,
        offer: &MediaDescription,
        answer: &mut MediaDescription,
    ) -> Result<(), NegotiationError> {
        for value in offer.attribute_values(RTCP_FB) {
            let feedback = RtcpFeedback::parse_value(value).map_err(|e| {
                NegotiationError::new(
                    NegotiationErrorKind::InvalidParameter,
                    format!("Offer with wrong rtcp-fb '{value}': {e}"),
                )
            })?;

            let answered = answer
                .media
                .fmts
                .iter()
                .any(|&fmt| feedback.pt.matches(fmt));

            if answered && Self::supports_feedback(&feedback.kind) {
                answer.add_attribute(Attribute::new(RTCP_FB, value.clone()));
            } else {
                log::debug!("Rejecting rtcp-fb '{value}'");
            }
        }

        Ok(())
    }
}

impl MediaHandler for RtpAvpfMediaHandler {
    fn proto(&self) -> &TransportProtocol {
        self.avp.proto()
    }

    fn init_offer(&self, media_type: MediaType) -> Result<MediaDescription, NegotiationError> {
        self.avp.init_offer(media_type)
    }

    fn add_offer_attributes(&self, offer: &mut MediaDescription) -> Result<(), NegotiationError> {
        self.avp.add_offer_attributes(offer)?;
        self.add_rtcp_fb_attrs(offer);

        Ok(())
    }

    fn init_answer(&self, offer: &MediaDescription) -> Result<MediaDescription, NegotiationError> {
        self.avp.init_answer(offer)
    }

    fn add_answer_attributes(
        &self,
        offer: &MediaDescription,
        answer: &mut MediaDescription,
    ) -> Result<(), NegotiationError> {
        self.avp.add_answer_attributes(offer, answer)?;
        self.add_supported_rtcp_fb_attrs(offer, answer)
    }

    fn can_insert_attribute(
        &self,
        offer: &MediaDescription,
        attr: &Attribute,
        answer: &MediaDescription,
    ) -> bool {
        if attr.key.as_str() == RTCP_FB {
            return false;
        }

        self.avp.can_insert_attribute(offer, attr, answer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rtp_avp::{EXTMAP, RTPMAP};

    #[test]
    fn feedback_kinds_per_media_type() {
        assert_eq!(
            RtpAvpfMediaHandler::feedback_kinds(MediaType::Audio),
            [RtcpFeedbackKind::Nack]
        );
        assert_eq!(RtpAvpfMediaHandler::feedback_kinds(MediaType::Video).len(), 3);
    }

    #[test]
    fn avp_attributes_are_not_copied() {
        let handler = RtpAvpfMediaHandler::new();
        let answer = MediaDescription::new(MediaType::Audio, TransportProtocol::RtpAvpf);

        for key in [RTPMAP, EXTMAP, RTCP_FB] {
            let attr = Attribute::new(key, "96 x");
            assert!(!handler.can_insert_attribute(&answer, &attr, &answer));
        }

        let attr = Attribute::new("ptime", "20");
        assert!(handler.can_insert_attribute(&answer, &attr, &answer));
    }
}
