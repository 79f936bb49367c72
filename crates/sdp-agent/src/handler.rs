use crate::{NegotiationError, base};
use sdp_types::{Attribute, MediaDescription, MediaType, TransportProtocol};

/// Negotiates a single media description of an RTP profile using the SDP offer/answer model
/// ([RFC3264](https://www.rfc-editor.org/rfc/rfc3264.html))
///
/// Offers and answers are created by calling the handler's steps in a fixed order:
///
/// - offer: [`init_offer`](Self::init_offer), [`add_offer_attributes`](Self::add_offer_attributes)
/// - answer: [`init_answer`](Self::init_answer), [`add_answer_attributes`](Self::add_answer_attributes),
///   [`intersect_sdp_medias`](Self::intersect_sdp_medias)
///
/// Every step has a default implementation in [`base`]. Implementations override single steps and
/// explicitly call into [`base`], or into the handler they extend, where the sequence still needs
/// that behavior.
///
/// The first failing step aborts the negotiation, the partially built description is dropped.
pub trait MediaHandler {
    /// Transport protocol of the media descriptions this handler creates and accepts
    fn proto(&self) -> &TransportProtocol;

    fn create_offer(&self, media_type: MediaType) -> Result<MediaDescription, NegotiationError> {
        base::create_offer(self, media_type)
    }

    fn create_answer(&self, offer: &MediaDescription) -> Result<MediaDescription, NegotiationError> {
        base::create_answer(self, offer)
    }

    /// Create the media field of an offer
    fn init_offer(&self, media_type: MediaType) -> Result<MediaDescription, NegotiationError> {
        base::init_offer(self, media_type)
    }

    fn add_offer_attributes(&self, offer: &mut MediaDescription) -> Result<(), NegotiationError> {
        base::add_offer_attributes(self, offer)
    }

    /// Create the media field of the answer to `offer`
    fn init_answer(&self, offer: &MediaDescription) -> Result<MediaDescription, NegotiationError> {
        base::init_answer(self, offer)
    }

    fn add_answer_attributes(
        &self,
        offer: &MediaDescription,
        answer: &mut MediaDescription,
    ) -> Result<(), NegotiationError> {
        base::add_answer_attributes(self, offer, answer)
    }

    /// Copy the offer's remaining attributes into the answer, filtered by
    /// [`can_insert_attribute`](Self::can_insert_attribute)
    fn intersect_sdp_medias(
        &self,
        offer: &MediaDescription,
        answer: &mut MediaDescription,
    ) -> Result<(), NegotiationError> {
        base::intersect_sdp_medias(self, offer, answer)
    }

    /// Decide if an attribute of the offer is copied verbatim into the answer
    fn can_insert_attribute(
        &self,
        offer: &MediaDescription,
        attr: &Attribute,
        answer: &MediaDescription,
    ) -> bool {
        base::can_insert_attribute(self, offer, attr, answer)
    }
}
