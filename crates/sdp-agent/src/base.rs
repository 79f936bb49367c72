//! Default steps of [`MediaHandler`], independent of the RTP profile
//!
//! Handlers overriding a step call these functions to chain up to the default behavior.

use crate::{MediaHandler, NegotiationError, NegotiationErrorKind};
use sdp_types::{Attribute, Direction, MediaDescription, MediaType};

pub fn create_offer<H: MediaHandler + ?Sized>(
    handler: &H,
    media_type: MediaType,
) -> Result<MediaDescription, NegotiationError> {
    let mut offer = handler.init_offer(media_type)?;
    handler.add_offer_attributes(&mut offer)?;

    Ok(offer)
}

pub fn create_answer<H: MediaHandler + ?Sized>(
    handler: &H,
    offer: &MediaDescription,
) -> Result<MediaDescription, NegotiationError> {
    let mut answer = handler.init_answer(offer)?;
    handler.add_answer_attributes(offer, &mut answer)?;
    handler.intersect_sdp_medias(offer, &mut answer)?;

    Ok(answer)
}

/// Media field with the handler's protocol and port `1/1`
pub fn init_offer<H: MediaHandler + ?Sized>(
    handler: &H,
    media_type: MediaType,
) -> Result<MediaDescription, NegotiationError> {
    let mut offer = MediaDescription::new(media_type, handler.proto().clone());
    offer.set_port(1, Some(1));

    Ok(offer)
}

pub fn add_offer_attributes<H: MediaHandler + ?Sized>(
    _handler: &H,
    _offer: &mut MediaDescription,
) -> Result<(), NegotiationError> {
    Ok(())
}

/// Media field with the offer's media type, the offer's protocol must be the handler's protocol
pub fn init_answer<H: MediaHandler + ?Sized>(
    handler: &H,
    offer: &MediaDescription,
) -> Result<MediaDescription, NegotiationError> {
    if offer.media.proto != *handler.proto() {
        return Err(NegotiationError::new(
            NegotiationErrorKind::InvalidProtocol,
            format!("Unexpected media protocol '{}'", offer.media.proto),
        ));
    }

    Ok(MediaDescription::new(
        offer.media.media_type,
        handler.proto().clone(),
    ))
}

pub fn add_answer_attributes<H: MediaHandler + ?Sized>(
    _handler: &H,
    _offer: &MediaDescription,
    _answer: &mut MediaDescription,
) -> Result<(), NegotiationError> {
    Ok(())
}

/// Answer the offered media direction with the flipped direction and copy every other
/// attribute the handler accepts
pub fn intersect_sdp_medias<H: MediaHandler + ?Sized>(
    handler: &H,
    offer: &MediaDescription,
    answer: &mut MediaDescription,
) -> Result<(), NegotiationError> {
    for attr in &offer.attributes {
        if let Some(direction) = Direction::from_attribute(attr) {
            if answer.direction().is_none() {
                answer.add_attribute(direction.flipped().to_attribute());
            }

            continue;
        }

        if handler.can_insert_attribute(offer, attr, answer) {
            answer.add_attribute(attr.clone());
        } else {
            log::trace!("Not copying attribute '{attr}' into answer");
        }
    }

    Ok(())
}

/// Accept everything except direction attributes and attributes already present in the answer
pub fn can_insert_attribute<H: MediaHandler + ?Sized>(
    _handler: &H,
    _offer: &MediaDescription,
    attr: &Attribute,
    answer: &MediaDescription,
) -> bool {
    Direction::from_attribute(attr).is_none() && !answer.contains_attribute(attr)
}
