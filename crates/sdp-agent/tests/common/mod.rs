use ezk_sdp_agent::{Attribute, MediaDescription, MediaType, TransportProtocol};

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Media description as received from a remote party
#[allow(dead_code)]
pub(crate) fn remote_offer(
    media_type: MediaType,
    proto: TransportProtocol,
    fmts: &[u8],
    attributes: &[(&'static str, &'static str)],
) -> MediaDescription {
    let mut offer = MediaDescription::new(media_type, proto);
    offer.set_port(5004, None);

    for &fmt in fmts {
        offer.add_fmt(fmt);
    }

    for &(key, value) in attributes {
        offer.add_attribute(Attribute::new(key, value));
    }

    offer
}

pub(crate) fn values<'a>(desc: &'a MediaDescription, key: &'a str) -> Vec<&'a str> {
    desc.attribute_values(key).map(|v| v.as_str()).collect()
}
