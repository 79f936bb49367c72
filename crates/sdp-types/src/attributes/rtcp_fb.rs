use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{Finish, IResult, ParseError};
use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, space0, u8, u64},
    combinator::{eof, map, rest, verify},
    error::context,
    sequence::{pair, preceded, separated_pair, terminated},
};
use std::fmt;

/// RTCP Feedback attribute (`a=rtcp-fb`).
///
/// Media Level attribute
///
/// [RFC 4585](https://datatracker.ietf.org/doc/html/rfc4585#section-4.2)
#[derive(Debug, Clone, PartialEq)]
pub struct RtcpFeedback {
    pub pt: RtcpFeedbackPt,
    pub kind: RtcpFeedbackKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcpFeedbackPt {
    /// Feedback type applies to the given payload type
    Pt(u8),
    /// Wildcard '*', applies to all payload types
    Any,
}

impl RtcpFeedbackPt {
    pub fn matches(&self, pt: u8) -> bool {
        match self {
            RtcpFeedbackPt::Pt(v) => *v == pt,
            RtcpFeedbackPt::Any => true,
        }
    }
}

/// Kind of RTCP feedback parameter for an `a=rtcp-fb` attribute.
///
/// # References
///
/// - [RFC 4585](https://datatracker.ietf.org/doc/html/rfc4585)
/// - [RFC 5104](https://datatracker.ietf.org/doc/html/rfc5104)
#[derive(Debug, Clone, PartialEq)]
pub enum RtcpFeedbackKind {
    /// `ack` - Positive acknowledgement
    Ack,
    /// `ack rpsi` - ACK Reference Picture Selection Indication
    AckRpsi,
    // See RFC 8888
    /// `ack ccfb` - Congestion Control Feedback
    AckCcfb,

    /// `nack` - Generic negative acknowledgement
    Nack,
    /// `nack pli` - Picture Loss Indication
    NackPli,
    /// `nack sli` - Slice Loss Indication
    NackSli,
    /// `nack rpsi` - NACK Reference Picture Selection Indication
    NackRpsi,

    // See RFC 5104
    /// `ccm fir` - Full Intra Request Command
    CcmFir,
    /// `ccm tmmbr` - Temporary Maximum Media Stream Bit Rate
    CcmTmmbr,
    /// `ccm tstr` - Temporal Spatial Trade Off
    CcmTstr,
    /// `ccm vbcm` - H.271 video back channel messages
    CcmVbcm,

    /// `ecn` - Explicit Congestion Notification (RFC 6679)
    Ecn,
    /// `transport-cc` - Transport wide congestion control
    TransportCC,
    /// `goog-remb` - Receiver Estimated Maximum Bitrate
    GoogRemb,

    /// `trr-int <int>` - Minimal receiver report interval
    TrrInt(u64),
    /// Other unrecognized rtcp-fb values
    Other(BytesStr),
}

/// Keyword which must make up the rest of the value, so `nack app` is not read as `nack`
fn keyword<'i>(kw: &'static str) -> impl FnMut(&'i str) -> IResult<&'i str, &'i str> {
    terminated(tag_no_case(kw), pair(space0, eof))
}

impl RtcpFeedback {
    pub fn new(pt: u8, kind: RtcpFeedbackKind) -> Self {
        Self {
            pt: RtcpFeedbackPt::Pt(pt),
            kind,
        }
    }

    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        use RtcpFeedbackKind as Kind;
        use self::keyword as t;

        context(
            "parsing rtcp-fb attribute",
            map(
                separated_pair(
                    // pt = * / fmt
                    alt((
                        map(char('*'), |_: char| RtcpFeedbackPt::Any),
                        map(u8, RtcpFeedbackPt::Pt),
                    )),
                    // SP
                    take_while1(char::is_whitespace),
                    // rtcp-fb-val
                    alt((
                        // ACK
                        map(t("ack rpsi"), |_| Kind::AckRpsi),
                        map(t("ack ccfb"), |_| Kind::AckCcfb),
                        map(t("ack"), |_| Kind::Ack),
                        // NACK
                        map(alt((t("nack pli"), t("pli"))), |_| Kind::NackPli),
                        map(alt((t("nack sli"), t("sli"))), |_| Kind::NackSli),
                        map(alt((t("nack rpsi"), t("rpsi"))), |_| Kind::NackRpsi),
                        map(t("nack"), |_| Kind::Nack),
                        // CCM
                        map(alt((t("ccm fir"), t("fir"))), |_| Kind::CcmFir),
                        map(alt((t("ccm tmmbr"), t("tmmbr"))), |_| Kind::CcmTmmbr),
                        map(t("ccm tstr"), |_| Kind::CcmTstr),
                        map(t("ccm vbcm"), |_| Kind::CcmVbcm),
                        // congestion control
                        map(t("ecn"), |_| Kind::Ecn),
                        map(t("transport-cc"), |_| Kind::TransportCC),
                        map(t("goog-remb"), |_| Kind::GoogRemb),
                        // TRR-INT
                        map(
                            terminated(
                                preceded(
                                    tag_no_case("trr-int"),
                                    preceded(take_while1(char::is_whitespace), u64),
                                ),
                                pair(space0, eof),
                            ),
                            Kind::TrrInt,
                        ),
                        // Other, the whole remaining value
                        map(verify(rest, |s: &str| !s.trim().is_empty()), |s: &str| {
                            Kind::Other(BytesStr::from_parse(src, s.trim()))
                        }),
                    )),
                ),
                |(pt, kind)| RtcpFeedback { pt, kind },
            ),
        )(i)
    }

    /// Parse the value of an `a=rtcp-fb` attribute
    pub fn parse_value(value: &BytesStr) -> Result<Self, ParseError> {
        let (_, feedback) = Self::parse(value.as_ref(), value).finish()?;
        Ok(feedback)
    }
}

impl fmt::Display for RtcpFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pt {
            RtcpFeedbackPt::Pt(pt) => write!(f, "{pt} ")?,
            RtcpFeedbackPt::Any => write!(f, "* ")?,
        }

        match &self.kind {
            RtcpFeedbackKind::Ack => write!(f, "ack"),
            RtcpFeedbackKind::AckRpsi => write!(f, "ack rpsi"),
            RtcpFeedbackKind::AckCcfb => write!(f, "ack ccfb"),
            RtcpFeedbackKind::Nack => write!(f, "nack"),
            RtcpFeedbackKind::NackPli => write!(f, "nack pli"),
            RtcpFeedbackKind::NackSli => write!(f, "nack sli"),
            RtcpFeedbackKind::NackRpsi => write!(f, "nack rpsi"),
            RtcpFeedbackKind::CcmFir => write!(f, "ccm fir"),
            RtcpFeedbackKind::CcmTmmbr => write!(f, "ccm tmmbr"),
            RtcpFeedbackKind::CcmTstr => write!(f, "ccm tstr"),
            RtcpFeedbackKind::CcmVbcm => write!(f, "ccm vbcm"),
            RtcpFeedbackKind::Ecn => write!(f, "ecn"),
            RtcpFeedbackKind::TransportCC => write!(f, "transport-cc"),
            RtcpFeedbackKind::GoogRemb => write!(f, "goog-remb"),
            RtcpFeedbackKind::TrrInt(int) => write!(f, "trr-int {int}"),
            RtcpFeedbackKind::Other(other) => f.write_str(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &'static str) -> RtcpFeedback {
        RtcpFeedback::parse_value(&BytesStr::from_static(input)).unwrap()
    }

    #[test]
    fn nack_variants() {
        assert_eq!(parse("96 nack"), RtcpFeedback::new(96, RtcpFeedbackKind::Nack));
        assert_eq!(
            parse("96 nack pli"),
            RtcpFeedback::new(96, RtcpFeedbackKind::NackPli)
        );
        assert_eq!(
            parse("97 CCM FIR"),
            RtcpFeedback::new(97, RtcpFeedbackKind::CcmFir)
        );
    }

    #[test]
    fn wildcard_and_trr_int() {
        let fb = parse("* trr-int 100");

        assert_eq!(fb.pt, RtcpFeedbackPt::Any);
        assert!(fb.pt.matches(35));
        assert_eq!(fb.kind, RtcpFeedbackKind::TrrInt(100));
    }

    #[test]
    fn other() {
        let fb = parse("100 app");

        assert_eq!(fb.pt, RtcpFeedbackPt::Pt(100));
        assert!(!fb.pt.matches(101));
        assert!(matches!(&fb.kind, RtcpFeedbackKind::Other(other) if other.as_str() == "app"));
    }

    #[test]
    fn longer_values_are_not_truncated() {
        assert_eq!(parse("97 nack rpsi").kind, RtcpFeedbackKind::NackRpsi);
        assert_eq!(parse("97 ack rpsi").kind, RtcpFeedbackKind::AckRpsi);
        assert_eq!(parse("97 ccm tstr").kind, RtcpFeedbackKind::CcmTstr);
        assert_eq!(parse("97 goog-remb").kind, RtcpFeedbackKind::GoogRemb);
        assert_eq!(parse("97 nack ").kind, RtcpFeedbackKind::Nack);

        for (input, rest) in [
            ("97 nack app", "nack app"),
            ("97 ccm firx", "ccm firx"),
            ("97 nackx", "nackx"),
            ("97 trr-int 100 ms", "trr-int 100 ms"),
        ] {
            match parse(input).kind {
                RtcpFeedbackKind::Other(other) => assert_eq!(other.as_str(), rest),
                kind => panic!("{input} parsed as {kind:?}"),
            }
        }
    }

    #[test]
    fn missing_value() {
        assert!(RtcpFeedback::parse_value(&BytesStr::from_static("96")).is_err());
        assert!(RtcpFeedback::parse_value(&BytesStr::from_static("96 ")).is_err());
    }

    #[test]
    fn print() {
        assert_eq!(
            RtcpFeedback::new(97, RtcpFeedbackKind::CcmFir).to_string(),
            "97 ccm fir"
        );
        assert_eq!(parse("* ack").to_string(), "* ack");
    }
}
