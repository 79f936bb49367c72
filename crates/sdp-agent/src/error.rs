use std::fmt;

/// Reason a media description could not be negotiated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationErrorKind {
    /// The media type to offer is neither audio nor video
    UnsupportedMedia,
    /// The offered media type cannot be answered
    InvalidMedia,
    /// The offered transport protocol does not match the handler's protocol
    InvalidProtocol,
    /// A required field of the offer is malformed or missing
    InvalidParameter,
    /// Misconfigured codecs or a format that could not be resolved
    UnexpectedError,
}

impl fmt::Display for NegotiationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NegotiationErrorKind::UnsupportedMedia => "unsupported media",
            NegotiationErrorKind::InvalidMedia => "invalid media",
            NegotiationErrorKind::InvalidProtocol => "invalid protocol",
            NegotiationErrorKind::InvalidParameter => "invalid parameter",
            NegotiationErrorKind::UnexpectedError => "unexpected error",
        })
    }
}

/// Error returned when an offer or answer could not be created. No partial media description is
/// ever returned alongside it.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct NegotiationError {
    kind: NegotiationErrorKind,
    message: String,
}

impl NegotiationError {
    pub fn new(kind: NegotiationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn unexpected(message: impl Into<String>) -> Self {
        Self::new(NegotiationErrorKind::UnexpectedError, message)
    }

    pub fn kind(&self) -> NegotiationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExtMapError {
    #[error("Trying to add existing extmap id '{0}'")]
    DuplicateId(u8),
    #[error("extmap id 0 is reserved")]
    ReservedId,
}
