use nom::error::{ContextError, ErrorKind, FromExternalError};
use std::fmt;

/// Error returned by the nom based parsers
///
/// Keeps the innermost failing parser and the contexts it was called in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    context: Vec<&'static str>,
    cause: Option<String>,
}

impl ParseError {
    /// The nom error kind of the parser that failed
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Contexts the failed parser was called in, innermost first
    pub fn context(&self) -> &[&'static str] {
        &self.context
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed at {}", self.kind.description())?;

        if let Some(cause) = &self.cause {
            write!(f, " ({cause})")?;
        }

        for context in &self.context {
            write!(f, ", {context}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl<I> nom::error::ParseError<I> for ParseError {
    fn from_error_kind(_: I, kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            cause: None,
        }
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I> ContextError<I> for ParseError {
    fn add_context(_: I, ctx: &'static str, mut other: Self) -> Self {
        other.context.push(ctx);
        other
    }
}

impl<I, E> FromExternalError<I, E> for ParseError
where
    E: fmt::Display,
{
    fn from_external_error(_: I, kind: ErrorKind, e: E) -> Self {
        Self {
            kind,
            context: vec![],
            cause: Some(e.to_string()),
        }
    }
}
