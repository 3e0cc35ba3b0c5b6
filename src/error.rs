use std::fmt;

/// Parsing errors.
///
/// Defines the error types that can occur while scanning and parsing source
/// code, from unrecognized characters to leftover input after the result.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised while evaluating, such as reading a
/// variable that was never assigned.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character that starts no token.
    Lexical,
    /// A token that is not allowed at its position in the grammar.
    Syntax,
    /// An identifier read as a value that is neither assigned nor a builtin.
    UnboundIdentifier,
}

/// Any error that aborts an evaluation.
///
/// Every error carries the byte offset it was raised at and a short snippet of
/// the source starting there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raised while scanning or parsing.
    Parse(ParseError),
    /// Raised while evaluating.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use calcexpr::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("(2 + 3").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::InvalidCharacter { .. }) => ErrorKind::Lexical,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::UnknownVariable { .. }) => ErrorKind::UnboundIdentifier,
        }
    }

    /// Byte offset into the source where the error was raised.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Parse(e) => e.offset(),
            Self::Runtime(e) => e.offset(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
