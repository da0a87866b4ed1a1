//! Error types surfaced by parsing and serialization.

use std::fmt;

/// Errors that can arise while closing an N-Triples stream.
///
/// Both kinds are fatal: the run stops at the first error and makes no
/// partial-output guarantee. Errors bubble to the caller as values so the
/// failure paths stay unit-testable.
#[derive(Debug)]
pub enum Error {
    /// Underlying I/O error on the input or output stream.
    Io(std::io::Error),
    /// Malformed input, with the 1-based line it was found on.
    Syntax { line: u64, kind: SyntaxErrorKind },
}

/// The ways a line can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Line ended inside an open quoted literal.
    UnterminatedQuote,
    /// Line ended inside an open `<...>` IRI.
    UnterminatedIri,
    /// Statement not terminated by a period before the line ended.
    MissingPeriod,
    /// A byte outside quotes or angle brackets that opens no token.
    UnexpectedCharacter(u8),
    /// Input ended immediately after a backslash.
    TrailingBackslash,
    /// A token exceeded the configured maximum length.
    TokenTooLong,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::UnterminatedQuote => {
                write!(f, "line ends with an unterminated quote")
            }
            SyntaxErrorKind::UnterminatedIri => {
                write!(f, "line ends with an unmatched opening brace, <")
            }
            SyntaxErrorKind::MissingPeriod => {
                write!(f, "statement is missing the ending period (.)")
            }
            SyntaxErrorKind::UnexpectedCharacter(c) => write!(
                f,
                "unexpected character '{}' not enclosed in quotes or in <>",
                c.escape_ascii()
            ),
            SyntaxErrorKind::TrailingBackslash => write!(f, "input ended with a backslash"),
            SyntaxErrorKind::TokenTooLong => {
                write!(f, "a token exceeded the maximum token length")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{}", e),
            Error::Syntax { line, kind } => write!(f, "error while parsing line {}: {}", line, kind),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
