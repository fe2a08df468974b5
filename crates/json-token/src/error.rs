use thiserror::Error;

use crate::Kind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The document has been fully read.
    #[error("end of JSON input")]
    Eof,
    #[error("unexpected end of JSON input at offset {0}")]
    UnexpectedEof(usize),
    #[error("invalid character {ch:?} at offset {offset}")]
    InvalidCharacter { ch: char, offset: usize },
    #[error("invalid literal at offset {0}")]
    InvalidLiteral(usize),
    #[error("invalid number at offset {0}")]
    InvalidNumber(usize),
    #[error("number out of range at offset {0}")]
    NumberOutOfRange(usize),
    #[error("invalid string at offset {0}")]
    InvalidString(usize),
    #[error("invalid UTF-8 at offset {0}")]
    InvalidUtf8(usize),
    /// Writer only: the token is not allowed at the current position.
    #[error("cannot write {found} here, expected {expected}")]
    UnexpectedToken { found: Kind, expected: &'static str },
    /// Writer only: a complete top-level value has already been written.
    #[error("a top-level value has already been written")]
    TrailingValue,
}
