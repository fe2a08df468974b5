//! `Token` — a single lexical JSON token, as produced by [`TokenReader`] and
//! consumed by [`TokenWriter`].
//!
//! Numbers are classified the same way the json-pack decoder classifies them:
//! anything with a fraction or exponent is a float, integers that fit in
//! `i64` are signed and the remaining non-negative range up to `u64::MAX` is
//! unsigned.
//!
//! [`TokenReader`]: crate::TokenReader
//! [`TokenWriter`]: crate::TokenWriter

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    Null,
    Bool(bool),
    Integer(i64),
    /// Only produced for integers above `i64::MAX`.
    UInteger(u64),
    Float(f64),
    /// Borrowed from the input unless the literal contained escapes.
    String(Cow<'a, str>),
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
}

/// The kind of a [`Token`], used for dispatch and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
}

impl Kind {
    /// True for the three kinds that carry a JSON number.
    pub fn is_number(self) -> bool {
        matches!(self, Kind::Integer | Kind::Float)
    }

    /// True for tokens that open or close a container.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Kind::BeginObject | Kind::EndObject | Kind::BeginArray | Kind::EndArray
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::BeginObject => "'{'",
            Kind::EndObject => "'}'",
            Kind::BeginArray => "'['",
            Kind::EndArray => "']'",
        };
        f.write_str(s)
    }
}

impl<'a> Token<'a> {
    pub fn kind(&self) -> Kind {
        match self {
            Token::Null => Kind::Null,
            Token::Bool(_) => Kind::Bool,
            Token::Integer(_) | Token::UInteger(_) => Kind::Integer,
            Token::Float(_) => Kind::Float,
            Token::String(_) => Kind::String,
            Token::BeginObject => Kind::BeginObject,
            Token::EndObject => Kind::EndObject,
            Token::BeginArray => Kind::BeginArray,
            Token::EndArray => Kind::EndArray,
        }
    }

    pub fn str(s: &'a str) -> Self {
        Token::String(Cow::Borrowed(s))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Token::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Signed value of an integer token, saturating at `i64::MAX`.
    ///
    /// Returns `None` for floats and non-numeric tokens.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Token::Integer(i) => Some(*i),
            Token::UInteger(u) => Some(i64::try_from(*u).unwrap_or(i64::MAX)),
            _ => None,
        }
    }

    /// Unsigned value of an integer token. Negative integers saturate to 0.
    ///
    /// Returns `None` for floats and non-numeric tokens.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Token::Integer(i) => Some(u64::try_from(*i).unwrap_or(0)),
            Token::UInteger(u) => Some(*u),
            _ => None,
        }
    }

    /// Any number as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Token::Integer(i) => Some(*i as f64),
            Token::UInteger(u) => Some(*u as f64),
            Token::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::String(s) => Some(s),
            _ => None,
        }
    }

    /// Detaches the token from the input buffer.
    pub fn into_owned(self) -> Token<'static> {
        match self {
            Token::Null => Token::Null,
            Token::Bool(b) => Token::Bool(b),
            Token::Integer(i) => Token::Integer(i),
            Token::UInteger(u) => Token::UInteger(u),
            Token::Float(f) => Token::Float(f),
            Token::String(s) => Token::String(Cow::Owned(s.into_owned())),
            Token::BeginObject => Token::BeginObject,
            Token::EndObject => Token::EndObject,
            Token::BeginArray => Token::BeginArray,
            Token::EndArray => Token::EndArray,
        }
    }
}
