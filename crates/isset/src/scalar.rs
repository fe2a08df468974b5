//! The closed set of primitive types a [`Settable`](crate::Settable) can hold.
//!
//! Each implementation picks its token accessor and constructor statically,
//! so the token-stream codec never inspects `T` at run time.

use std::fmt;

use isset_json_token::{Token, TokenError, TokenWriter};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON category a scalar type expects on the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    /// Integer tokens only; fractional numbers are rejected.
    Integer,
    /// Any number.
    Float,
    String,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScalarKind::Bool => "boolean",
            ScalarKind::Integer => "integer",
            ScalarKind::Float => "number",
            ScalarKind::String => "string",
        })
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive type usable inside [`Settable`](crate::Settable).
///
/// Sealed: implemented for `bool`, the signed and unsigned integer types,
/// `f32`, `f64` and `String`.
pub trait Scalar: Clone + Default + PartialEq + Serialize + DeserializeOwned + sealed::Sealed {
    const KIND: ScalarKind;

    /// Extracts a value from a token of the expected category.
    ///
    /// Integers are read through the token's 64-bit accessor and then cast to
    /// the target width, so out-of-range values wrap. Returns `None` for any
    /// other category; `null` is handled by the caller.
    fn from_token(token: Token<'_>) -> Option<Self>;

    /// Writes exactly one token carrying `self`.
    fn write_token(&self, writer: &mut TokenWriter) -> Result<(), TokenError>;
}

macro_rules! signed_scalar {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Scalar for $t {
            const KIND: ScalarKind = ScalarKind::Integer;

            fn from_token(token: Token<'_>) -> Option<Self> {
                token.as_i64().map(|i| i as $t)
            }

            fn write_token(&self, writer: &mut TokenWriter) -> Result<(), TokenError> {
                writer.write_i64(*self as i64)
            }
        }
    )*};
}

macro_rules! unsigned_scalar {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Scalar for $t {
            const KIND: ScalarKind = ScalarKind::Integer;

            fn from_token(token: Token<'_>) -> Option<Self> {
                token.as_u64().map(|u| u as $t)
            }

            fn write_token(&self, writer: &mut TokenWriter) -> Result<(), TokenError> {
                writer.write_u64(*self as u64)
            }
        }
    )*};
}

signed_scalar!(i8, i16, i32, i64, isize);
unsigned_scalar!(u8, u16, u32, u64, usize);

impl sealed::Sealed for f32 {}

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::Float;

    fn from_token(token: Token<'_>) -> Option<Self> {
        token.as_f64().map(|f| f as f32)
    }

    fn write_token(&self, writer: &mut TokenWriter) -> Result<(), TokenError> {
        writer.write_f32(*self)
    }
}

impl sealed::Sealed for f64 {}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Float;

    fn from_token(token: Token<'_>) -> Option<Self> {
        token.as_f64()
    }

    fn write_token(&self, writer: &mut TokenWriter) -> Result<(), TokenError> {
        writer.write_f64(*self)
    }
}

impl sealed::Sealed for bool {}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn from_token(token: Token<'_>) -> Option<Self> {
        token.as_bool()
    }

    fn write_token(&self, writer: &mut TokenWriter) -> Result<(), TokenError> {
        writer.write_bool(*self)
    }
}

impl sealed::Sealed for String {}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn from_token(token: Token<'_>) -> Option<Self> {
        match token {
            Token::String(s) => Some(s.into_owned()),
            _ => None,
        }
    }

    fn write_token(&self, writer: &mut TokenWriter) -> Result<(), TokenError> {
        writer.write_str(self)
    }
}
