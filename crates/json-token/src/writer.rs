//! `TokenWriter` — push-based JSON writer.
//!
//! Adapted from the json-pack `JsonEncoder`: literals are written as raw
//! bytes, plain ASCII strings take a copy-only fast path and everything else
//! goes through serde_json. On top of that the writer tracks nesting, inserts
//! `,` and `:` itself and refuses tokens that would produce invalid JSON.

use crate::scope::{Scope, ScopeKind};
use crate::{Kind, Token, TokenError};

#[derive(Debug, Default)]
pub struct TokenWriter {
    buf: Vec<u8>,
    stack: Vec<Scope>,
    done: bool,
}

impl TokenWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Writes one token.
    ///
    /// # Example
    ///
    /// ```
    /// use isset_json_token::{Token, TokenWriter};
    ///
    /// let mut writer = TokenWriter::new();
    /// writer.write_token(&Token::BeginObject).unwrap();
    /// writer.write_token(&Token::str("debug")).unwrap();
    /// writer.write_token(&Token::Bool(false)).unwrap();
    /// writer.write_token(&Token::EndObject).unwrap();
    /// assert_eq!(writer.as_bytes(), br#"{"debug":false}"#);
    /// ```
    pub fn write_token(&mut self, token: &Token<'_>) -> Result<(), TokenError> {
        match token {
            Token::Null => self.write_null(),
            Token::Bool(b) => self.write_bool(*b),
            Token::Integer(i) => self.write_i64(*i),
            Token::UInteger(u) => self.write_u64(*u),
            Token::Float(f) => self.write_f64(*f),
            Token::String(s) => self.write_str(s),
            Token::BeginObject => self.begin_object(),
            Token::EndObject => self.end_object(),
            Token::BeginArray => self.begin_array(),
            Token::EndArray => self.end_array(),
        }
    }

    pub fn write_null(&mut self) -> Result<(), TokenError> {
        self.prepare(Kind::Null)?;
        self.buf.extend_from_slice(b"null");
        self.value_done();
        Ok(())
    }

    pub fn write_bool(&mut self, b: bool) -> Result<(), TokenError> {
        self.prepare(Kind::Bool)?;
        let literal: &[u8] = if b { b"true" } else { b"false" };
        self.buf.extend_from_slice(literal);
        self.value_done();
        Ok(())
    }

    pub fn write_i64(&mut self, int: i64) -> Result<(), TokenError> {
        self.prepare(Kind::Integer)?;
        self.write_number(&int);
        self.value_done();
        Ok(())
    }

    pub fn write_u64(&mut self, uint: u64) -> Result<(), TokenError> {
        self.prepare(Kind::Integer)?;
        self.write_number(&uint);
        self.value_done();
        Ok(())
    }

    /// Writes the shortest representation that reads back as the same `f32`.
    /// Non-finite values are written as `null`.
    pub fn write_f32(&mut self, float: f32) -> Result<(), TokenError> {
        self.prepare(Kind::Float)?;
        self.write_number(&float);
        self.value_done();
        Ok(())
    }

    /// Non-finite values are written as `null`, as serde_json does.
    pub fn write_f64(&mut self, float: f64) -> Result<(), TokenError> {
        self.prepare(Kind::Float)?;
        self.write_number(&float);
        self.value_done();
        Ok(())
    }

    /// Writes a string value, or a member name when an object expects one.
    pub fn write_str(&mut self, s: &str) -> Result<(), TokenError> {
        let is_name = self.stack.last().is_some_and(Scope::wants_name);
        self.prepare(Kind::String)?;
        self.write_escaped(s);
        if is_name {
            if let Some(scope) = self.stack.last_mut() {
                scope.len += 1;
            }
        } else {
            self.value_done();
        }
        Ok(())
    }

    pub fn begin_object(&mut self) -> Result<(), TokenError> {
        self.prepare(Kind::BeginObject)?;
        self.buf.push(b'{');
        self.stack.push(Scope::object());
        Ok(())
    }

    pub fn end_object(&mut self) -> Result<(), TokenError> {
        self.close(ScopeKind::Object, Kind::EndObject, b'}')
    }

    pub fn begin_array(&mut self) -> Result<(), TokenError> {
        self.prepare(Kind::BeginArray)?;
        self.buf.push(b'[');
        self.stack.push(Scope::array());
        Ok(())
    }

    pub fn end_array(&mut self) -> Result<(), TokenError> {
        self.close(ScopeKind::Array, Kind::EndArray, b']')
    }

    /// True once a complete top-level value has been written.
    pub fn is_complete(&self) -> bool {
        self.done
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Checks that `kind` may appear next and writes the separator before it.
    fn prepare(&mut self, kind: Kind) -> Result<(), TokenError> {
        let Some(scope) = self.stack.last().copied() else {
            if self.done {
                return Err(TokenError::TrailingValue);
            }
            return Ok(());
        };
        if scope.wants_name() {
            if kind != Kind::String {
                return Err(TokenError::UnexpectedToken {
                    found: kind,
                    expected: "object member name",
                });
            }
            if scope.needs_comma() {
                self.buf.push(b',');
            }
        } else if scope.kind == ScopeKind::Object {
            self.buf.push(b':');
        } else if scope.needs_comma() {
            self.buf.push(b',');
        }
        Ok(())
    }

    fn close(&mut self, kind: ScopeKind, token: Kind, byte: u8) -> Result<(), TokenError> {
        match self.stack.last() {
            Some(scope) if scope.kind == kind && (kind == ScopeKind::Array || scope.wants_name()) => {}
            Some(scope) if scope.kind == ScopeKind::Object && !scope.wants_name() => {
                return Err(TokenError::UnexpectedToken {
                    found: token,
                    expected: "object member value",
                })
            }
            _ => {
                return Err(TokenError::UnexpectedToken {
                    found: token,
                    expected: "matching container start",
                })
            }
        }
        self.stack.pop();
        self.buf.push(byte);
        self.value_done();
        Ok(())
    }

    fn value_done(&mut self) {
        match self.stack.last_mut() {
            Some(scope) => scope.len += 1,
            None => self.done = true,
        }
    }

    fn write_number<N: serde::Serialize + ?Sized>(&mut self, n: &N) {
        // Writing a primitive number into a Vec cannot fail.
        let _ = serde_json::to_writer(&mut self.buf, n);
    }

    fn write_escaped(&mut self, s: &str) {
        let bytes = s.as_bytes();
        let plain = bytes
            .iter()
            .all(|&b| (32..=126).contains(&b) && b != b'"' && b != b'\\');
        if plain {
            self.buf.reserve(bytes.len() + 2);
            self.buf.push(b'"');
            self.buf.extend_from_slice(bytes);
            self.buf.push(b'"');
            return;
        }
        let _ = serde_json::to_writer(&mut self.buf, s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut TokenWriter) -> Result<(), TokenError>) -> String {
        let mut w = TokenWriter::new();
        f(&mut w).unwrap();
        String::from_utf8(w.into_bytes()).unwrap()
    }

    #[test]
    fn with_capacity_starts_empty() {
        let mut w = TokenWriter::with_capacity(64);
        assert!(w.as_bytes().is_empty());
        assert!(!w.is_complete());
        w.write_i64(-7).unwrap();
        assert!(w.is_complete());
        assert_eq!(w.as_bytes(), b"-7");
    }

    #[test]
    fn scalar_literals() {
        assert_eq!(written(|w| w.write_null()), "null");
        assert_eq!(written(|w| w.write_bool(true)), "true");
        assert_eq!(written(|w| w.write_bool(false)), "false");
        assert_eq!(written(|w| w.write_i64(i64::MIN)), "-9223372036854775808");
        assert_eq!(written(|w| w.write_u64(u64::MAX)), "18446744073709551615");
        assert_eq!(written(|w| w.write_f64(42.5)), "42.5");
        assert_eq!(written(|w| w.write_f64(0.0)), "0.0");
        assert_eq!(written(|w| w.write_f32(0.1)), "0.1");
        assert_eq!(written(|w| w.write_f64(f64::NAN)), "null");
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(written(|w| w.write_str("hello")), "\"hello\"");
        assert_eq!(written(|w| w.write_str("")), "\"\"");
        assert_eq!(
            written(|w| w.write_str("a\"b\\c\n")),
            r#""a\"b\\c\n""#
        );
        assert_eq!(written(|w| w.write_str("é")), "\"é\"");
    }

    #[test]
    fn separators_are_inserted() {
        let out = written(|w| {
            w.begin_object()?;
            w.write_str("a")?;
            w.write_i64(1)?;
            w.write_str("b")?;
            w.begin_array()?;
            w.write_bool(true)?;
            w.write_null()?;
            w.end_array()?;
            w.write_str("c")?;
            w.begin_object()?;
            w.end_object()?;
            w.end_object()
        });
        assert_eq!(out, r#"{"a":1,"b":[true,null],"c":{}}"#);
    }

    #[test]
    fn rejects_non_string_name() {
        let mut w = TokenWriter::new();
        w.begin_object().unwrap();
        assert_eq!(
            w.write_i64(1),
            Err(TokenError::UnexpectedToken {
                found: Kind::Integer,
                expected: "object member name",
            })
        );
    }

    #[test]
    fn rejects_close_without_value() {
        let mut w = TokenWriter::new();
        w.begin_object().unwrap();
        w.write_str("a").unwrap();
        assert!(w.end_object().is_err());
    }

    #[test]
    fn rejects_mismatched_close() {
        let mut w = TokenWriter::new();
        w.begin_array().unwrap();
        assert!(w.end_object().is_err());
        assert!(TokenWriter::new().end_array().is_err());
    }

    #[test]
    fn rejects_second_top_level_value() {
        let mut w = TokenWriter::new();
        w.write_i64(1).unwrap();
        assert!(w.is_complete());
        assert_eq!(w.write_i64(2), Err(TokenError::TrailingValue));
    }

    #[test]
    fn write_token_dispatch() {
        let out = written(|w| {
            for t in [
                Token::BeginArray,
                Token::Integer(-1),
                Token::UInteger(7),
                Token::Float(1.5),
                Token::str("x"),
                Token::Null,
                Token::EndArray,
            ] {
                w.write_token(&t)?;
            }
            Ok(())
        });
        assert_eq!(out, r#"[-1,7,1.5,"x",null]"#);
    }
}
