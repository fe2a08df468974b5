//! `TokenReader` — pull-based JSON tokenizer over a borrowed byte slice.
//!
//! The scanning routines follow the json-pack `JsonDecoder` (literal checks,
//! number classification, quote scanning, serde_json for unescaping), but
//! instead of building a value tree the reader hands out one [`Token`] per
//! call and tracks nesting so that commas, colons and member names are
//! validated as they are crossed.

use std::borrow::Cow;

use crate::scope::{Scope, ScopeKind};
use crate::{Kind, Token, TokenError};

pub struct TokenReader<'a> {
    data: &'a [u8],
    x: usize,
    stack: Vec<Scope>,
    /// Set once the single top-level value has been read completely.
    done: bool,
}

impl<'a> TokenReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            x: 0,
            stack: Vec::new(),
            done: false,
        }
    }

    /// Byte offset of the next unread input byte.
    pub fn offset(&self) -> usize {
        self.x
    }

    /// Number of currently open objects and arrays.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Reads the next token.
    ///
    /// Returns [`TokenError::Eof`] once the top-level value has been read and
    /// only whitespace remains.
    ///
    /// # Example
    ///
    /// ```
    /// use isset_json_token::{Token, TokenReader};
    ///
    /// let mut reader = TokenReader::new(br#"{"port": 8080}"#);
    /// assert_eq!(reader.read_token().unwrap(), Token::BeginObject);
    /// assert_eq!(reader.read_token().unwrap(), Token::str("port"));
    /// assert_eq!(reader.read_token().unwrap(), Token::Integer(8080));
    /// assert_eq!(reader.read_token().unwrap(), Token::EndObject);
    /// ```
    pub fn read_token(&mut self) -> Result<Token<'a>, TokenError> {
        self.skip_whitespace();
        let Some(scope) = self.stack.last().copied() else {
            if self.done {
                return match self.data.get(self.x) {
                    None => Err(TokenError::Eof),
                    Some(_) => Err(self.invalid_char()),
                };
            }
            return self.read_value();
        };
        let ch = self.peek()?;
        match scope.kind {
            ScopeKind::Object if scope.wants_name() => {
                if ch == b'}' {
                    self.x += 1;
                    self.stack.pop();
                    self.value_done();
                    return Ok(Token::EndObject);
                }
                if scope.needs_comma() {
                    self.expect(b',')?;
                    self.skip_whitespace();
                }
                if self.peek()? != b'"' {
                    return Err(self.invalid_char());
                }
                let name = self.read_str()?;
                self.bump_scope();
                Ok(Token::String(name))
            }
            ScopeKind::Object => {
                self.expect(b':')?;
                self.skip_whitespace();
                self.read_value()
            }
            ScopeKind::Array => {
                if ch == b']' {
                    self.x += 1;
                    self.stack.pop();
                    self.value_done();
                    return Ok(Token::EndArray);
                }
                if scope.needs_comma() {
                    self.expect(b',')?;
                    self.skip_whitespace();
                }
                self.read_value()
            }
        }
    }

    /// Reports the kind of the next token without consuming it.
    pub fn peek_kind(&mut self) -> Result<Kind, TokenError> {
        self.skip_whitespace();
        let data = self.data;
        let mut x = self.x;
        match self.stack.last() {
            None if self.done => {
                return match data.get(x) {
                    None => Err(TokenError::Eof),
                    Some(_) => Err(self.invalid_char()),
                };
            }
            None => {}
            Some(scope) => {
                let sep = if scope.kind == ScopeKind::Object && !scope.wants_name() {
                    Some(b':')
                } else if scope.needs_comma() {
                    Some(b',')
                } else {
                    None
                };
                if let Some(sep) = sep {
                    if data.get(x) == Some(&sep) {
                        x += 1;
                        while x < data.len() && is_whitespace(data[x]) {
                            x += 1;
                        }
                    }
                }
            }
        }
        let ch = *data.get(x).ok_or(TokenError::UnexpectedEof(x))?;
        let kind = match ch {
            b'{' => Kind::BeginObject,
            b'}' => Kind::EndObject,
            b'[' => Kind::BeginArray,
            b']' => Kind::EndArray,
            b'n' => Kind::Null,
            b't' | b'f' => Kind::Bool,
            b'"' => Kind::String,
            b'-' | b'0'..=b'9' => {
                let end = data[x..]
                    .iter()
                    .position(|b| !is_number_byte(*b))
                    .map_or(data.len(), |n| x + n);
                if data[x..end].iter().any(|b| matches!(b, b'.' | b'e' | b'E')) {
                    Kind::Float
                } else {
                    Kind::Integer
                }
            }
            _ => {
                return Err(TokenError::InvalidCharacter {
                    ch: char_at(data, x),
                    offset: x,
                })
            }
        };
        Ok(kind)
    }

    /// Consumes the next complete value, including any nested containers.
    pub fn skip_value(&mut self) -> Result<(), TokenError> {
        if matches!(self.peek_kind()?, Kind::EndObject | Kind::EndArray) {
            return Err(self.invalid_char());
        }
        let mut depth = 0usize;
        loop {
            match self.read_token()?.kind() {
                Kind::BeginObject | Kind::BeginArray => depth += 1,
                Kind::EndObject | Kind::EndArray => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ if depth == 0 => return Ok(()),
                _ => {}
            }
        }
    }

    fn read_value(&mut self) -> Result<Token<'a>, TokenError> {
        let ch = self.peek()?;
        let token = match ch {
            b'{' => {
                self.x += 1;
                self.stack.push(Scope::object());
                return Ok(Token::BeginObject);
            }
            b'[' => {
                self.x += 1;
                self.stack.push(Scope::array());
                return Ok(Token::BeginArray);
            }
            b'n' => {
                self.read_literal(b"null")?;
                Token::Null
            }
            b't' => {
                self.read_literal(b"true")?;
                Token::Bool(true)
            }
            b'f' => {
                self.read_literal(b"false")?;
                Token::Bool(false)
            }
            b'"' => Token::String(self.read_str()?),
            b'-' | b'0'..=b'9' => self.read_num()?,
            _ => return Err(self.invalid_char()),
        };
        self.value_done();
        Ok(token)
    }

    fn read_literal(&mut self, literal: &[u8]) -> Result<(), TokenError> {
        let end = self.x + literal.len();
        if end > self.data.len() || &self.data[self.x..end] != literal {
            return Err(TokenError::InvalidLiteral(self.x));
        }
        self.x = end;
        Ok(())
    }

    fn read_num(&mut self) -> Result<Token<'a>, TokenError> {
        let data = self.data;
        let start = self.x;
        let mut x = start;

        if data[x] == b'-' {
            x += 1;
        }
        match data.get(x) {
            Some(b'0') => {
                x += 1;
                if data.get(x).is_some_and(u8::is_ascii_digit) {
                    return Err(TokenError::InvalidNumber(start));
                }
            }
            Some(b'1'..=b'9') => x = skip_digits(data, x),
            _ => return Err(TokenError::InvalidNumber(start)),
        }
        let mut is_float = false;
        if data.get(x) == Some(&b'.') {
            is_float = true;
            let digits = x + 1;
            x = skip_digits(data, digits);
            if x == digits {
                return Err(TokenError::InvalidNumber(start));
            }
        }
        if matches!(data.get(x), Some(b'e' | b'E')) {
            is_float = true;
            x += 1;
            if matches!(data.get(x), Some(b'+' | b'-')) {
                x += 1;
            }
            let digits = x;
            x = skip_digits(data, digits);
            if x == digits {
                return Err(TokenError::InvalidNumber(start));
            }
        }
        self.x = x;

        let s = std::str::from_utf8(&data[start..x]).map_err(|_| TokenError::InvalidNumber(start))?;
        if is_float {
            let f: f64 = s.parse().map_err(|_| TokenError::InvalidNumber(start))?;
            if !f.is_finite() {
                return Err(TokenError::NumberOutOfRange(start));
            }
            Ok(Token::Float(f))
        } else if let Ok(i) = s.parse::<i64>() {
            Ok(Token::Integer(i))
        } else if let Ok(u) = s.parse::<u64>() {
            Ok(Token::UInteger(u))
        } else {
            Err(TokenError::NumberOutOfRange(start))
        }
    }

    fn read_str(&mut self) -> Result<Cow<'a, str>, TokenError> {
        let data = self.data;
        let start = self.x;
        let mut x = start + 1;
        let mut escaped = false;
        loop {
            match data.get(x) {
                None => return Err(TokenError::UnexpectedEof(data.len())),
                Some(b'"') => break,
                Some(b'\\') => {
                    escaped = true;
                    x += 2;
                }
                Some(&b) if b < 0x20 => return Err(TokenError::InvalidString(x)),
                Some(_) => x += 1,
            }
        }
        self.x = x + 1;
        let body = &data[start + 1..x];
        if !escaped {
            return std::str::from_utf8(body)
                .map(Cow::Borrowed)
                .map_err(|e| TokenError::InvalidUtf8(start + 1 + e.valid_up_to()));
        }
        // Escapes present: let serde_json do the unescaping on the quoted literal.
        let s: String =
            serde_json::from_slice(&data[start..=x]).map_err(|_| TokenError::InvalidString(start))?;
        Ok(Cow::Owned(s))
    }

    fn skip_whitespace(&mut self) {
        while self.x < self.data.len() && is_whitespace(self.data[self.x]) {
            self.x += 1;
        }
    }

    fn peek(&self) -> Result<u8, TokenError> {
        self.data
            .get(self.x)
            .copied()
            .ok_or(TokenError::UnexpectedEof(self.x))
    }

    fn expect(&mut self, ch: u8) -> Result<(), TokenError> {
        if self.peek()? != ch {
            return Err(self.invalid_char());
        }
        self.x += 1;
        Ok(())
    }

    fn bump_scope(&mut self) {
        if let Some(scope) = self.stack.last_mut() {
            scope.len += 1;
        }
    }

    fn value_done(&mut self) {
        match self.stack.last_mut() {
            Some(scope) => scope.len += 1,
            None => self.done = true,
        }
    }

    fn invalid_char(&self) -> TokenError {
        TokenError::InvalidCharacter {
            ch: char_at(self.data, self.x),
            offset: self.x,
        }
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn is_number_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E')
}

fn skip_digits(data: &[u8], mut x: usize) -> usize {
    while x < data.len() && data[x].is_ascii_digit() {
        x += 1;
    }
    x
}

/// Decodes the character starting at `x` for diagnostics.
fn char_at(data: &[u8], x: usize) -> char {
    let tail = &data[x.min(data.len())..];
    (1..=tail.len().min(4))
        .find_map(|n| std::str::from_utf8(&tail[..n]).ok())
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
