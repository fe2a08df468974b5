//! Token-stream codec: read or write exactly one token per field.

use isset_json_token::{Kind, TokenReader, TokenWriter};
use tracing::{debug, trace};

use crate::{Error, Scalar, Settable};

/// Encoding and decoding against a [`TokenWriter`] / [`TokenReader`].
///
/// Encoding writes the current value whether or not it is set; an enclosing
/// object encoder should skip unset fields instead of calling it.
pub trait TokenCodec {
    fn encode_tokens(&self, writer: &mut TokenWriter) -> Result<(), Error>;

    /// Reads one token. On error `self` is unchanged.
    fn decode_tokens(&mut self, reader: &mut TokenReader<'_>) -> Result<(), Error>;
}

impl<T: Scalar> TokenCodec for Settable<T> {
    fn encode_tokens(&self, writer: &mut TokenWriter) -> Result<(), Error> {
        self.get().write_token(writer)?;
        Ok(())
    }

    /// ```
    /// use isset::{Int, TokenCodec};
    /// use isset_json_token::TokenReader;
    ///
    /// let mut v = Int::default();
    /// v.decode_tokens(&mut TokenReader::new(b"17")).unwrap();
    /// assert_eq!(v.value(), 17);
    ///
    /// assert!(v.decode_tokens(&mut TokenReader::new(b"1.5")).is_err());
    /// assert_eq!(v.value(), 17);
    /// ```
    fn decode_tokens(&mut self, reader: &mut TokenReader<'_>) -> Result<(), Error> {
        let token = reader.read_token()?;
        let found = token.kind();
        if found == Kind::Null {
            trace!(kind = %T::KIND, "null token, clearing value");
            self.clear();
            return Ok(());
        }
        match T::from_token(token) {
            Some(value) => {
                self.assign(value);
                Ok(())
            }
            None => {
                debug!(expected = %T::KIND, %found, offset = reader.offset(), "unexpected token kind");
                Err(Error::UnexpectedKind {
                    expected: T::KIND,
                    found,
                })
            }
        }
    }
}
