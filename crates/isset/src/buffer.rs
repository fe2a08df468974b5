//! Buffer codec: one complete JSON value per call.

use tracing::trace;

use crate::text::is_null_literal;
use crate::{Error, Scalar, Settable};

/// Encoding and decoding of a single JSON value held in memory.
pub trait BufferCodec {
    /// Encodes the value. An empty result means the enclosing object should
    /// omit the key altogether.
    fn encode_json(&self) -> Result<Vec<u8>, Error>;

    /// Decodes one JSON value from `data`. On error `self` is unchanged.
    fn decode_json(&mut self, data: &[u8]) -> Result<(), Error>;
}

impl<T: Scalar> BufferCodec for Settable<T> {
    /// ```
    /// use isset::{Bool, BufferCodec};
    ///
    /// assert_eq!(Bool::default().encode_json().unwrap(), b"");
    /// assert_eq!(Bool::default().set(false).encode_json().unwrap(), b"false");
    /// ```
    fn encode_json(&self) -> Result<Vec<u8>, Error> {
        if !self.is_set() {
            return Ok(Vec::new());
        }
        Ok(serde_json::to_vec(self.get())?)
    }

    /// ```
    /// use isset::{BufferCodec, Int};
    ///
    /// let mut v = Int::default();
    /// v.decode_json(b"42").unwrap();
    /// assert_eq!((v.is_set(), v.value()), (true, 42));
    ///
    /// v.decode_json(b"null").unwrap();
    /// assert_eq!((v.is_set(), v.value()), (false, 0));
    /// ```
    fn decode_json(&mut self, data: &[u8]) -> Result<(), Error> {
        if is_null_literal(data) {
            trace!(kind = %T::KIND, "null literal, clearing value");
            self.clear();
            return Ok(());
        }
        let value: T = serde_json::from_slice(data).map_err(|e| {
            trace!(kind = %T::KIND, error = %e, "rejected JSON literal");
            e
        })?;
        self.assign(value);
        Ok(())
    }
}
