//! Minimal pull/push JSON tokenizer.
//!
//! [`TokenReader`] walks a single JSON document held in a byte slice and
//! returns one [`Token`] per call, borrowing string contents from the input
//! when no unescaping is required. [`TokenWriter`] is the mirror image: it
//! accepts tokens one at a time and produces compact JSON.
//!
//! Both sides validate structure (separators, member names, nesting) so that
//! a per-field codec can read or write exactly one value without knowing
//! where in the document it sits.
//!
//! # Example
//!
//! ```
//! use isset_json_token::{Kind, Token, TokenReader, TokenWriter};
//!
//! let mut reader = TokenReader::new(br#"[1, 2.5, "x"]"#);
//! let mut writer = TokenWriter::new();
//! loop {
//!     match reader.read_token() {
//!         Ok(token) => writer.write_token(&token).unwrap(),
//!         Err(isset_json_token::TokenError::Eof) => break,
//!         Err(e) => panic!("{e}"),
//!     }
//! }
//! assert_eq!(writer.as_bytes(), br#"[1,2.5,"x"]"#);
//! assert_eq!(Token::Float(2.5).kind(), Kind::Float);
//! ```

mod error;
mod reader;
mod scope;
mod token;
mod writer;

pub use error::TokenError;
pub use reader::TokenReader;
pub use token::{Kind, Token};
pub use writer::TokenWriter;
