//! Scalar values that know whether they were set.
//!
//! A plain `u16` field cannot tell "never configured" apart from "configured
//! as 0". [`Settable<T>`] keeps the value inline next to a flag:
//!
//! ```
//! use isset::Uint16;
//!
//! struct Listener {
//!     port: Uint16,
//! }
//!
//! let mut l = Listener { port: Uint16::default() };
//! assert!(!l.port.is_set());
//!
//! l.port = l.port.set(0); // mutators return a new value
//! assert!(l.port.is_set());
//! assert_eq!(l.port.value(), 0);
//! ```
//!
//! # JSON
//!
//! Every container speaks two codecs:
//!
//! - [`BufferCodec`] encodes/decodes one value held in a byte buffer through
//!   serde_json. An unset container encodes to an empty buffer, which the
//!   enclosing object encoder takes as "omit this key". The exact literal
//!   `null` decodes to unset.
//! - [`TokenCodec`] reads or writes exactly one token on an
//!   [`isset_json_token`] stream without materializing the value in a
//!   separate buffer.
//!
//! The serde traits are implemented as well, so derived host structures work
//! with `#[serde(skip_serializing_if = "Settable::is_unset")]`:
//!
//! ```
//! use isset::{Bool, Settable, Text};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct Config {
//!     #[serde(default, skip_serializing_if = "Settable::is_unset")]
//!     name: Text,
//!     #[serde(default, skip_serializing_if = "Settable::is_unset")]
//!     verbose: Bool,
//! }
//!
//! let cfg: Config = serde_json::from_str(r#"{"verbose": false}"#).unwrap();
//! assert!(!cfg.name.is_set());
//! assert!(cfg.verbose.is_set());
//! assert_eq!(serde_json::to_string(&cfg).unwrap(), r#"{"verbose":false}"#);
//! ```
//!
//! Decoding `null` and never seeing the key both end in the unset state; the
//! container does not record which of the two happened.

mod buffer;
mod error;
mod scalar;
mod serde_impl;
mod settable;
mod stream;
mod text;

pub use buffer::BufferCodec;
pub use error::Error;
pub use scalar::{Scalar, ScalarKind};
pub use settable::Settable;
pub use stream::TokenCodec;
pub use text::bytes_to_str;

pub type Bool = Settable<bool>;

pub type Int = Settable<isize>;
pub type Int8 = Settable<i8>;
pub type Int16 = Settable<i16>;
pub type Int32 = Settable<i32>;
pub type Int64 = Settable<i64>;

pub type Uint = Settable<usize>;
pub type Uint8 = Settable<u8>;
pub type Uint16 = Settable<u16>;
pub type Uint32 = Settable<u32>;
pub type Uint64 = Settable<u64>;

pub type Float32 = Settable<f32>;
pub type Float64 = Settable<f64>;

pub type Text = Settable<String>;
