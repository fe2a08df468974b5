use isset_json_token::{Kind, TokenError};
use thiserror::Error;

use crate::ScalarKind;

#[derive(Debug, Error)]
pub enum Error {
    /// Buffer codec failure reported by serde_json: malformed JSON, a
    /// literal of the wrong type, or a number that does not fit the target.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    /// Token codec read a token that is neither `null` nor of the expected
    /// category.
    #[error("expected a JSON {expected} or null, got {found}")]
    UnexpectedKind { expected: ScalarKind, found: Kind },
    #[error(transparent)]
    Stream(#[from] TokenError),
}
