//! Borrowed byte-to-text views.

const NULL: &str = "null";

/// Views `bytes` as `&str` without copying.
///
/// Returns `None` if the bytes are not valid UTF-8.
///
/// ```
/// assert_eq!(isset::bytes_to_str(b"null"), Some("null"));
/// assert_eq!(isset::bytes_to_str(b"\xff"), None);
/// ```
pub fn bytes_to_str(bytes: &[u8]) -> Option<&str> {
    if bytes.is_empty() {
        return Some("");
    }
    std::str::from_utf8(bytes).ok()
}

/// True only for the exact four-byte literal `null`.
pub(crate) fn is_null_literal(bytes: &[u8]) -> bool {
    bytes.len() == NULL.len() && bytes_to_str(bytes) == Some(NULL)
}
