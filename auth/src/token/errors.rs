use thiserror::Error;

/// Error type for token encoding and decoding.
///
/// Decode failures are deliberately fine-grained: a token signed with a
/// different key fails with `InvalidSignature`, not a generic parse error,
/// even though callers usually collapse all of these into a single 401.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is empty")]
    EmptyInput,

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Unsupported token format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}
