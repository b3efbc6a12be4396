use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Invalid token signing configuration: {0}")]
    Configuration(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Single outcome for every decode failure.
    ///
    /// Bad signature, wrong algorithm, expired, malformed and bad subject all
    /// collapse here so callers cannot learn which check failed.
    #[error("Invalid or expired token")]
    InvalidToken,
}
