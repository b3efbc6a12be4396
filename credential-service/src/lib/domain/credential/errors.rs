use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for credential operations
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Absent email and wrong password both collapse here; callers must not
    /// be able to tell which it was.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
