use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for DisplayName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DisplayNameError {
    #[error("Display name cannot be empty")]
    Empty,

    #[error("Display name cannot be longer than {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for profile operations
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid display name: {0}")]
    InvalidDisplayName(#[from] DisplayNameError),

    #[error("Profile already exists for this user")]
    DuplicateProfile,

    #[error("Email already in use: {0}")]
    DuplicateEmail(String),

    #[error("Profile with ID {0} not found")]
    NotFound(String),

    #[error("Cannot access another user's profile")]
    Forbidden,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
