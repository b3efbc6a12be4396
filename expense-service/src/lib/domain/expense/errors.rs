use thiserror::Error;

/// Error for Amount validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AmountError {
    #[error("Amount must be a positive number, got {0}")]
    NotPositive(f64),
}

/// Error for Currency validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Currency code must not be empty")]
    Empty,

    #[error("Currency code too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Category validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for expense operations
#[derive(Debug, Clone, Error)]
pub enum ExpenseError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("Invalid currency: {0}")]
    InvalidCurrency(#[from] CurrencyError),

    #[error("Invalid category: {0}")]
    InvalidCategory(#[from] CategoryError),

    /// Also reported when the expense exists but belongs to someone else, so
    /// non-owners cannot probe for existence.
    #[error("Expense with ID {0} not found")]
    NotFound(String),

    #[error("Cannot access another user's expenses")]
    Forbidden,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
