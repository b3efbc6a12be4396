use std::fmt;

use auth::Identity;
use chrono::DateTime;
use chrono::Utc;

use crate::expense::errors::AmountError;
use crate::expense::errors::CategoryError;
use crate::expense::errors::CurrencyError;

/// Expense aggregate entity.
///
/// `owner` is set to the creating caller's identity and never changes; every
/// read, update and delete is scoped to it.
#[derive(Debug, Clone)]
pub struct Expense {
    pub id: ExpenseId,
    pub owner: Identity,
    pub amount: Amount,
    pub currency: Currency,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

/// Expense unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpenseId(pub i64);

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Monetary amount, strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(f64);

impl Amount {
    /// # Errors
    /// * `NotPositive` - Zero, negative, or not a finite number
    pub fn new(amount: f64) -> Result<Self, AmountError> {
        if amount.is_finite() && amount > 0.0 {
            Ok(Self(amount))
        } else {
            Err(AmountError::NotPositive(amount))
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

/// ISO 4217 style currency code, at most 3 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency(String);

impl Currency {
    const MAX_LENGTH: usize = 3;

    /// # Errors
    /// * `TooLong` - More than 3 characters
    /// * `Empty` - Blank code
    pub fn new(currency: String) -> Result<Self, CurrencyError> {
        if currency.is_empty() {
            Err(CurrencyError::Empty)
        } else if currency.len() > Self::MAX_LENGTH {
            Err(CurrencyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: currency.len(),
            })
        } else {
            Ok(Self(currency))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form expense category, at most 120 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(String);

impl Category {
    const MAX_LENGTH: usize = 120;

    /// # Errors
    /// * `TooLong` - More than 120 characters
    pub fn new(category: String) -> Result<Self, CategoryError> {
        if category.len() > Self::MAX_LENGTH {
            Err(CategoryError::TooLong {
                max: Self::MAX_LENGTH,
                actual: category.len(),
            })
        } else {
            Ok(Self(category))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a new expense with domain types.
///
/// Carries no owner: the owner is always the authenticated caller, never
/// client input.
#[derive(Debug)]
pub struct CreateExpenseCommand {
    pub amount: Amount,
    pub currency: Currency,
    pub category: Category,
}

impl CreateExpenseCommand {
    pub fn new(amount: Amount, currency: Currency, category: Category) -> Self {
        Self {
            amount,
            currency,
            category,
        }
    }
}

/// Command to update an existing expense; only provided fields change.
#[derive(Debug)]
pub struct UpdateExpenseCommand {
    pub amount: Option<Amount>,
    pub currency: Option<Currency>,
    pub category: Option<Category>,
}

/// Offset/limit window for listings.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_must_be_positive() {
        assert!(Amount::new(12.5).is_ok());
        assert!(matches!(Amount::new(0.0), Err(AmountError::NotPositive(_))));
        assert!(matches!(
            Amount::new(-3.0),
            Err(AmountError::NotPositive(_))
        ));
        assert!(matches!(
            Amount::new(f64::NAN),
            Err(AmountError::NotPositive(_))
        ));
    }

    #[test]
    fn test_currency_length() {
        assert!(Currency::new("USD".to_string()).is_ok());
        assert!(matches!(
            Currency::new("".to_string()),
            Err(CurrencyError::Empty)
        ));
        assert!(matches!(
            Currency::new("EUROS".to_string()),
            Err(CurrencyError::TooLong { .. })
        ));
    }

    #[test]
    fn test_category_length() {
        assert!(Category::new("groceries".to_string()).is_ok());
        assert!(matches!(
            Category::new("x".repeat(121)),
            Err(CategoryError::TooLong { .. })
        ));
    }
}
