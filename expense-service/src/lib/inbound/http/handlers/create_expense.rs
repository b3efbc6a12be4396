use auth::Identity;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ExpenseResponseData;
use crate::expense::errors::AmountError;
use crate::expense::errors::CategoryError;
use crate::expense::errors::CurrencyError;
use crate::expense::models::Amount;
use crate::expense::models::Category;
use crate::expense::models::CreateExpenseCommand;
use crate::expense::models::Currency;
use crate::expense::ports::ExpenseServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_expense(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Json(body): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseResponseData>), ApiError> {
    state
        .expense_service
        .create_expense(caller, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref expense| (StatusCode::CREATED, Json(expense.into())))
}

/// HTTP request body for creating an expense (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateExpenseRequest {
    amount: f64,
    #[serde(default = "default_currency")]
    currency: String,
    #[serde(default = "default_category")]
    category: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_category() -> String {
    "other".to_string()
}

#[derive(Debug, Clone, Error)]
pub enum ParseCreateExpenseRequestError {
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),

    #[error("Invalid currency: {0}")]
    Currency(#[from] CurrencyError),

    #[error("Invalid category: {0}")]
    Category(#[from] CategoryError),
}

impl CreateExpenseRequest {
    fn try_into_command(self) -> Result<CreateExpenseCommand, ParseCreateExpenseRequestError> {
        let amount = Amount::new(self.amount)?;
        let currency = Currency::new(self.currency)?;
        let category = Category::new(self.category)?;
        Ok(CreateExpenseCommand::new(amount, currency, category))
    }
}

impl From<ParseCreateExpenseRequestError> for ApiError {
    fn from(err: ParseCreateExpenseRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
