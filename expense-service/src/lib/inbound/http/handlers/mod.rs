use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::expense::errors::ExpenseError;
use crate::expense::models::Expense;

pub mod create_expense;
pub mod delete_expense;
pub mod get_expense;
pub mod health;
pub mod list_expenses;
pub mod list_user_expenses;
pub mod update_expense;

pub use create_expense::create_expense;
pub use delete_expense::delete_expense;
pub use get_expense::get_expense;
pub use health::health;
pub use list_expenses::list_expenses;
pub use list_user_expenses::list_user_expenses;
pub use update_expense::update_expense;

/// Transport-level error mapped from domain errors at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ExpenseError> for ApiError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::InvalidAmount(_)
            | ExpenseError::InvalidCurrency(_)
            | ExpenseError::InvalidCategory(_) => ApiError::BadRequest(err.to_string()),
            ExpenseError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ExpenseError::Forbidden => ApiError::Forbidden(err.to_string()),
            ExpenseError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Response body shared by every expense endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseResponseData {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub currency: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Expense> for ExpenseResponseData {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.0,
            user_id: expense.owner.0,
            amount: expense.amount.as_f64(),
            currency: expense.currency.as_str().to_string(),
            category: expense.category.as_str().to_string(),
            created_at: expense.created_at,
        }
    }
}
