use auth::Identity;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::expense::models::ExpenseId;
use crate::expense::ports::ExpenseServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_expense(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(expense_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .expense_service
        .delete_expense(caller, ExpenseId(expense_id))
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
