use auth::Identity;
use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ExpenseResponseData;
use crate::expense::models::ExpenseId;
use crate::expense::ports::ExpenseServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_expense(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(expense_id): Path<i64>,
) -> Result<Json<ExpenseResponseData>, ApiError> {
    state
        .expense_service
        .get_expense(caller, ExpenseId(expense_id))
        .await
        .map_err(ApiError::from)
        .map(|ref expense| Json(expense.into()))
}
