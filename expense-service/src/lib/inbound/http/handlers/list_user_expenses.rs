use auth::Identity;
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::list_expenses::PageParams;
use super::ApiError;
use super::ExpenseResponseData;
use crate::expense::ports::ExpenseServicePort;
use crate::inbound::http::router::AppState;

/// Path-addressed listing: the named user must be the caller, otherwise the
/// mismatch is reported as forbidden outright (no resource is involved, so
/// nothing is confirmed).
pub async fn list_user_expenses(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(user_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<ExpenseResponseData>>, ApiError> {
    state
        .expense_service
        .list_user_expenses(caller, Identity(user_id), params.into())
        .await
        .map_err(ApiError::from)
        .map(|expenses| Json(expenses.iter().map(Into::into).collect()))
}
