use auth::Identity;
use axum::extract::Query;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ExpenseResponseData;
use crate::expense::models::Page;
use crate::expense::ports::ExpenseServicePort;
use crate::inbound::http::router::AppState;

/// Offset/limit query parameters shared by the listing endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self {
            skip: params.skip,
            limit: params.limit,
        }
    }
}

pub async fn list_expenses(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<ExpenseResponseData>>, ApiError> {
    state
        .expense_service
        .list_expenses(caller, params.into())
        .await
        .map_err(ApiError::from)
        .map(|expenses| Json(expenses.iter().map(Into::into).collect()))
}
