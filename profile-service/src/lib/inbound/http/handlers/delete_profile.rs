use auth::Identity;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileServicePort;

pub async fn delete_profile(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .profile_service
        .delete_profile(caller, Identity(user_id))
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
