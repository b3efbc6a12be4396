use auth::Identity;
use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ProfileResponseData;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileServicePort;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(user_id): Path<i64>,
) -> Result<Json<ProfileResponseData>, ApiError> {
    state
        .profile_service
        .get_profile(caller, Identity(user_id))
        .await
        .map_err(ApiError::from)
        .map(|ref profile| Json(profile.into()))
}
