use auth::Identity;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ProfileResponseData;
use crate::inbound::http::router::AppState;
use crate::profile::ports::ProfileServicePort;

/// The listing is scoped to the caller: their own profile, or an empty list
/// before it has been created.
pub async fn list_profiles(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
) -> Result<Json<Vec<ProfileResponseData>>, ApiError> {
    state
        .profile_service
        .list_profiles(caller)
        .await
        .map_err(ApiError::from)
        .map(|profiles| Json(profiles.iter().map(Into::into).collect()))
}
