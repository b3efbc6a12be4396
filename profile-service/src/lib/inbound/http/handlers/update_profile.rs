use auth::Identity;
use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_profile::ParseCreateProfileRequestError;
use super::ApiError;
use super::ProfileResponseData;
use crate::inbound::http::router::AppState;
use crate::profile::models::DisplayName;
use crate::profile::models::EmailAddress;
use crate::profile::models::UpdateProfileCommand;
use crate::profile::ports::ProfileServicePort;

/// HTTP request body for updating a profile; omitted fields keep their
/// stored value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl UpdateProfileRequest {
    fn try_into_command(self) -> Result<UpdateProfileCommand, ParseCreateProfileRequestError> {
        let email = self.email.map(EmailAddress::new).transpose()?;
        let display_name = self.display_name.map(DisplayName::new).transpose()?;

        Ok(UpdateProfileCommand {
            email,
            display_name,
        })
    }
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(user_id): Path<i64>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .profile_service
        .update_profile(caller, Identity(user_id), command)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| Json(profile.into()))
}
