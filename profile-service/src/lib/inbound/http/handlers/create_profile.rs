use auth::Identity;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ProfileResponseData;
use crate::inbound::http::router::AppState;
use crate::profile::errors::DisplayNameError;
use crate::profile::errors::EmailError;
use crate::profile::models::CreateProfileCommand;
use crate::profile::models::DisplayName;
use crate::profile::models::EmailAddress;
use crate::profile::ports::ProfileServicePort;

pub async fn create_profile(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Json(body): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponseData>), ApiError> {
    state
        .profile_service
        .create_profile(caller, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| (StatusCode::CREATED, Json(profile.into())))
}

/// HTTP request body for creating a profile (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProfileRequest {
    email: String,
    display_name: String,
}

#[derive(Debug, Clone, Error)]
pub enum ParseCreateProfileRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid display name: {0}")]
    DisplayName(#[from] DisplayNameError),
}

impl CreateProfileRequest {
    fn try_into_command(self) -> Result<CreateProfileCommand, ParseCreateProfileRequestError> {
        let email = EmailAddress::new(self.email)?;
        let display_name = DisplayName::new(self.display_name)?;
        Ok(CreateProfileCommand::new(email, display_name))
    }
}

impl From<ParseCreateProfileRequestError> for ApiError {
    fn from(err: ParseCreateProfileRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
