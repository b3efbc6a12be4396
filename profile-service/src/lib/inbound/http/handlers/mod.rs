use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::profile::errors::ProfileError;
use crate::profile::models::Profile;

pub mod create_profile;
pub mod delete_profile;
pub mod get_profile;
pub mod health;
pub mod list_profiles;
pub mod update_profile;

pub use create_profile::create_profile;
pub use delete_profile::delete_profile;
pub use get_profile::get_profile;
pub use health::health;
pub use list_profiles::list_profiles;
pub use update_profile::update_profile;

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

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::InvalidEmail(_)
            | ProfileError::InvalidDisplayName(_)
            | ProfileError::DuplicateProfile
            | ProfileError::DuplicateEmail(_) => ApiError::BadRequest(err.to_string()),
            ProfileError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProfileError::Forbidden => ApiError::Forbidden(err.to_string()),
            ProfileError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Response body shared by every profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub id: i64,
    pub email: String,
    pub display_name: String,
}

impl From<&Profile> for ProfileResponseData {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.as_i64(),
            email: profile.email.to_string(),
            display_name: profile.display_name.as_str().to_string(),
        }
    }
}
