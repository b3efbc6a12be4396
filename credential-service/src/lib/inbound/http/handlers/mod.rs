use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::credential::errors::CredentialError;

pub mod health;
pub mod login;
pub mod register;

pub use health::health;
pub use login::login;
pub use register::register;

/// Transport-level error mapped from domain errors at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::InvalidEmail(_) | CredentialError::DuplicateEmail(_) => {
                ApiError::BadRequest(err.to_string())
            }
            CredentialError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            CredentialError::Password(_)
            | CredentialError::Token(_)
            | CredentialError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}
