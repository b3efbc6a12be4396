use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::credential::models::Credential;
use crate::credential::models::EmailAddress;
use crate::credential::models::RegisterCommand;
use crate::credential::ports::CredentialIssuerPort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponseData>), ApiError> {
    let email = EmailAddress::new(body.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = RegisterCommand::new(email, body.password);

    state
        .credential_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|ref credential| (StatusCode::CREATED, Json(credential.into())))
}

/// HTTP request body for registering a credential (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    email: String,
    password: String,
}

/// Response body for registration; never carries the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: i64,
    pub email: String,
}

impl From<&Credential> for RegisterResponseData {
    fn from(credential: &Credential) -> Self {
        Self {
            id: credential.id.0,
            email: credential.email.as_str().to_string(),
        }
    }
}
