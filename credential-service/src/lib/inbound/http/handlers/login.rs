use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::credential::models::EmailAddress;
use crate::credential::ports::CredentialIssuerPort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponseData>, ApiError> {
    // A malformed email cannot be registered, so it gets the same 401 as an
    // unknown one.
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::Unauthorized("Incorrect email or password".to_string()))?;

    state
        .credential_service
        .login(&email, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|access_token| {
            Json(TokenResponseData {
                access_token,
                token_type: "bearer".to_string(),
            })
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}
