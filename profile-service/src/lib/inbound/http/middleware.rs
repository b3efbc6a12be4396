use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;

/// Every authentication failure gets this one response; a probing client
/// learns nothing about which check failed.
fn unauthenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Could not validate credentials" })),
    )
        .into_response()
}

/// Middleware that resolves the bearer token to an [`auth::Identity`] and
/// stores it in request extensions. Pure computation against the shared
/// signing secret; the issuing service is never contacted.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let identity = state.verifier.authenticate(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthenticated()
    })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(unauthenticated)?;

    let auth_str = auth_header.to_str().map_err(|_| unauthenticated())?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) => Ok(token),
        None => Err(unauthenticated()),
    }
}
