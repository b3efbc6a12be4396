use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health;
use super::handlers::login;
use super::handlers::register;
use crate::domain::credential::service::CredentialIssuer;
use crate::outbound::repositories::credential::SqliteCredentialRepository;

#[derive(Clone)]
pub struct AppState {
    pub credential_service: Arc<CredentialIssuer<SqliteCredentialRepository>>,
}

pub fn create_router(
    credential_service: Arc<CredentialIssuer<SqliteCredentialRepository>>,
) -> Router {
    let state = AppState { credential_service };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/auth/health", get(health))
        .route("/auth/register", post(register))
        .route("/auth/token", post(login))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
