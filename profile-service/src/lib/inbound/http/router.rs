use std::sync::Arc;
use std::time::Duration;

use auth::TokenVerifier;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_profile;
use super::handlers::delete_profile;
use super::handlers::get_profile;
use super::handlers::health;
use super::handlers::list_profiles;
use super::handlers::update_profile;
use super::middleware::authenticate;
use crate::domain::profile::service::ProfileService;
use crate::outbound::repositories::profile::SqliteProfileRepository;

#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<ProfileService<SqliteProfileRepository>>,
    pub verifier: Arc<TokenVerifier>,
}

pub fn create_router(
    profile_service: Arc<ProfileService<SqliteProfileRepository>>,
    verifier: Arc<TokenVerifier>,
) -> Router {
    let state = AppState {
        profile_service,
        verifier,
    };

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

    let protected = Router::new()
        .route("/users/create", post(create_profile))
        .route("/users", get(list_profiles))
        .route(
            "/users/:user_id",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/users/health", get(health))
        .merge(protected)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
