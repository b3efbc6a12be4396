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

use super::handlers::create_expense;
use super::handlers::delete_expense;
use super::handlers::get_expense;
use super::handlers::health;
use super::handlers::list_expenses;
use super::handlers::list_user_expenses;
use super::handlers::update_expense;
use super::middleware::authenticate;
use crate::domain::expense::service::ExpenseService;
use crate::outbound::repositories::expense::SqliteExpenseRepository;

#[derive(Clone)]
pub struct AppState {
    pub expense_service: Arc<ExpenseService<SqliteExpenseRepository>>,
    pub verifier: Arc<TokenVerifier>,
}

pub fn create_router(
    expense_service: Arc<ExpenseService<SqliteExpenseRepository>>,
    verifier: Arc<TokenVerifier>,
) -> Router {
    let state = AppState {
        expense_service,
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
        .route("/expenses", post(create_expense).get(list_expenses))
        .route(
            "/expenses/:expense_id",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
        .route("/expenses/user/:user_id", get(list_user_expenses))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/expenses/health", get(health))
        .merge(protected)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
