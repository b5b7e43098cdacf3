//! Complete router for the workout log pages

use axum::{Router, middleware::from_fn_with_state};
use http::header::{AUTHORIZATION, COOKIE, SET_COOKIE};
use tower_http::LatencyUnit;
use tower_http::sensitive_headers::{
    SetSensitiveRequestHeadersLayer, SetSensitiveResponseHeadersLayer,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::middleware::resolve_session;
use super::pages;
use super::state::AppState;

/// Create the router for every page of the workout log
///
/// Pages are served at:
/// - `/` landing page with the backend health
/// - `/login`, `/register`, `/logout`
/// - `/profile`
/// - `/workouts`, `/workouts/{id}/edit`, `/workouts/{id}/delete`
///
/// Every page except `/logout` runs behind the session middleware, which
/// verifies the auth cookie against the backend before the handler runs.
///
/// Request spans include headers. `Cookie`, `Authorization` and `Set-Cookie`
/// carry the bearer token and are logged as `Sensitive`.
pub fn workout_web_router(state: AppState) -> Router {
    workout_web_router_no_trace(state)
        .layer(SetSensitiveResponseHeadersLayer::new([SET_COOKIE]))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(true),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        // Outermost: request headers are redacted before the trace layer sees them
        .layer(SetSensitiveRequestHeadersLayer::new([COOKIE, AUTHORIZATION]))
}

/// Create the router for every page of the workout log without HTTP tracing
///
/// This is the same as `workout_web_router()` but without the HTTP tracing middleware.
/// Use this if you want to add your own tracing middleware or if you don't need HTTP request tracing.
pub fn workout_web_router_no_trace(state: AppState) -> Router {
    pages::router()
        .route_layer(from_fn_with_state(state.clone(), resolve_session))
        .merge(pages::session_free_router())
        .with_state(state)
}
