use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::google_login::google_login;
use super::handlers::login::login;
use super::handlers::refresh_token::refresh_token;
use super::middleware::attach_session;
use crate::domain::session::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    /// Lifetime of the session cookie; matches the token lifetime.
    pub session_ttl: chrono::Duration,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    session_ttl: chrono::Duration,
) -> Router {
    let state = AppState {
        auth_service,
        session_ttl,
    };

    let session_routes = Router::new()
        .route("/refresh-token", get(refresh_token))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            attach_session,
        ));

    let auth_routes = Router::new()
        .route("/login", post(login))
        .route("/google-login", post(google_login))
        .merge(session_routes);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
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
        .nest("/api/auth", auth_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
