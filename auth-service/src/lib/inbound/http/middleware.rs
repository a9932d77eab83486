use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::inbound::http::cookies::session_from_cookie;
use crate::inbound::http::router::AppState;

/// Extension type carrying the subject of a valid session presented with the request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub subject: String,
}

/// Middleware that resolves the caller's session, if any, into request extensions.
///
/// Requests without a valid session pass through untouched; the handler
/// decides whether it needs one.
pub async fn attach_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    // Cookie first, then Authorization header
    let token = session_from_cookie(req.headers())
        .or_else(|| extract_token_from_header(req.headers()));

    if let Some(token) = token {
        match state.auth_service.verify_session(&token).await {
            Ok(subject) => {
                req.extensions_mut().insert(AuthenticatedUser { subject });
            }
            Err(e) => tracing::debug!(error = %e, "Ignoring invalid session"),
        }
    }

    next.run(req).await
}

fn extract_token_from_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
