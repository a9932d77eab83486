use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderName;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::models::RefreshTokenCommand;
use crate::inbound::http::cookies::session_cookie;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn refresh_token(
    State(state): State<AppState>,
    caller: Option<Extension<AuthenticatedUser>>,
    query: Result<Query<RefreshTokenQuery>, QueryRejection>,
) -> Result<([(HeaderName, String); 1], ApiSuccess<RefreshTokenResponseData>), ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let command = RefreshTokenCommand {
        id: query.id,
        caller: caller.map(|Extension(user)| user.subject),
    };

    let token = state.auth_service.refresh_token(command).await?;
    let cookie = session_cookie(&token, state.session_ttl);

    Ok((
        [(header::SET_COOKIE, cookie)],
        ApiSuccess::new(RefreshTokenResponseData {
            token: token.into_inner(),
        }),
    ))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RefreshTokenQuery {
    id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshTokenResponseData {
    pub token: String,
}
