use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderName;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::session::models::LoginCommand;
use crate::inbound::http::cookies::session_cookie;
use crate::inbound::http::router::AppState;

/// Email and password login. The session token travels only in the cookie.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<([(HeaderName, String); 1], ApiSuccess<UserData>), ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let session = state
        .auth_service
        .login(LoginCommand::new(body.email, body.password))
        .await?;

    let cookie = session_cookie(&session.token, state.session_ttl);

    Ok((
        [(header::SET_COOKIE, cookie)],
        ApiSuccess::new(UserData::from(&session.user)),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}
