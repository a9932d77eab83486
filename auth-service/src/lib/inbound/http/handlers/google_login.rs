use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::UserData;
use crate::inbound::http::router::AppState;

/// Google sign-in.
///
/// Success answers with the bare `{ usuario, token }` object existing clients
/// expect; failures use the envelope like every other route.
pub async fn google_login(
    State(state): State<AppState>,
    body: Result<Json<GoogleLoginRequestBody>, JsonRejection>,
) -> Result<Json<GoogleLoginResponseData>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let session = state.auth_service.google_login(&body.id_token).await?;

    Ok(Json(GoogleLoginResponseData {
        usuario: UserData::from(&session.user),
        token: session.token.into_inner(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoogleLoginRequestBody {
    #[serde(default)]
    id_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoogleLoginResponseData {
    pub usuario: UserData,
    pub token: String,
}
