use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::session::errors::AuthError;
use crate::domain::user::models::User;

pub mod google_login;
pub mod login;
pub mod refresh_token;

const NO_ERROR: &str = "NO ERROR";
const INTERNAL_ERROR_MESSAGE: &str = "Tuvimos un error, por favor inténtalo más tarde";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<Envelope<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        ApiSuccess(StatusCode::OK, Json(Envelope::new(data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failures as seen by clients.
///
/// Business rejections travel with HTTP 200 and the code in the envelope
/// header. Internal failures carry their detail for the log only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    InternalServerError(String),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AccessDenied | AuthError::SessionMismatch => {
                ApiError::Unauthorized(err.to_string())
            }
            _ if err.is_business() => ApiError::BadRequest(err.to_string()),
            _ => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::OK, StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::OK, StatusCode::UNAUTHORIZED, msg),
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(Envelope::error(code, message))).into_response()
    }
}

/// `{ header: [{ code, error }], body: [payload] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T: Serialize + PartialEq> {
    header: Vec<EnvelopeHeader>,
    body: Vec<T>,
}

impl<T: Serialize + PartialEq> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            header: vec![EnvelopeHeader {
                code: StatusCode::OK.as_u16(),
                error: NO_ERROR.to_string(),
            }],
            body: vec![data],
        }
    }
}

impl Envelope<EmptyBody> {
    pub fn error(code: StatusCode, message: String) -> Self {
        Self {
            header: vec![EnvelopeHeader {
                code: code.as_u16(),
                error: message,
            }],
            body: vec![EmptyBody {}],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeHeader {
    pub code: u16,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyBody {}

/// Client view of a user record. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub img: Option<String>,
    pub state: bool,
    pub google: bool,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            uid: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            img: user.avatar.clone(),
            state: user.active,
            google: user.federated,
        }
    }
}
