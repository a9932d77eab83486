use thiserror::Error;

use crate::user::errors::UserError;

/// Error for session token operations
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    SigningFailed(String),

    #[error("Token rejected: {0}")]
    Invalid(String),
}

/// Error for third-party identity verification
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The provider answered and refused the token.
    #[error("Identity token rejected: {0}")]
    Rejected(String),

    /// The provider could not be asked.
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for the authentication flows.
///
/// The display text of the business variants is the message returned to
/// clients. The remaining variants are internal and never leave the process.
#[derive(Debug, Error)]
pub enum AuthError {
    // Business rejections
    #[error("El correo o contraseña son incorrectos")]
    InvalidCredentials,

    #[error("Esta cuenta fue eliminada")]
    AccountDisabled,

    #[error("hable con un administrador, usuario bloqueado")]
    AccessDenied,

    #[error("el id es necesario")]
    MissingIdentifier,

    #[error("el id_token es necesario")]
    MissingIdentityToken,

    #[error("Token de google no es reconocido")]
    IdentityRejected(#[source] IdentityError),

    #[error("la sesión no corresponde al id solicitado")]
    SessionMismatch,

    // Infrastructure errors
    #[error("User directory error: {0}")]
    User(#[from] UserError),

    #[error("Session token error: {0}")]
    Token(#[from] TokenError),

    #[error("Identity provider error: {0}")]
    IdentityProvider(IdentityError),

    #[error("Password verification failed: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<IdentityError> for AuthError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Rejected(_) => AuthError::IdentityRejected(err),
            IdentityError::Unavailable(_) => AuthError::IdentityProvider(err),
        }
    }
}

impl AuthError {
    /// Whether this is an expected rejection rather than a failure.
    pub fn is_business(&self) -> bool {
        !matches!(
            self,
            AuthError::User(_)
                | AuthError::Token(_)
                | AuthError::IdentityProvider(_)
                | AuthError::Password(_)
                | AuthError::Unknown(_)
        )
    }
}
