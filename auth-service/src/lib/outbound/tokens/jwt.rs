use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::session::errors::TokenError;
use crate::domain::session::models::SessionToken;
use crate::domain::session::ports::SessionTokenService;

/// HS256 session tokens signed by the shared `auth` library.
pub struct JwtSessionTokens {
    authenticator: Authenticator,
}

impl JwtSessionTokens {
    pub fn new(authenticator: Authenticator) -> Self {
        Self { authenticator }
    }
}

#[async_trait]
impl SessionTokenService for JwtSessionTokens {
    async fn issue(&self, subject: &str) -> Result<SessionToken, TokenError> {
        let session = self
            .authenticator
            .issue_session(subject)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))?;

        Ok(SessionToken::new(session.access_token))
    }

    async fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.authenticator
            .validate_session(token)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }
}
