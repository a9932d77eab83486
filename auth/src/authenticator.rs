use chrono::Duration;
use uuid::Uuid;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Session coordinator: builds session claims and signs or checks them.
pub struct Authenticator {
    jwt_handler: JwtHandler,
    session_ttl: Duration,
}

/// A freshly signed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    /// Signed JWT
    pub access_token: String,
    /// Expiration (Unix timestamp)
    pub expires_at: i64,
}

/// Session operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Session subject is empty")]
    MissingSubject,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `session_ttl` - Lifetime of every issued session
    pub fn new(jwt_secret: &[u8], session_ttl: Duration) -> Self {
        Self {
            jwt_handler: JwtHandler::new(jwt_secret),
            session_ttl,
        }
    }

    /// Stamp issued tokens with `issuer` and reject tokens from anyone else.
    pub fn with_issuer(mut self, issuer: impl ToString) -> Self {
        self.jwt_handler = self.jwt_handler.with_issuer(issuer);
        self
    }

    /// Sign a new session for `subject`.
    ///
    /// No lookup happens here: whoever calls this has already decided the
    /// subject is entitled to a session.
    ///
    /// # Errors
    /// * `MissingSubject` - `subject` is blank
    /// * `JwtError` - Token generation failed
    pub fn issue_session(&self, subject: &str) -> Result<IssuedSession, AuthenticationError> {
        if subject.trim().is_empty() {
            return Err(AuthenticationError::MissingSubject);
        }

        let mut claims =
            Claims::for_session(subject, self.session_ttl).with_token_id(Uuid::new_v4());
        if let Some(issuer) = self.jwt_handler.issuer() {
            claims = claims.with_issuer(issuer);
        }

        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(IssuedSession {
            access_token,
            expires_at: claims.exp.unwrap_or_default(),
        })
    }

    /// Validate a session token and return its subject.
    ///
    /// # Errors
    /// * `JwtError` - Token is expired, forged, or malformed
    /// * `MissingSubject` - Token carries an empty `sub`
    pub fn validate_session(&self, token: &str) -> Result<String, AuthenticationError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        claims
            .subject()
            .map(str::to_string)
            .ok_or(AuthenticationError::MissingSubject)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_validate_session() {
        let authenticator = Authenticator::new(SECRET, Duration::days(14));

        let session = authenticator
            .issue_session("user123")
            .expect("Failed to issue session");
        assert!(!session.access_token.is_empty());

        let expected_expiry = Utc::now().timestamp() + 14 * 24 * 60 * 60;
        assert!((session.expires_at - expected_expiry).abs() <= 5);

        let subject = authenticator
            .validate_session(&session.access_token)
            .expect("Failed to validate session");
        assert_eq!(subject, "user123");
    }

    #[test]
    fn test_issue_session_rejects_blank_subject() {
        let authenticator = Authenticator::new(SECRET, Duration::hours(1));

        assert_eq!(
            authenticator.issue_session("  "),
            Err(AuthenticationError::MissingSubject)
        );
    }

    #[test]
    fn test_each_session_is_distinct() {
        let authenticator = Authenticator::new(SECRET, Duration::hours(1));

        let first = authenticator.issue_session("user123").unwrap();
        let second = authenticator.issue_session("user123").unwrap();
        assert_ne!(first.access_token, second.access_token);
    }

    #[test]
    fn test_issuer_round_trip() {
        let authenticator = Authenticator::new(SECRET, Duration::hours(1)).with_issuer("svc");
        let other = Authenticator::new(SECRET, Duration::hours(1)).with_issuer("other");

        let session = authenticator.issue_session("user123").unwrap();
        assert!(authenticator.validate_session(&session.access_token).is_ok());
        assert!(matches!(
            other.validate_session(&session.access_token),
            Err(AuthenticationError::JwtError(JwtError::InvalidToken(_)))
        ));
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(SECRET, Duration::hours(1));

        let result = authenticator.validate_session("invalid.token.here");
        assert!(result.is_err());
    }
}
