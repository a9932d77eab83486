use async_trait::async_trait;

use crate::domain::session::errors::AuthError;
use crate::domain::session::errors::IdentityError;
use crate::domain::session::errors::TokenError;
use crate::domain::session::models::AuthenticatedSession;
use crate::domain::session::models::LoginCommand;
use crate::domain::session::models::RefreshTokenCommand;
use crate::domain::session::models::SessionToken;
use crate::domain::session::models::VerifiedIdentity;

/// Port for the authentication flows exposed to inbound adapters.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate with email and password.
    ///
    /// # Returns
    /// The account and a freshly minted session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `AccountDisabled` - Account exists but is inactive
    /// * Infrastructure variants - Directory, hashing or signing failed
    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedSession, AuthError>;

    /// Mint a new session token for an identifier.
    ///
    /// # Errors
    /// * `MissingIdentifier` - No identifier given
    /// * `SessionMismatch` - Refresh policy requires a matching session
    /// * Infrastructure variants - Signing failed
    async fn refresh_token(&self, command: RefreshTokenCommand) -> Result<SessionToken, AuthError>;

    /// Authenticate with a third-party identity token, provisioning the
    /// account on first use.
    ///
    /// # Errors
    /// * `MissingIdentityToken` - Blank token
    /// * `IdentityRejected` - Provider refused the token
    /// * `AccessDenied` - Account exists but is inactive
    /// * Infrastructure variants - Provider, directory or signing failed
    async fn google_login(&self, id_token: &str) -> Result<AuthenticatedSession, AuthError>;

    /// Resolve a presented session token to its subject.
    ///
    /// # Errors
    /// * `Token` - Token is expired, forged or malformed
    async fn verify_session(&self, token: &str) -> Result<String, AuthError>;
}

/// Token service: mints and checks signed session tokens.
#[async_trait]
pub trait SessionTokenService: Send + Sync + 'static {
    /// Sign a session bound to `subject`.
    ///
    /// # Errors
    /// * `SigningFailed` - Token generation failed
    async fn issue(&self, subject: &str) -> Result<SessionToken, TokenError>;

    /// Check a session token and return its subject.
    ///
    /// # Errors
    /// * `Invalid` - Token is expired, forged or malformed
    async fn verify(&self, token: &str) -> Result<String, TokenError>;
}

/// Third-party identity verification.
#[async_trait]
pub trait IdentityVerifier: Send + Sync + 'static {
    /// Verify an identity token and extract its claims.
    ///
    /// # Errors
    /// * `Rejected` - Token is not valid for this application
    /// * `Unavailable` - Provider could not be reached
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, IdentityError>;
}
