use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::session::errors::AuthError;
use crate::domain::session::errors::IdentityError;
use crate::domain::session::models::AuthenticatedSession;
use crate::domain::session::models::LoginCommand;
use crate::domain::session::models::RefreshPolicy;
use crate::domain::session::models::RefreshTokenCommand;
use crate::domain::session::models::SessionToken;
use crate::domain::session::models::VerifiedIdentity;
use crate::domain::session::ports::AuthServicePort;
use crate::domain::session::ports::IdentityVerifier;
use crate::domain::session::ports::SessionTokenService;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Domain service implementation for the authentication flows.
///
/// Holds no per-request state; every collaborator is injected at startup.
pub struct AuthService<UR, ST, IV>
where
    UR: UserRepository,
    ST: SessionTokenService,
    IV: IdentityVerifier,
{
    repository: Arc<UR>,
    tokens: Arc<ST>,
    identity_verifier: Arc<IV>,
    password_hasher: auth::PasswordHasher,
    refresh_policy: RefreshPolicy,
}

impl<UR, ST, IV> AuthService<UR, ST, IV>
where
    UR: UserRepository,
    ST: SessionTokenService,
    IV: IdentityVerifier,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User directory
    /// * `tokens` - Session token minting and checking
    /// * `identity_verifier` - Third-party identity token verification
    ///
    /// # Returns
    /// Service using the trusted refresh policy
    pub fn new(repository: Arc<UR>, tokens: Arc<ST>, identity_verifier: Arc<IV>) -> Self {
        Self {
            repository,
            tokens,
            identity_verifier,
            password_hasher: auth::PasswordHasher::new(),
            refresh_policy: RefreshPolicy::default(),
        }
    }

    pub fn with_refresh_policy(mut self, refresh_policy: RefreshPolicy) -> Self {
        self.refresh_policy = refresh_policy;
        self
    }

    /// Argon2 is CPU bound; run it on the blocking pool.
    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let hasher = self.password_hasher;

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::Unknown(format!("Password verification task failed: {}", e)))?
            .map_err(AuthError::from)
    }

    async fn ensure_caller_owns(&self, id: &str, caller: Option<&str>) -> Result<(), AuthError> {
        if caller != Some(id) {
            tracing::warn!(requested = %id, "Refresh rejected: session does not match identifier");
            return Err(AuthError::SessionMismatch);
        }

        let user_id = UserId::from_string(id).map_err(|_| AuthError::SessionMismatch)?;

        match self.repository.find_by_id(&user_id).await? {
            Some(user) if user.active => Ok(()),
            _ => {
                tracing::warn!(user_id = %user_id, "Refresh rejected: unknown or inactive user");
                Err(AuthError::SessionMismatch)
            }
        }
    }

    /// Create the local record for a first federated login.
    ///
    /// A concurrent first login for the same email loses on the directory's
    /// unique constraint; the loser continues with the winner's record.
    async fn provision(
        &self,
        email: EmailAddress,
        identity: VerifiedIdentity,
    ) -> Result<User, AuthError> {
        let user = User::federated(email.clone(), identity.name, identity.picture);

        match self.repository.create(user).await {
            Ok(created) => {
                tracing::info!(user_id = %created.id, "Provisioned federated user");
                Ok(created)
            }
            Err(UserError::EmailAlreadyExists(_)) => {
                tracing::warn!(email = %email, "Federated user created concurrently, reloading");
                self.repository.find_by_email(&email).await?.ok_or_else(|| {
                    AuthError::Unknown(format!("User {} vanished after duplicate insert", email))
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl<UR, ST, IV> AuthServicePort for AuthService<UR, ST, IV>
where
    UR: UserRepository,
    ST: SessionTokenService,
    IV: IdentityVerifier,
{
    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedSession, AuthError> {
        // A malformed email cannot match any record
        let email = EmailAddress::new(&command.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.active {
            tracing::info!(user_id = %user.id, "Login rejected: account disabled");
            return Err(AuthError::AccountDisabled);
        }

        // Federated-only accounts cannot sign in with a password
        if !user.has_password() {
            return Err(AuthError::InvalidCredentials);
        }

        let password_matches = self
            .verify_password(command.password, user.password_hash.clone())
            .await?;
        if !password_matches {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.id.to_string()).await?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthenticatedSession { user, token })
    }

    async fn refresh_token(&self, command: RefreshTokenCommand) -> Result<SessionToken, AuthError> {
        // Blank means missing; anything else is signed exactly as sent
        let id = command
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or(AuthError::MissingIdentifier)?;

        if self.refresh_policy == RefreshPolicy::RequireSession {
            self.ensure_caller_owns(&id, command.caller.as_deref())
                .await?;
        }

        let token = self.tokens.issue(&id).await?;
        tracing::debug!(subject = %id, "Session token refreshed");

        Ok(token)
    }

    async fn google_login(&self, id_token: &str) -> Result<AuthenticatedSession, AuthError> {
        let id_token = id_token.trim();
        if id_token.is_empty() {
            return Err(AuthError::MissingIdentityToken);
        }

        let identity = self.identity_verifier.verify(id_token).await?;
        let email = EmailAddress::new(&identity.email)
            .map_err(|e| AuthError::IdentityRejected(IdentityError::Rejected(e.to_string())))?;

        let user = match self.repository.find_by_email(&email).await? {
            Some(user) => user,
            None => self.provision(email, identity).await?,
        };

        if !user.active {
            tracing::info!(user_id = %user.id, "Federated login rejected: user blocked");
            return Err(AuthError::AccessDenied);
        }

        let token = self.tokens.issue(&user.id.to_string()).await?;
        tracing::info!(user_id = %user.id, "User logged in with Google");

        Ok(AuthenticatedSession { user, token })
    }

    async fn verify_session(&self, token: &str) -> Result<String, AuthError> {
        Ok(self.tokens.verify(token).await?)
    }
}
