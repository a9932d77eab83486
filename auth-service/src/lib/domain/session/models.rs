use std::fmt;

use serde::Deserialize;

use crate::domain::user::models::User;

/// Signed session token. Opaque to the domain.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Outcome of a successful login: the account and the session minted for it.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub token: SessionToken,
}

/// Claims extracted from a verified third-party identity token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

/// Command to log in with an email and a plaintext password.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Command to mint a fresh session token.
///
/// `caller` is the subject of the session the request arrived with, if it
/// carried a valid one.
#[derive(Debug, Default)]
pub struct RefreshTokenCommand {
    pub id: Option<String>,
    pub caller: Option<String>,
}

/// Who may obtain a refreshed token for an identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Any caller naming a non-empty identifier gets a token for it.
    #[default]
    Trusted,
    /// The caller's own valid session must name the same, active user.
    RequireSession,
}
