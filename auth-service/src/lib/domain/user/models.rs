use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// `active` cleared means the account was soft-deleted or blocked.
/// `federated` marks accounts provisioned from a third-party identity; those
/// carry an empty `password_hash`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub active: bool,
    pub federated: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build the record provisioned on a first federated login.
    ///
    /// # Arguments
    /// * `email` - Verified email from the identity provider
    /// * `name` - Display name from the identity provider
    /// * `avatar` - Picture URL from the identity provider, if any
    ///
    /// # Returns
    /// Active, federated user without a local password
    pub fn federated(email: EmailAddress, name: String, avatar: Option<String>) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            password_hash: String::new(),
            avatar,
            active: true,
            federated: true,
            created_at: Utc::now(),
        }
    }

    /// Whether the account can sign in with a local password at all.
    pub fn has_password(&self) -> bool {
        !self.password_hash.is_empty()
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Normalized email address.
///
/// Validated with an RFC 5322 parser, then upper-cased so that lookups are
/// case-insensitive. Two addresses differing only in case are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalize an email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: impl AsRef<str>) -> Result<Self, EmailError> {
        let email = email.as_ref().trim();

        email_address::EmailAddress::from_str(email)
            .map(|_| EmailAddress(email.to_uppercase()))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get the normalized email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
