//! Authentication utilities library
//!
//! Reusable building blocks for the session service:
//! - Password hashing (Argon2id)
//! - JWT session token encoding and validation
//! - Session issuance coordination
//!
//! The service defines its own ports and adapts these implementations behind
//! them, so nothing in here knows about users, directories, or HTTP.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("my_password", "").unwrap());
//! ```
//!
//! ## Sessions
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::days(14))
//!     .with_issuer("auth-service");
//!
//! let session = auth.issue_session("user123").unwrap();
//! let subject = auth.validate_session(&session.access_token).unwrap();
//! assert_eq!(subject, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::IssuedSession;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
