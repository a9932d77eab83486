use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::session::errors::IdentityError;
use crate::domain::session::models::VerifiedIdentity;
use crate::domain::session::ports::IdentityVerifier;

const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Verifies Google ID tokens against the tokeninfo endpoint.
///
/// A token is accepted only when Google answers 2xx, the audience is our
/// client id, the issuer is Google and the email is verified.
pub struct GoogleIdentityVerifier {
    client: reqwest::Client,
    client_id: String,
    tokeninfo_url: String,
}

impl GoogleIdentityVerifier {
    pub fn new(
        client_id: impl Into<String>,
        tokeninfo_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            client_id: client_id.into(),
            tokeninfo_url: tokeninfo_url.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    iss: String,
    email: Option<String>,
    email_verified: Option<Flag>,
    name: Option<String>,
    picture: Option<String>,
}

/// tokeninfo encodes booleans as strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    fn is_true(&self) -> bool {
        match self {
            Flag::Bool(value) => *value,
            Flag::Text(value) => value == "true",
        }
    }
}

#[async_trait]
impl IdentityVerifier for GoogleIdentityVerifier {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, IdentityError> {
        let response = self
            .client
            .get(&self.tokeninfo_url)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| IdentityError::Unavailable(format!("tokeninfo request failed: {}", e)))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(IdentityError::Unavailable(format!(
                "tokeninfo answered {}",
                status
            )));
        }
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Google rejected identity token");
            return Err(IdentityError::Rejected(format!("tokeninfo answered {}", status)));
        }

        let info: TokenInfo = response
            .json()
            .await
            .map_err(|e| IdentityError::Unavailable(format!("invalid tokeninfo body: {}", e)))?;

        if info.aud != self.client_id {
            tracing::warn!(aud = %info.aud, "Identity token issued for another client");
            return Err(IdentityError::Rejected("audience mismatch".to_string()));
        }

        if !GOOGLE_ISSUERS.contains(&info.iss.as_str()) {
            return Err(IdentityError::Rejected(format!("unexpected issuer {}", info.iss)));
        }

        if !info.email_verified.as_ref().is_some_and(Flag::is_true) {
            return Err(IdentityError::Rejected("email not verified".to_string()));
        }

        let email = info
            .email
            .filter(|email| !email.is_empty())
            .ok_or_else(|| IdentityError::Rejected("token carries no email".to_string()))?;

        Ok(VerifiedIdentity {
            name: info.name.unwrap_or_else(|| email.clone()),
            email,
            picture: info.picture,
        })
    }
}
