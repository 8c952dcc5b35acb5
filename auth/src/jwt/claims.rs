use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Registered JWT claims carried by access tokens.
///
/// Only `sub` is required for authentication. `exp` and `iat` are present
/// when the issuer is configured with a token lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for a subject, optionally expiring after `expiration_hours`.
    ///
    /// # Arguments
    /// * `subject` - Identity asserted by the token
    /// * `expiration_hours` - Hours until the token expires, `None` for a non-expiring token
    ///
    /// # Errors
    /// * `EncodingFailed` - Lifetime is not positive or the expiry is out of range
    pub fn for_subject(
        subject: impl ToString,
        expiration_hours: Option<i64>,
    ) -> Result<Self, JwtError> {
        let claims = Self::new().with_subject(subject);

        let Some(hours) = expiration_hours else {
            return Ok(claims);
        };

        if hours <= 0 {
            return Err(JwtError::EncodingFailed(format!(
                "token lifetime must be positive, got {} hours",
                hours
            )));
        }

        let now = Utc::now();
        let expiration = Duration::try_hours(hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                JwtError::EncodingFailed(format!(
                    "token lifetime of {} hours is out of range",
                    hours
                ))
            })?;

        Ok(claims
            .with_issued_at(now.timestamp())
            .with_expiration(expiration.timestamp()))
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp < current_timestamp)
    }
}
