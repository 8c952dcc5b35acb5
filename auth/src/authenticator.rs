use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordMatcher;

/// Authentication coordinator combining credential checks and token handling.
///
/// Issues bearer tokens whose only identity claim is the subject, and turns
/// presented tokens back into that subject. The signing secret is supplied at
/// construction, so separate instances can use separate keys.
pub struct Authenticator {
    password_matcher: PasswordMatcher,
    jwt_handler: JwtHandler,
    expiration_hours: Option<i64>,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create an authenticator issuing non-expiring tokens.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for HMAC signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_matcher: PasswordMatcher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            expiration_hours: None,
        }
    }

    /// Issue tokens that expire after `hours` instead of never.
    pub fn with_expiration_hours(mut self, hours: Option<i64>) -> Self {
        self.expiration_hours = hours;
        self
    }

    /// Verify a supplied password against the stored one and issue a token.
    ///
    /// # Arguments
    /// * `password` - Password supplied by the client
    /// * `stored_password` - Password on record for the user
    /// * `subject` - Identity to carry in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_password: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_matcher.matches(password, stored_password) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a signed token for `subject`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed or the configured lifetime is unusable
    pub fn issue_token(&self, subject: &str) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, self.expiration_hours)?;
        self.jwt_handler.encode(&claims)
    }

    /// Validate a token and return its subject.
    ///
    /// # Errors
    /// * `InvalidAlgorithm` / `InvalidSignature` / `TokenExpired` / `DecodingFailed` -
    ///   token rejected by the handler
    /// * `MissingClaim` - Token verified but carries no subject
    pub fn validate_token(&self, token: &str) -> Result<String, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        claims
            .sub
            .ok_or_else(|| JwtError::MissingClaim("sub".to_string()))
    }
}
