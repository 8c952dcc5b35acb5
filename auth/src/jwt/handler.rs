use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Algorithms accepted when decoding. Anything outside the HMAC family,
/// including `none` and asymmetric algorithms, is rejected before the
/// signature is checked.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type. Signs with HS256 (HMAC with SHA-256).
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Load it from configuration, never from code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed JWT.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and verify a JWT.
    ///
    /// # Errors
    /// * `InvalidAlgorithm` - Header declares an algorithm outside the HMAC family
    /// * `InvalidSignature` - Signature does not verify against the secret
    /// * `TokenExpired` - `exp` claim is present and in the past
    /// * `DecodingFailed` - Token is malformed or claims do not deserialize
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        // Tokens are issued without `exp` unless a lifetime is configured
        validation.required_spec_claims.clear();

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidAlgorithm => JwtError::InvalidAlgorithm,
                _ => JwtError::DecodingFailed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}
