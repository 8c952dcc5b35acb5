use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token signing algorithm is not accepted")]
    InvalidAlgorithm,

    #[error("Missing required claim: {0}")]
    MissingClaim(String),
}
