use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("invalid user id {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    // Domain-level errors
    #[error("user with id={0} not found")]
    NotFound(String),

    #[error("user with name={0} not found")]
    NotFoundByUsername(String),

    #[error("User ID already exists: {0}")]
    IdAlreadyExists(String),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    // Infrastructure errors
    #[error("Unknown error: {0}")]
    Unknown(String),
}
