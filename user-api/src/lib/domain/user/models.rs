use std::fmt;

use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// The password is held in cleartext and must never leave the process;
/// HTTP responses are built from `UserResponseData`, which omits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password: String,
}

impl User {
    pub fn new(id: UserId, username: Username, password: impl Into<String>) -> Self {
        Self {
            id,
            username,
            password: password.into(),
        }
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a base-10 integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        s.parse::<i64>()
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Unique across the store; doubles as the token subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
