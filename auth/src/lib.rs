//! Authentication utilities library
//!
//! Provides the authentication building blocks used by the user API:
//! - JWT token generation and validation (HMAC only)
//! - Cleartext credential matching
//! - Authentication coordination
//!
//! # Examples
//!
//! ## JWT Tokens
//! ```
//! use auth::{JwtHandler, Claims};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::new().with_subject("Olly");
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub.as_deref(), Some("Olly"));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password", "password", "Olly").unwrap();
//!
//! // Validate token
//! let subject = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(subject, "Olly");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordMatcher;
