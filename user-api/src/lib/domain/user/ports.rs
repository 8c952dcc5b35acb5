use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Retrieve every user.
    ///
    /// # Errors
    /// * `Unknown` - Storage failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;
}

/// Read access to stored users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by identifier, `None` if absent.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username, `None` if absent.
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve all users in insertion order.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;
}
