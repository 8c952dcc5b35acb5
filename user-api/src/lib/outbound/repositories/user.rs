use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-memory user store.
///
/// Populated once at construction and never mutated, so lookups take no
/// lock. Adding writes would require putting `users` behind an `RwLock`.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    /// Build the store from seed users.
    ///
    /// # Errors
    /// * `IdAlreadyExists` - Two users share an id
    /// * `UsernameAlreadyExists` - Two users share a name
    pub fn new(users: Vec<User>) -> Result<Self, UserError> {
        Self::ensure_unique(&users)?;

        tracing::debug!(users = users.len(), "In-memory user store initialized");

        Ok(Self { users })
    }

    fn ensure_unique(users: &[User]) -> Result<(), UserError> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for user in users {
            if !ids.insert(user.id) {
                return Err(UserError::IdAlreadyExists(user.id.to_string()));
            }
            if !names.insert(user.username.as_str()) {
                return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.iter().find(|user| user.id == *id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .iter()
            .find(|user| user.username == *username)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<User> {
        vec![
            User::new(UserId(1), Username::new("Olly"), "password"),
            User::new(UserId(2), Username::new("Jeff"), "hunter2"),
        ]
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repository = InMemoryUserRepository::new(seed()).unwrap();

        let user = repository.find_by_id(&UserId(2)).await.unwrap();
        assert_eq!(user.map(|u| u.username), Some(Username::new("Jeff")));

        assert_eq!(repository.find_by_id(&UserId(3)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_by_username_is_case_sensitive() {
        let repository = InMemoryUserRepository::new(seed()).unwrap();

        let user = repository
            .find_by_username(&Username::new("Olly"))
            .await
            .unwrap();
        assert_eq!(user.map(|u| u.id), Some(UserId(1)));

        let missing = repository
            .find_by_username(&Username::new("olly"))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_all_keeps_seed_order() {
        let repository = InMemoryUserRepository::new(seed()).unwrap();

        assert_eq!(repository.list_all().await.unwrap(), seed());
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let mut users = seed();
        users.push(User::new(UserId(1), Username::new("Sam"), "secret"));

        assert_eq!(
            InMemoryUserRepository::new(users).unwrap_err(),
            UserError::IdAlreadyExists("1".to_string())
        );
    }

    #[test]
    fn test_rejects_duplicate_username() {
        let mut users = seed();
        users.push(User::new(UserId(3), Username::new("Olly"), "secret"));

        assert_eq!(
            InMemoryUserRepository::new(users).unwrap_err(),
            UserError::UsernameAlreadyExists("Olly".to_string())
        );
    }

    #[test]
    fn test_empty_store() {
        assert!(InMemoryUserRepository::new(Vec::new()).is_ok());
    }
}
