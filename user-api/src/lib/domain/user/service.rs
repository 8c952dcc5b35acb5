use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Turns repository absence into `NotFound` errors so callers can tell a
/// missing user apart from a storage failure.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service over `repository`.
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
        }
    }

    fn olly() -> User {
        User::new(UserId(1), Username::new("Olly"), "password")
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .with(eq(UserId(1)))
            .times(1)
            .returning(|_| Ok(Some(olly())));

        let service = UserService::new(Arc::new(repository));

        let user = service.get_user(&UserId(1)).await.unwrap();
        assert_eq!(user, olly());
    }

    #[tokio::test]
    async fn test_get_user_is_idempotent() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(3)
            .returning(|_| Ok(Some(olly())));

        let service = UserService::new(Arc::new(repository));

        let first = service.get_user(&UserId(1)).await.unwrap();
        for _ in 0..2 {
            assert_eq!(service.get_user(&UserId(1)).await.unwrap(), first);
        }
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&UserId(2)).await;
        assert_eq!(result, Err(UserError::NotFound("2".to_string())));
    }

    #[tokio::test]
    async fn test_get_user_propagates_repository_error() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(UserError::Unknown("storage offline".to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&UserId(1)).await;
        assert!(matches!(result, Err(UserError::Unknown(_))));
    }

    #[tokio::test]
    async fn test_get_user_by_username_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .withf(|username| username.as_str() == "Olly")
            .times(1)
            .returning(|_| Ok(Some(olly())));

        let service = UserService::new(Arc::new(repository));

        let user = service
            .get_user_by_username(&Username::new("Olly"))
            .await
            .unwrap();
        assert_eq!(user.id, UserId(1));
    }

    #[tokio::test]
    async fn test_get_user_by_username_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user_by_username(&Username::new("Jeff")).await;
        assert_eq!(
            result,
            Err(UserError::NotFoundByUsername("Jeff".to_string()))
        );
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![olly()]));

        let service = UserService::new(Arc::new(repository));

        let users = service.list_users().await.unwrap();
        assert_eq!(users, vec![olly()]);
    }
}
