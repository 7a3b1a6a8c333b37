use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::user::value_objects::Username;

/// User data for persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: Username,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Fields supplied when registering a user
///
/// The id is assigned by the repository and new users are never admins.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: String,
}

/// Repository trait for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user with a freshly assigned id
    ///
    /// Fails with `RepositoryError::Duplicate` if the username is taken.
    async fn create(&self, user: NewUser) -> RepositoryResult<User>;

    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;

    /// Find a user by exact username
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;

    /// Grant or revoke the admin flag
    async fn set_admin(&self, id: i64, is_admin: bool) -> RepositoryResult<User>;
}
