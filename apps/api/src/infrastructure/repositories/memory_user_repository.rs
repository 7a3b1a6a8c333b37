use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::user_repository::{NewUser, User, UserRepository};
use crate::domain::repositories::{RepositoryError, RepositoryResult};

/// In-memory implementation of UserRepository
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

#[derive(Default)]
struct UserTable {
    last_id: i64,
    rows: BTreeMap<i64, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> RepositoryResult<User> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|u| u.username == user.username) {
            return Err(RepositoryError::Duplicate(format!(
                "Username '{}'",
                user.username
            )));
        }

        table.last_id += 1;
        let record = User {
            id: table.last_id,
            username: user.username,
            password_hash: user.password_hash,
            is_admin: false,
        };
        table.rows.insert(record.id, record.clone());

        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|u| u.username.as_str() == username)
            .cloned())
    }

    async fn set_admin(&self, id: i64, is_admin: bool) -> RepositoryResult<User> {
        let mut table = self.table.write().await;
        let record = table
            .rows
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound { entity: "User", id })?;

        record.is_admin = is_admin;
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::value_objects::Username;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            username: Username::new(name).unwrap(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let alice = repo.create(new_user("alice")).await.unwrap();
        let bob = repo.create(new_user("bob")).await.unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert!(!alice.is_admin);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("alice")).await.unwrap();

        let err = repo.create(new_user("alice")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(_)));
    }

    #[tokio::test]
    async fn find_by_username() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(new_user("carol")).await.unwrap();

        let found = repo.find_by_username("carol").await.unwrap();
        assert_eq!(found, Some(created));
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_id() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(new_user("dave")).await.unwrap();

        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created));
        assert!(repo.find_by_id(500).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_admin_flag() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(new_user("erin")).await.unwrap();

        let admin = repo.set_admin(created.id, true).await.unwrap();
        assert!(admin.is_admin);
        assert!(repo.find_by_id(created.id).await.unwrap().unwrap().is_admin);
    }

    #[tokio::test]
    async fn set_admin_missing_user() {
        let repo = InMemoryUserRepository::new();
        let err = repo.set_admin(3, true).await.unwrap_err();
        assert_eq!(err, RepositoryError::NotFound { entity: "User", id: 3 });
    }
}
