// Admin provisioning at startup
//
// The HTTP API never grants the admin flag, so the first admin comes from
// configuration.

use anyhow::Context;

use crate::auth::password::hash_password;
use crate::domain::repositories::user_repository::{NewUser, User, UserRepository};
use crate::domain::user::value_objects::Username;

/// Ensures `username` exists and carries the admin flag
///
/// An existing account keeps its current password; a new one is created
/// with `password`.
pub async fn ensure_admin(
    users: &dyn UserRepository,
    username: &str,
    password: &str,
) -> anyhow::Result<User> {
    let username = Username::new(username)
        .map_err(anyhow::Error::msg)
        .context("ADMIN_USERNAME is invalid")?;

    let user = match users.find_by_username(username.as_str()).await? {
        Some(existing) => existing,
        None => {
            let password_hash = hash_password(password).map_err(anyhow::Error::msg)?;
            users
                .create(NewUser {
                    username,
                    password_hash,
                })
                .await?
        }
    };

    let admin = users.set_admin(user.id, true).await?;
    tracing::info!(user_id = admin.id, username = %admin.username, "Admin account ready");

    Ok(admin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;
    use crate::infrastructure::repositories::InMemoryUserRepository;

    #[tokio::test]
    async fn creates_admin_when_missing() {
        let users = InMemoryUserRepository::new();

        let admin = ensure_admin(&users, "root", "rootpass").await.unwrap();

        assert!(admin.is_admin);
        assert_eq!(admin.id, 1);
        assert!(verify_password("rootpass", &admin.password_hash).unwrap());
    }

    #[tokio::test]
    async fn promotes_existing_user() {
        let users = InMemoryUserRepository::new();
        let existing = users
            .create(NewUser {
                username: Username::new("root").unwrap(),
                password_hash: "kept".to_string(),
            })
            .await
            .unwrap();

        let admin = ensure_admin(&users, "root", "ignored").await.unwrap();

        assert_eq!(admin.id, existing.id);
        assert!(admin.is_admin);
        assert_eq!(admin.password_hash, "kept");
    }

    #[tokio::test]
    async fn rejects_invalid_username() {
        let users = InMemoryUserRepository::new();
        assert!(ensure_admin(&users, "x", "pw").await.is_err());
    }
}
