use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::verify_token;
use crate::domain::repositories::user_repository::User;

/// Authenticated user extractor for protected routes
///
/// Reads `Authorization: Bearer <token>`, verifies it and loads the user.
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(AuthUser(user): AuthUser) -> String {
///     format!("Hello {}", user.username)
/// }
/// ```
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| {
                ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>")
            })?;

        let user_id = verify_token(token, state.jwt_secret())
            .and_then(|claims| claims.user_id())
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        let user = state
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;

        Ok(AuthUser(user))
    }
}

/// Admin guard composed ahead of mutating handlers
///
/// Rejects authenticated non-admins with 403.
pub struct AdminUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;

        if !user.is_admin {
            tracing::warn!(user_id = user.id, "Rejected non-admin mutation");
            return Err(ApiError::forbidden("Admin access required"));
        }

        Ok(AdminUser(user))
    }
}
