use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::api::middleware::AuthUser;
use crate::api::state::AppState;
use crate::auth::jwt::create_token;
use crate::auth::password::{hash_password, verify_password, MIN_PASSWORD_LENGTH};
use crate::domain::repositories::user_repository::{NewUser, User};
use crate::domain::user::value_objects::Username;

/// Request body for registration and login
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Public view of a user; never includes the password hash
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub is_admin: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.to_string(),
            is_admin: user.is_admin,
        }
    }
}

/// Response from successful registration or login
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserResponse,
}

fn issue_session(user: &User, secret: &str) -> Result<SessionResponse, ApiError> {
    let token = create_token(user.id, secret)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    Ok(SessionResponse {
        token,
        user: UserResponse::from(user),
    })
}

/// Register a new (non-admin) user
///
/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let username = Username::new(&req.username).map_err(ApiError::bad_request)?;

    if req.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::bad_request(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    if state
        .users
        .find_by_username(username.as_str())
        .await?
        .is_some()
    {
        return Err(ApiError::bad_request("Username already exists"));
    }

    let password_hash = hash_password(&req.password)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let user = state
        .users
        .create(NewUser {
            username,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = user.id, "Registered user");

    Ok((
        StatusCode::CREATED,
        Json(issue_session(&user, state.jwt_secret())?),
    ))
}

/// Login with username and password
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let user = state
        .users
        .find_by_username(req.username.trim())
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;

    if !valid {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    Ok(Json(issue_session(&user, state.jwt_secret())?))
}

/// Current user for the presented token
///
/// GET /api/user
pub async fn current_user(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
