use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extract::{JsonBody, PathId};
use crate::api::middleware::AdminUser;
use crate::api::state::AppState;
use crate::domain::prompt::{NewPrompt, PromptPatch, PromptTemplate};

/// Request body for creating a prompt template
#[derive(Debug, Deserialize)]
pub struct CreatePromptRequest {
    pub title: String,
    pub description: String,
    pub template: String,
}

/// Request body for a partial update; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePromptRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub template: String,
    pub created_by: i64,
}

impl From<&PromptTemplate> for PromptResponse {
    fn from(prompt: &PromptTemplate) -> Self {
        Self {
            id: prompt.id(),
            title: prompt.title().to_string(),
            description: prompt.description().to_string(),
            template: prompt.template().to_string(),
            created_by: prompt.created_by(),
        }
    }
}

/// Create a prompt template owned by the calling admin
///
/// POST /api/prompts
///
/// `title` and `template` must be non-blank; `description` may be empty.
pub async fn create_prompt(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    JsonBody(req): JsonBody<CreatePromptRequest>,
) -> Result<(StatusCode, Json<PromptResponse>), ApiError> {
    let draft =
        NewPrompt::new(req.title, req.description, req.template).map_err(ApiError::bad_request)?;

    let prompt = state.prompts.create(draft, admin.id).await?;
    tracing::info!(prompt_id = prompt.id(), admin_id = admin.id, "Created prompt template");

    Ok((StatusCode::CREATED, Json(PromptResponse::from(&prompt))))
}

/// List all prompt templates
///
/// GET /api/prompts
pub async fn list_prompts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PromptResponse>>, ApiError> {
    let prompts = state.prompts.find_all().await?;
    Ok(Json(prompts.iter().map(PromptResponse::from).collect()))
}

/// Partially update a prompt template
///
/// PATCH /api/prompts/:id
///
/// A missing id is reported as 400, like any other rejected update. Fields
/// that are present follow the create rules: `title` and `template` must be
/// non-blank.
pub async fn update_prompt(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    PathId(id): PathId,
    JsonBody(req): JsonBody<UpdatePromptRequest>,
) -> Result<Json<PromptResponse>, ApiError> {
    let patch = PromptPatch::new(req.title, req.description, req.template)
        .map_err(ApiError::bad_request)?;

    let prompt = state
        .prompts
        .update(id, patch)
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    Ok(Json(PromptResponse::from(&prompt)))
}

/// Delete a prompt template; unknown ids succeed
///
/// DELETE /api/prompts/:id
pub async fn delete_prompt(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    PathId(id): PathId,
) -> Result<StatusCode, ApiError> {
    state
        .prompts
        .delete(id)
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    tracing::info!(prompt_id = id, admin_id = admin.id, "Deleted prompt template");
    Ok(StatusCode::OK)
}
