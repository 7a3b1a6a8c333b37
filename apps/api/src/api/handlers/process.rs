use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extract::{JsonBody, PathId};
use crate::api::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub response: String,
}

/// Fill a template with the user's input and return the generated text
///
/// POST /api/process/:prompt_id
///
/// An id that does not parse can never match a stored prompt, so it is
/// reported as 404 like any other unknown id.
pub async fn process_prompt(
    State(state): State<AppState>,
    prompt_id: Result<PathId, ApiError>,
    JsonBody(req): JsonBody<ProcessRequest>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let PathId(prompt_id) = prompt_id.map_err(|_| ApiError::not_found("Prompt not found"))?;

    let prompt = state
        .prompts
        .find_by_id(prompt_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Prompt not found"))?;

    tracing::debug!(prompt_id, "Processing prompt template");

    let response = state
        .processor
        .process(prompt.template(), &req.input)
        .await?;

    Ok(Json(ProcessResponse { response }))
}
