use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{auth, process, prompts};
use crate::api::state::AppState;

/// Builds the complete router with all routes and middleware
///
/// ```text
/// GET    /health
/// POST   /api/register
/// POST   /api/login
/// GET    /api/user                 (bearer)
/// GET    /api/prompts
/// POST   /api/prompts              (admin)
/// PATCH  /api/prompts/:id          (admin)
/// DELETE /api/prompts/:id          (admin)
/// POST   /api/process/:prompt_id
/// ```
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(auth::health_check))
        // Auth routes
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/user", get(auth::current_user))
        // Prompt template routes
        .route(
            "/api/prompts",
            get(prompts::list_prompts).post(prompts::create_prompt),
        )
        .route(
            "/api/prompts/:id",
            patch(prompts::update_prompt).delete(prompts::delete_prompt),
        )
        // Processing
        .route("/api/process/:prompt_id", post(process::process_prompt))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
