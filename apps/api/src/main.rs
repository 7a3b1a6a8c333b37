use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use promptdeck_api::api::{routes, state::AppState};
use promptdeck_api::auth::bootstrap::ensure_admin;
use promptdeck_api::config::Config;
use promptdeck_api::domain::repositories::{PromptRepository, UserRepository};
use promptdeck_api::domain::services::{TemplateProcessor, WebSearch};
use promptdeck_api::infrastructure::llm::OpenAiCompletionClient;
use promptdeck_api::infrastructure::repositories::{
    InMemoryPromptRepository, InMemoryUserRepository,
};
use promptdeck_api::infrastructure::search::{BraveSearchClient, DisabledSearch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promptdeck_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Process-lifetime storage
    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let prompts: Arc<dyn PromptRepository> = Arc::new(InMemoryPromptRepository::new());

    if let Some(admin) = &config.admin {
        ensure_admin(users.as_ref(), &admin.username, &admin.password).await?;
    } else {
        tracing::warn!("No admin account configured; prompt templates cannot be managed");
    }

    let search: Arc<dyn WebSearch> = match &config.search.api_key {
        Some(api_key) => Arc::new(BraveSearchClient::new(&config.search.base_url, api_key)),
        None => {
            tracing::warn!("SEARCH_API_KEY not set, web search is disabled");
            Arc::new(DisabledSearch)
        }
    };
    let completion = Arc::new(OpenAiCompletionClient::new(&config.completion));
    let processor = Arc::new(TemplateProcessor::new(completion, search));

    let state = AppState::new(users, prompts, processor, config.jwt_secret.clone());
    let app = routes::router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
