use std::sync::Arc;

use crate::domain::repositories::{PromptRepository, UserRepository};
use crate::domain::services::TemplateProcessor;

/// Shared application state
///
/// Cloned into every handler; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub prompts: Arc<dyn PromptRepository>,
    pub processor: Arc<TemplateProcessor>,
    jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        prompts: Arc<dyn PromptRepository>,
        processor: Arc<TemplateProcessor>,
        jwt_secret: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            users,
            prompts,
            processor,
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Secret used to sign and verify session tokens
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}
