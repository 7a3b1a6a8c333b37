use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a completion backend
///
/// Both variants carry the upstream message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// The provider answered with an error status
    #[error("Completion API error: {0}")]
    Api(String),

    /// The request never produced a usable response
    #[error("Completion API error: {0}")]
    Transport(String),
}

/// Generates text for a fully resolved prompt
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
