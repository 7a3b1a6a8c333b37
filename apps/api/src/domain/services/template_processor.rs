// Template resolution and completion
//
// Placeholders are literal tokens; only the first occurrence of each is
// substituted, so a template repeating `{{input}}` keeps the later copies.

use std::sync::Arc;

use thiserror::Error;

use super::completion::{CompletionClient, CompletionError};
use super::search::WebSearch;

/// Token replaced by the user's raw input
pub const INPUT_PLACEHOLDER: &str = "{{input}}";

/// Token replaced by the web search digest for the user's input
pub const SEARCH_PLACEHOLDER: &str = "{{search}}";

/// Errors that can occur while processing a template
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Resolves placeholders in a template and sends the result to the completion backend
pub struct TemplateProcessor {
    completion: Arc<dyn CompletionClient>,
    search: Arc<dyn WebSearch>,
}

impl TemplateProcessor {
    pub fn new(completion: Arc<dyn CompletionClient>, search: Arc<dyn WebSearch>) -> Self {
        Self { completion, search }
    }

    /// Resolve `template` against `user_input` and return the generated text
    ///
    /// The search backend is queried once with `user_input`, and only when the
    /// template contains `{{search}}`. Search failures never surface here.
    pub async fn process(&self, template: &str, user_input: &str) -> Result<String, ProcessError> {
        let digest = if template.contains(SEARCH_PLACEHOLDER) {
            Some(self.search.search(user_input).await)
        } else {
            None
        };

        let prompt = resolve_placeholders(template, user_input, digest.as_deref());
        tracing::debug!(
            searched = digest.is_some(),
            prompt_len = prompt.len(),
            "Resolved prompt template"
        );

        let text = self.completion.complete(&prompt).await.map_err(|e| {
            tracing::error!(error = %e, "Completion request failed");
            e
        })?;

        Ok(text)
    }
}

/// Substitute the first `{{search}}` (when a digest is given), then the first `{{input}}`
///
/// # Example
/// ```
/// use promptdeck_api::domain::services::template_processor::resolve_placeholders;
///
/// let prompt = resolve_placeholders("Tell me about {{input}}", "cats", None);
/// assert_eq!(prompt, "Tell me about cats");
/// ```
pub fn resolve_placeholders(
    template: &str,
    user_input: &str,
    search_digest: Option<&str>,
) -> String {
    let resolved = match search_digest {
        Some(digest) => template.replacen(SEARCH_PLACEHOLDER, digest, 1),
        None => template.to_string(),
    };

    resolved.replacen(INPUT_PLACEHOLDER, user_input, 1)
}
