use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::prompt::{NewPrompt, PromptPatch, PromptTemplate};

/// Repository trait for prompt templates
///
/// Ids are assigned by the implementation, start at 1 and are never reused.
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Store a new template owned by `created_by`
    async fn create(&self, prompt: NewPrompt, created_by: i64) -> RepositoryResult<PromptTemplate>;

    /// All templates in ascending id order
    async fn find_all(&self) -> RepositoryResult<Vec<PromptTemplate>>;

    /// Find a template by its ID
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<PromptTemplate>>;

    /// Merge the fields present in `patch` into an existing template
    ///
    /// Fails with `RepositoryError::NotFound` if the id is absent.
    async fn update(&self, id: i64, patch: PromptPatch) -> RepositoryResult<PromptTemplate>;

    /// Delete a template by ID; deleting a missing id succeeds
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}
