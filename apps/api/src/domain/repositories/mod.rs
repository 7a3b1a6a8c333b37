// Repository ports
// Infrastructure adapters implement these traits; callers only see the traits

pub mod prompt_repository;
pub mod user_repository;

use thiserror::Error;

pub use prompt_repository::PromptRepository;
pub use user_repository::UserRepository;

/// Errors surfaced by any repository implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{0} already exists")]
    Duplicate(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
