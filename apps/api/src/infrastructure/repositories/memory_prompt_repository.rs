use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::prompt::{NewPrompt, PromptPatch, PromptTemplate};
use crate::domain::repositories::{PromptRepository, RepositoryError, RepositoryResult};

/// In-memory implementation of PromptRepository
///
/// Records live for the lifetime of the process. The map and the id counter
/// sit behind one lock so every call is atomic on its own.
#[derive(Default)]
pub struct InMemoryPromptRepository {
    table: RwLock<PromptTable>,
}

#[derive(Default)]
struct PromptTable {
    last_id: i64,
    rows: BTreeMap<i64, PromptTemplate>,
}

impl InMemoryPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn create(&self, prompt: NewPrompt, created_by: i64) -> RepositoryResult<PromptTemplate> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;

        let record = PromptTemplate::from_draft(id, prompt, created_by);
        table.rows.insert(id, record.clone());

        tracing::debug!(prompt_id = id, created_by, "Stored prompt template");
        Ok(record)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<PromptTemplate>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<PromptTemplate>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, patch: PromptPatch) -> RepositoryResult<PromptTemplate> {
        let mut table = self.table.write().await;
        let record = table.rows.get_mut(&id).ok_or(RepositoryError::NotFound {
            entity: "Prompt",
            id,
        })?;

        record.apply(patch);
        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_some() {
            tracing::debug!(prompt_id = id, "Deleted prompt template");
        }
        Ok(())
    }
}
