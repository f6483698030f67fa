use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{Identified, Repository, RepositoryError};

// ============================================================================
// In-Memory Repository
// ============================================================================
//
// Holds entities in process memory for the repository's lifetime.
// Insertion order is preserved by find_all.
//
// ============================================================================

pub struct InMemoryRepository<T> {
    kind: &'static str,
    entries: RwLock<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    /// `kind` names the entity in errors and logs, e.g. "Order"
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub(crate) fn entries(&self) -> &RwLock<Vec<T>> {
        &self.entries
    }

    pub(crate) fn not_found(&self, id: &str) -> RepositoryError {
        RepositoryError::NotFound {
            kind: self.kind,
            id: id.to_string(),
        }
    }
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Identified + Clone + Send + Sync,
{
    async fn create(&self, entity: T) -> Result<(), RepositoryError> {
        let mut entries = self.entries.write().await;

        if entries.iter().any(|existing| existing.id() == entity.id()) {
            return Err(RepositoryError::AlreadyExists {
                kind: self.kind,
                id: entity.id().to_string(),
            });
        }

        debug!(kind = self.kind, id = entity.id(), "Entity created");
        entries.push(entity);
        Ok(())
    }

    async fn update(&self, entity: T) -> Result<(), RepositoryError> {
        let mut entries = self.entries.write().await;

        let slot = entries
            .iter_mut()
            .find(|existing| existing.id() == entity.id())
            .ok_or_else(|| self.not_found(entity.id()))?;

        debug!(kind = self.kind, id = entity.id(), "Entity updated");
        *slot = entity;
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<T, RepositoryError> {
        self.entries
            .read()
            .await
            .iter()
            .find(|existing| existing.id() == id)
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }

    async fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.entries.read().await.clone())
    }
}
