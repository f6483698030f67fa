// ============================================================================
// Repository Layer
// ============================================================================
//
// Generic repository contract shared by every entity, plus an in-memory
// implementation. Entity-specific extensions live next to their entity in
// src/domain/<entity>/repository.rs
//
// ============================================================================

mod in_memory;

pub use in_memory::InMemoryRepository;

use async_trait::async_trait;

/// Entities addressable by a string id
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("{kind} already exists: {id}")]
    AlreadyExists { kind: &'static str, id: String },

    #[error("{kind} rejected: {reason}")]
    Rejected { kind: &'static str, reason: String },
}

#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn create(&self, entity: T) -> Result<(), RepositoryError>;
    async fn update(&self, entity: T) -> Result<(), RepositoryError>;
    async fn find(&self, id: &str) -> Result<T, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;
}
