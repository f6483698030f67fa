use std::sync::Arc;
use anyhow::Result;

use super::event::{DomainEvent, EventEnvelope};

// ============================================================================
// Event Handler Trait
// ============================================================================

/// A unit of side-effecting logic run when a matching event is dispatched.
///
/// Handlers are free-standing: any type with a `handle` operation qualifies.
/// A returned error aborts the rest of the fan-out for that `notify` call.
pub trait EventHandler<E: DomainEvent>: Send + Sync {
    fn handle(&self, event: &EventEnvelope<E>) -> Result<()>;

    /// Label used in error context and metrics
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Handlers are shared, not owned by the dispatcher; identity is the `Arc`.
pub type SharedHandler<E> = Arc<dyn EventHandler<E>>;
