// ============================================================================
// Events Core - Generic Event & Handler Contracts
// ============================================================================
//
// Key Principles:
// - No domain-specific code (no Customer, Product, Order, etc.)
// - An event's type identifier is derived from its kind, never stored
// - Handlers expose exactly one operation: handle(event)
//
// ============================================================================

pub mod event;
pub mod handler;

// Re-export core types for convenience
pub use event::{DomainEvent, EventEnvelope};
pub use handler::{EventHandler, SharedHandler};
