// ============================================================================
// Domain Events Infrastructure
// ============================================================================
//
// Generic, reusable publish/subscribe plumbing.
// Domain-specific events and handlers live in src/domain/
//
// ============================================================================

// Core abstractions (GENERIC - works with any event type)
mod core;
mod dispatcher;

#[cfg(test)]
pub(crate) mod testing;

// Re-export core infrastructure
pub use self::core::*;
pub use self::dispatcher::*;
