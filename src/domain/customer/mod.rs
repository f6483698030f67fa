// ============================================================================
// Customer Domain - Business Logic for the Customer Entity
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (Address)
// - Events (CustomerCreated, CustomerAddressChanged)
// - Errors (CustomerError enum)
// - Entity (Customer with its validation rules)
// - Event handlers reacting to customer events
// - Repository contract
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod errors;
pub mod entity;
pub mod handlers;
pub mod repository;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use errors::*;
pub use entity::*;
pub use handlers::*;
pub use repository::*;
