// ============================================================================
// Product Domain
// ============================================================================
//
// - Events (ProductCreated)
// - Errors (ProductError enum)
// - Entity (Product)
// - Event handlers, domain service, repository contract
//
// ============================================================================

pub mod events;
pub mod errors;
pub mod entity;
pub mod handlers;
pub mod service;
pub mod repository;

pub use events::*;
pub use errors::*;
pub use entity::*;
pub use handlers::*;
pub use service::*;
pub use repository::*;
