// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (OrderItem)
// - Errors (OrderError enum)
// - Entity (Order with its validation rules)
// - Domain service (totals, placing orders with reward points)
// - Repository contract
//
// Orders publish no events.
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod entity;
pub mod service;
pub mod repository;

pub use value_objects::*;
pub use errors::*;
pub use entity::*;
pub use service::*;
pub use repository::*;
