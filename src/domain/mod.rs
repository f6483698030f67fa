// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific entities and business logic.
// Each entity has its own subdirectory with:
// - Value objects
// - Events and the handlers that react to them
// - Errors
// - Entity implementation
// - Repository contract
//
// Entities only know the generic dispatcher in src/events/.
//
// ============================================================================

pub mod customer;
pub mod order;
pub mod product;
