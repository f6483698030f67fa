use crate::events::DispatchError;

// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Id is required")]
    EmptyId,

    #[error("Name is required")]
    EmptyName,

    #[error("Price must be greater than or equal to zero")]
    NegativePrice,

    #[error("Price must be a finite number, got {0}")]
    InvalidPrice(f64),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
