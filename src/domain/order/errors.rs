// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Id is required")]
    EmptyId,

    #[error("CustomerId is required")]
    EmptyCustomerId,

    #[error("Items are required")]
    EmptyItems,

    #[error("Quantity must be greater than 0 (item {0})")]
    InvalidQuantity(String),
}
