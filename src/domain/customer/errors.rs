use crate::events::DispatchError;

// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Id is required")]
    EmptyId,

    #[error("Name is required")]
    EmptyName,

    #[error("Street is required")]
    EmptyStreet,

    #[error("Number is required")]
    MissingNumber,

    #[error("Zip is required")]
    EmptyZip,

    #[error("City is required")]
    EmptyCity,

    #[error("Address is mandatory to activate a customer")]
    AddressRequiredToActivate,

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
