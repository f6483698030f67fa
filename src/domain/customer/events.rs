use serde::Serialize;

use crate::events::DomainEvent;
use super::value_objects::Address;

// ============================================================================
// Customer Domain Events
// ============================================================================

/// Union type for all customer events
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CustomerEvent {
    Created(CustomerCreated),
    AddressChanged(CustomerAddressChanged),
}

impl CustomerEvent {
    pub const CREATED: &'static str = "CustomerCreatedEvent";
    pub const ADDRESS_CHANGED: &'static str = "CustomerAddressChangedEvent";
}

impl DomainEvent for CustomerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CustomerEvent::Created(_) => Self::CREATED,
            CustomerEvent::AddressChanged(_) => Self::ADDRESS_CHANGED,
        }
    }
}

// Individual event payloads

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerCreated {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerAddressChanged {
    pub id: String,
    pub name: String,
    pub address: Address,
}
