use serde::Serialize;

use crate::events::DomainEvent;

// ============================================================================
// Product Domain Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductEvent {
    Created(ProductCreated),
}

impl ProductEvent {
    pub const CREATED: &'static str = "ProductCreatedEvent";
}

impl DomainEvent for ProductEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ProductEvent::Created(_) => Self::CREATED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreated {
    pub id: String,
    pub name: String,
    pub price: f64,
}
