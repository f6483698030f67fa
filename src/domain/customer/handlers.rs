use anyhow::{bail, Result};

use crate::events::{EventEnvelope, EventHandler};
use super::events::CustomerEvent;

// ============================================================================
// Customer Event Handlers
// ============================================================================
//
// Side effects run when customer events are dispatched. These only log;
// register them under the matching CustomerEvent constant.
//
// ============================================================================

/// First log line for a newly created customer
pub struct LogFirstWhenCustomerIsCreatedHandler;

impl EventHandler<CustomerEvent> for LogFirstWhenCustomerIsCreatedHandler {
    fn handle(&self, event: &EventEnvelope<CustomerEvent>) -> Result<()> {
        let CustomerEvent::Created(created) = event.event_data() else {
            bail!("expected {}, got {}", CustomerEvent::CREATED, event.event_type());
        };

        tracing::info!(
            customer_id = %created.id,
            event_id = %event.event_id(),
            "This is the first log for the event: CustomerCreated"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log_first_when_customer_is_created"
    }
}

/// Second log line for a newly created customer
pub struct LogSecondWhenCustomerIsCreatedHandler;

impl EventHandler<CustomerEvent> for LogSecondWhenCustomerIsCreatedHandler {
    fn handle(&self, event: &EventEnvelope<CustomerEvent>) -> Result<()> {
        let CustomerEvent::Created(created) = event.event_data() else {
            bail!("expected {}, got {}", CustomerEvent::CREATED, event.event_type());
        };

        tracing::info!(
            customer_id = %created.id,
            event_id = %event.event_id(),
            "This is the second log for the event: CustomerCreated"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log_second_when_customer_is_created"
    }
}

pub struct LogWhenCustomerAddressIsChangedHandler;

impl EventHandler<CustomerEvent> for LogWhenCustomerAddressIsChangedHandler {
    fn handle(&self, event: &EventEnvelope<CustomerEvent>) -> Result<()> {
        let CustomerEvent::AddressChanged(changed) = event.event_data() else {
            bail!(
                "expected {}, got {}",
                CustomerEvent::ADDRESS_CHANGED,
                event.event_type()
            );
        };

        tracing::info!(
            customer_id = %changed.id,
            customer_name = %changed.name,
            address = %changed.address,
            "Customer address changed"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log_when_customer_address_is_changed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::events::{CustomerAddressChanged, CustomerCreated};
    use crate::domain::customer::value_objects::Address;

    fn created_event() -> EventEnvelope<CustomerEvent> {
        EventEnvelope::new(CustomerEvent::Created(CustomerCreated {
            id: "123".to_string(),
            name: "Customer".to_string(),
        }))
    }

    fn address_changed_event() -> EventEnvelope<CustomerEvent> {
        EventEnvelope::new(CustomerEvent::AddressChanged(CustomerAddressChanged {
            id: "123".to_string(),
            name: "Customer".to_string(),
            address: Address::new("Street", 1, "00000-000", "City").unwrap(),
        }))
    }

    #[test]
    fn test_created_handlers_accept_created_event() {
        assert!(LogFirstWhenCustomerIsCreatedHandler.handle(&created_event()).is_ok());
        assert!(LogSecondWhenCustomerIsCreatedHandler.handle(&created_event()).is_ok());
    }

    #[test]
    fn test_created_handler_rejects_other_kind() {
        let err = LogFirstWhenCustomerIsCreatedHandler
            .handle(&address_changed_event())
            .unwrap_err();
        assert!(err.to_string().contains(CustomerEvent::ADDRESS_CHANGED));
    }

    #[test]
    fn test_address_handler() {
        assert!(LogWhenCustomerAddressIsChangedHandler
            .handle(&address_changed_event())
            .is_ok());
        assert!(LogWhenCustomerAddressIsChangedHandler
            .handle(&created_event())
            .is_err());
    }
}
