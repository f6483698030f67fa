use std::sync::Arc;

use crate::events::{EventDispatcher, EventEnvelope};
use super::errors::CustomerError;
use super::events::{CustomerAddressChanged, CustomerCreated, CustomerEvent};
use super::value_objects::Address;

// ============================================================================
// Customer Entity - Business Logic
// ============================================================================
//
// The dispatcher is injected per instance. Without one, state changes still
// apply and events are simply not published.
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
    dispatcher: Option<Arc<EventDispatcher<CustomerEvent>>>,
}

impl Customer {
    /// Create a customer that publishes no events
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
        Self::build(id.into(), name.into(), None)
    }

    /// Create a customer whose state changes are published to `dispatcher`
    pub fn with_dispatcher(
        id: impl Into<String>,
        name: impl Into<String>,
        dispatcher: Arc<EventDispatcher<CustomerEvent>>,
    ) -> Result<Self, CustomerError> {
        Self::build(id.into(), name.into(), Some(dispatcher))
    }

    fn build(
        id: String,
        name: String,
        dispatcher: Option<Arc<EventDispatcher<CustomerEvent>>>,
    ) -> Result<Self, CustomerError> {
        let customer = Self {
            id,
            name,
            address: None,
            active: false,
            reward_points: 0,
            dispatcher,
        };
        customer.validate()?;

        customer.dispatch(CustomerEvent::Created(CustomerCreated {
            id: customer.id.clone(),
            name: customer.name.clone(),
        }))?;

        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        Self::validate_fields(&self.id, &self.name)
    }

    fn validate_fields(id: &str, name: &str) -> Result<(), CustomerError> {
        if id.is_empty() {
            return Err(CustomerError::EmptyId);
        }
        if name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Rename the customer; the current name is kept when validation fails
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        Self::validate_fields(&self.id, &name)?;
        self.name = name;
        Ok(())
    }

    /// Replace the address and publish `CustomerAddressChangedEvent`
    pub fn change_address(&mut self, address: Address) -> Result<(), CustomerError> {
        self.address = Some(address.clone());

        self.dispatch(CustomerEvent::AddressChanged(CustomerAddressChanged {
            id: self.id.clone(),
            name: self.name.clone(),
            address,
        }))
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequiredToActivate);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Credits `points`, capped at `u64::MAX`
    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }

    fn dispatch(&self, event: CustomerEvent) -> Result<(), CustomerError> {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.notify(&EventEnvelope::new(event))?;
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::events::testing::{FailingHandler, RecordingHandler};
    use crate::events::DispatchError;

    fn test_address() -> Address {
        Address::new("rua do teste", 10, "12345-678", "Xique xique").unwrap()
    }

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new("123", "John").unwrap();

        assert_eq!(customer.id(), "123");
        assert_eq!(customer.name(), "John");
        assert!(customer.address().is_none());
        assert!(!customer.is_active());
        assert_eq!(customer.reward_points(), 0);
    }

    #[test]
    fn test_empty_id_fails() {
        let result = Customer::new("", "John");
        assert!(matches!(result.unwrap_err(), CustomerError::EmptyId));
    }

    #[test]
    fn test_empty_name_fails() {
        let result = Customer::new("123", "");
        assert!(matches!(result.unwrap_err(), CustomerError::EmptyName));
    }

    #[test]
    fn test_change_name() {
        let mut customer = Customer::new("123", "John").unwrap();
        customer.change_name("Jane").unwrap();
        assert_eq!(customer.name(), "Jane");
    }

    #[test]
    fn test_change_name_to_empty_keeps_previous() {
        let mut customer = Customer::new("123", "John").unwrap();

        let result = customer.change_name("");
        assert!(matches!(result.unwrap_err(), CustomerError::EmptyName));
        assert_eq!(customer.name(), "John");
    }

    #[test]
    fn test_activate_requires_address() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();

        let result = customer.activate();
        assert!(matches!(result.unwrap_err(), CustomerError::AddressRequiredToActivate));
        assert!(!customer.is_active());
    }

    #[test]
    fn test_activate_and_deactivate() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        customer.change_address(test_address()).unwrap();

        customer.activate().unwrap();
        assert!(customer.is_active());

        customer.deactivate();
        assert!(!customer.is_active());
    }

    #[test]
    fn test_add_reward_points() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();

        customer.add_reward_points(10);
        assert_eq!(customer.reward_points(), 10);

        customer.add_reward_points(10);
        assert_eq!(customer.reward_points(), 20);
    }

    #[test]
    fn test_reward_points_saturate() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();

        customer.add_reward_points(u64::MAX - 1);
        customer.add_reward_points(10);
        assert_eq!(customer.reward_points(), u64::MAX);
    }

    #[test]
    fn test_notify_handlers_when_customer_is_created() {
        let dispatcher = Arc::new(EventDispatcher::<CustomerEvent>::new());
        let first = Arc::new(RecordingHandler::<CustomerEvent>::new("first"));
        let second = Arc::new(RecordingHandler::<CustomerEvent>::new("second"));

        dispatcher.register(CustomerEvent::CREATED, first.clone());
        dispatcher.register(CustomerEvent::CREATED, second.clone());

        Customer::with_dispatcher("123", "Sidenir Teste", Arc::clone(&dispatcher)).unwrap();

        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);

        let received = first.received();
        assert_eq!(received[0].event_type(), CustomerEvent::CREATED);
        assert_eq!(
            serde_json::to_value(received[0].event_data()).unwrap(),
            json!({ "id": "123", "name": "Sidenir Teste" })
        );
    }

    #[test]
    fn test_notify_handler_when_customer_address_is_changed() {
        let dispatcher = Arc::new(EventDispatcher::<CustomerEvent>::new());
        let handler = Arc::new(RecordingHandler::<CustomerEvent>::new("address"));

        dispatcher.register(CustomerEvent::ADDRESS_CHANGED, handler.clone());

        let mut customer =
            Customer::with_dispatcher("123", "Sidenir Teste", Arc::clone(&dispatcher)).unwrap();
        assert_eq!(handler.calls(), 0);

        customer.change_address(test_address()).unwrap();

        let received = handler.received();
        assert_eq!(received.len(), 1);
        assert_eq!(
            serde_json::to_value(received[0].event_data()).unwrap(),
            json!({
                "id": "123",
                "name": "Sidenir Teste",
                "address": {
                    "street": "rua do teste",
                    "number": 10,
                    "zip": "12345-678",
                    "city": "Xique xique",
                },
            })
        );
    }

    #[test]
    fn test_invalid_customer_dispatches_nothing() {
        let dispatcher = Arc::new(EventDispatcher::<CustomerEvent>::new());
        let handler = Arc::new(RecordingHandler::<CustomerEvent>::new("created"));
        dispatcher.register(CustomerEvent::CREATED, handler.clone());

        let result = Customer::with_dispatcher("", "Nobody", Arc::clone(&dispatcher));

        assert!(matches!(result.unwrap_err(), CustomerError::EmptyId));
        assert_eq!(handler.calls(), 0);
    }

    #[test]
    fn test_customer_without_dispatcher_changes_address() {
        let mut customer = Customer::new("123", "No Events").unwrap();
        customer.change_address(test_address()).unwrap();
        assert_eq!(customer.address(), Some(&test_address()));
    }

    #[test]
    fn test_handler_failure_surfaces_to_caller() {
        let dispatcher = Arc::new(EventDispatcher::<CustomerEvent>::new());
        dispatcher.register(CustomerEvent::CREATED, Arc::new(FailingHandler::new("broken")));

        let result = Customer::with_dispatcher("123", "Sidenir Teste", dispatcher);

        assert!(matches!(
            result.unwrap_err(),
            CustomerError::Dispatch(DispatchError::HandlerFailed { handler: "broken", .. })
        ));
    }

    #[test]
    fn test_customers_share_one_dispatcher() {
        let dispatcher = Arc::new(EventDispatcher::<CustomerEvent>::new());
        let handler = Arc::new(RecordingHandler::<CustomerEvent>::new("created"));
        dispatcher.register(CustomerEvent::CREATED, handler.clone());

        Customer::with_dispatcher("1", "First", Arc::clone(&dispatcher)).unwrap();
        Customer::with_dispatcher("2", "Second", Arc::clone(&dispatcher)).unwrap();

        assert_eq!(handler.calls(), 2);
    }
}
