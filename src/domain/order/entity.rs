use super::errors::OrderError;
use super::value_objects::OrderItem;

// ============================================================================
// Order Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() {
            return Err(OrderError::EmptyId);
        }
        if self.customer_id.is_empty() {
            return Err(OrderError::EmptyCustomerId);
        }
        Self::validate_items(&self.items)
    }

    fn validate_items(items: &[OrderItem]) -> Result<(), OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyItems);
        }

        for item in items {
            if item.quantity() == 0 {
                return Err(OrderError::InvalidQuantity(item.id().to_string()));
            }
        }

        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// Replace the order's items; the current items stay on validation failure
    pub fn change_items(&mut self, items: Vec<OrderItem>) -> Result<(), OrderError> {
        Self::validate_items(&items)?;
        self.items = items;
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
