use crate::events::{EventDispatcher, EventEnvelope};
use super::errors::ProductError;
use super::events::{ProductCreated, ProductEvent};

// ============================================================================
// Product Entity
// ============================================================================

#[derive(Debug, Clone)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    /// Create a product and publish `ProductCreatedEvent` to `dispatcher`
    pub fn with_dispatcher(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        dispatcher: &EventDispatcher<ProductEvent>,
    ) -> Result<Self, ProductError> {
        let product = Self::new(id, name, price)?;

        dispatcher.notify(&EventEnvelope::new(ProductEvent::Created(ProductCreated {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
        })))?;

        Ok(product)
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        check_price(self.price)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), ProductError> {
        check_price(price)?;
        self.price = price;
        Ok(())
    }
}

pub(crate) fn check_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() {
        return Err(ProductError::InvalidPrice(price));
    }
    if price < 0.0 {
        return Err(ProductError::NegativePrice);
    }
    Ok(())
}
