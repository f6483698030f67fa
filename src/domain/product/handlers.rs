use anyhow::Result;

use crate::events::{EventEnvelope, EventHandler};
use super::events::ProductEvent;

// ============================================================================
// Product Event Handlers
// ============================================================================

pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler<ProductEvent> for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &EventEnvelope<ProductEvent>) -> Result<()> {
        let ProductEvent::Created(created) = event.event_data();

        tracing::info!(
            product_id = %created.id,
            product_name = %created.name,
            price = created.price,
            "Sending product created email"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "send_email_when_product_is_created"
    }
}
