use serde::Serialize;
use uuid::Uuid;
use chrono::{DateTime, Utc};

// ============================================================================
// Domain Event Trait
// ============================================================================

/// Generic Domain Event trait
///
/// Implemented by the payload type of every event that flows through an
/// `EventDispatcher`. The type identifier is the dispatcher's lookup key and
/// is derived from the payload's kind, so it cannot drift from the data.
pub trait DomainEvent: Send + Sync + 'static {
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// Event Envelope - Immutable Event Value
// ============================================================================
//
// Wraps a domain payload with the metadata captured at dispatch time.
// Fields are private: once built, an envelope cannot be changed.
//
// ============================================================================

/// Generic Event Envelope - wraps any domain event with metadata
///
/// Type Parameter:
/// - `E`: The domain event payload (must implement DomainEvent trait)
#[derive(Serialize, Clone, Debug)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    event_data: E,
    timestamp: DateTime<Utc>,
}

impl<E: DomainEvent> EventEnvelope<E> {
    pub fn new(event_data: E) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_data,
            timestamp: Utc::now(),
        }
    }

    /// Registry key used to route this event
    pub fn event_type(&self) -> &'static str {
        self.event_data.event_type()
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn event_data(&self) -> &E {
        &self.event_data
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

// ============================================================================
// Tests
// ============================================================================
