use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace};

use crate::events::core::{DomainEvent, EventEnvelope, SharedHandler};
use crate::metrics::DispatcherMetrics;
use super::errors::DispatchError;

// ============================================================================
// Event Dispatcher - Synchronous In-Process Fan-Out
// ============================================================================
//
// Responsibilities:
// 1. Keep an ordered list of handlers per event type (registration order)
// 2. Remove handlers by identity, or drop the whole registry at once
// 3. Invoke every handler for an event's type on the calling thread
//
// The first failing handler stops the fan-out and its error is returned.
//
// ============================================================================

type Registry<E> = HashMap<String, Vec<SharedHandler<E>>>;

pub struct EventDispatcher<E: DomainEvent> {
    handlers: RwLock<Registry<E>>,
    metrics: Option<Arc<DispatcherMetrics>>,
}

impl<E: DomainEvent> EventDispatcher<E> {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            metrics: None,
        }
    }

    /// Dispatcher that records fan-out counters and timings
    pub fn with_metrics(metrics: Arc<DispatcherMetrics>) -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            metrics: Some(metrics),
        }
    }

    /// Append a handler for `event_type`. Duplicates are kept.
    pub fn register(&self, event_type: impl Into<String>, handler: SharedHandler<E>) {
        let event_type = event_type.into();

        debug!(
            event_type = %event_type,
            handler = handler.name(),
            "Registering event handler"
        );

        let mut registry = self.write();
        if let Some(metrics) = &self.metrics {
            metrics.record_registered(&event_type);
        }
        registry.entry(event_type).or_default().push(handler);
    }

    /// Remove the first registration of `handler` (by identity) for `event_type`.
    ///
    /// The event type stays in the registry even when its list becomes empty.
    pub fn unregister(&self, event_type: &str, handler: &SharedHandler<E>) {
        let removed = {
            let mut registry = self.write();
            let Some(handlers) = registry.get_mut(event_type) else {
                return;
            };
            let removed = handlers
                .iter()
                .position(|registered| Arc::ptr_eq(registered, handler))
                .map(|index| handlers.remove(index));
            if let (Some(_), Some(metrics)) = (&removed, &self.metrics) {
                metrics.record_unregistered(event_type, 1);
            }
            removed
        };

        // Dropped outside the lock: a handler's Drop may use the dispatcher.
        if let Some(removed) = removed {
            debug!(
                event_type,
                handler = removed.name(),
                "Unregistered event handler"
            );
        }
    }

    /// Clear every event type and handler.
    ///
    /// Only this dispatcher's gauge contributions are withdrawn; a metrics
    /// instance shared with other dispatchers keeps their counts.
    pub fn unregister_all(&self) {
        let previous = {
            let mut registry = self.write();
            let previous = std::mem::take(&mut *registry);
            if let Some(metrics) = &self.metrics {
                for (event_type, handlers) in &previous {
                    metrics.record_unregistered(event_type, handlers.len());
                }
            }
            previous
        };

        debug!(event_types = previous.len(), "Unregistered all event handlers");

        drop(previous);
    }

    /// Invoke every handler registered for the event's type, in order.
    pub fn notify(&self, event: &EventEnvelope<E>) -> Result<(), DispatchError> {
        let event_type = event.event_type();

        if let Some(metrics) = &self.metrics {
            metrics.record_notified(event_type);
        }

        let Some(handlers) = self.handlers_for(event_type) else {
            trace!(event_type, "No handlers registered for event");
            return Ok(());
        };

        let _timer = self
            .metrics
            .as_ref()
            .map(|metrics| metrics.start_notify_timer(event_type));

        trace!(
            event_type,
            event_id = %event.event_id(),
            handler_count = handlers.len(),
            "Notifying event handlers"
        );

        for handler in &handlers {
            if let Some(metrics) = &self.metrics {
                metrics.record_invocation(event_type);
            }

            handler.handle(event).map_err(|source| {
                if let Some(metrics) = &self.metrics {
                    metrics.record_failure(event_type, handler.name());
                }
                DispatchError::HandlerFailed {
                    event_type,
                    handler: handler.name(),
                    source,
                }
            })?;
        }

        Ok(())
    }

    /// Snapshot of the whole registry
    pub fn event_handlers(&self) -> HashMap<String, Vec<SharedHandler<E>>> {
        self.read().clone()
    }

    /// Handlers for one event type; `None` when the type has no entry at all
    pub fn handlers_for(&self, event_type: &str) -> Option<Vec<SharedHandler<E>>> {
        self.read().get(event_type).cloned()
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry<E>> {
        self.handlers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry<E>> {
        self.handlers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: DomainEvent> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DomainEvent> fmt::Debug for EventDispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.read();
        let handlers: HashMap<&str, Vec<&'static str>> = registry
            .iter()
            .map(|(event_type, handlers)| {
                (
                    event_type.as_str(),
                    handlers.iter().map(|handler| handler.name()).collect(),
                )
            })
            .collect();

        f.debug_struct("EventDispatcher")
            .field("handlers", &handlers)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
