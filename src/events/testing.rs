//! Test doubles shared by the dispatcher and domain tests.

use std::sync::{Arc, Mutex};
use anyhow::{anyhow, Result};

use super::{DomainEvent, EventEnvelope, EventHandler};

/// Order in which handlers ran, shared across several handlers.
pub(crate) type Journal = Arc<Mutex<Vec<&'static str>>>;

pub(crate) fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

/// Remembers every event it receives.
pub(crate) struct RecordingHandler<E> {
    label: &'static str,
    received: Mutex<Vec<EventEnvelope<E>>>,
    journal: Option<Journal>,
}

impl<E> RecordingHandler<E> {
    pub(crate) fn new(label: &'static str) -> Self {
        Self {
            label,
            received: Mutex::new(Vec::new()),
            journal: None,
        }
    }

    pub(crate) fn with_journal(label: &'static str, journal: Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Self::new(label)
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl<E: Clone> RecordingHandler<E> {
    pub(crate) fn received(&self) -> Vec<EventEnvelope<E>> {
        self.received.lock().unwrap().clone()
    }
}

impl<E: DomainEvent + Clone> EventHandler<E> for RecordingHandler<E> {
    fn handle(&self, event: &EventEnvelope<E>) -> Result<()> {
        self.received.lock().unwrap().push(event.clone());
        if let Some(journal) = &self.journal {
            journal.lock().unwrap().push(self.label);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.label
    }
}

/// Always fails; records its label in the journal first.
pub(crate) struct FailingHandler {
    label: &'static str,
    journal: Option<Journal>,
}

impl FailingHandler {
    pub(crate) fn new(label: &'static str) -> Self {
        Self { label, journal: None }
    }

    pub(crate) fn with_journal(label: &'static str, journal: Journal) -> Self {
        Self { label, journal: Some(journal) }
    }
}

impl<E: DomainEvent> EventHandler<E> for FailingHandler {
    fn handle(&self, _event: &EventEnvelope<E>) -> Result<()> {
        if let Some(journal) = &self.journal {
            journal.lock().unwrap().push(self.label);
        }
        Err(anyhow!("{} refused the event", self.label))
    }

    fn name(&self) -> &'static str {
        self.label
    }
}
