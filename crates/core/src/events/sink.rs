//! Sinks that receive domain events from the goal services.

use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Receiver for domain events.
///
/// Services call it after a mutation has been applied. Emitting is
/// best-effort: it must not block on I/O and cannot fail the operation.
pub trait DomainEventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);

    /// Emits events in order. Override when a sink can batch.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        events.into_iter().for_each(|event| self.emit(event));
    }
}

/// Discards every event. Default for services built without a sink.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Records events in emission order, for assertions in tests.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    recorded: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.recorded.lock().unwrap().clone()
    }

    /// Recorded events that refer to `goal_id`.
    pub fn events_for_goal(&self, goal_id: &str) -> Vec<DomainEvent> {
        self.recorded
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.goal_id() == goal_id)
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.recorded.lock().unwrap().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.recorded.lock().unwrap().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.recorded.lock().unwrap().push(event);
    }
}
