//! Event sinks receiving structured orchestration events.

use std::sync::{Arc, RwLock};

use crate::events::OrchestrationEvent;

/// Destination for orchestration events.
///
/// Injected into the orchestrator so the core writes no process-wide state.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &OrchestrationEvent);
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn emit(&self, event: &OrchestrationEvent) {
        (**self).emit(event);
    }
}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &OrchestrationEvent) {
        match event {
            OrchestrationEvent::Started(data) => {
                tracing::info!(internal_id = %data.internal_id, "orchestration started");
            }
            OrchestrationEvent::StepStarted(data) => {
                tracing::debug!(internal_id = %data.internal_id, step = %data.step, "step started");
            }
            OrchestrationEvent::StepCompleted(data) => {
                tracing::debug!(internal_id = %data.internal_id, step = %data.step, "step completed");
            }
            OrchestrationEvent::StepFailed(data) => {
                tracing::warn!(
                    internal_id = %data.internal_id,
                    step = %data.step,
                    error = %data.error,
                    "step failed"
                );
            }
            OrchestrationEvent::Finished(data) => {
                tracing::info!(
                    internal_id = %data.internal_id,
                    status = %data.status,
                    duration_ms = data.duration_ms,
                    "orchestration finished"
                );
            }
        }
    }
}

/// Records events in memory for inspection in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventSink {
    events: Arc<RwLock<Vec<OrchestrationEvent>>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded events, oldest first.
    pub fn events(&self) -> Vec<OrchestrationEvent> {
        self.events
            .read()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Returns the event type names in emission order.
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events
            .read()
            .map(|events| events.iter().map(OrchestrationEvent::event_type).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.read().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for InMemoryEventSink {
    fn emit(&self, event: &OrchestrationEvent) {
        if let Ok(mut events) = self.events.write() {
            events.push(event.clone());
        }
    }
}
