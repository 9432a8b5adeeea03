//! Per-run orchestration state.

use common::{AuditTrail, OrchestrationId};
use serde_json::{Map, Value};

use crate::error::{Result, StepError};
use crate::step::OrchestrationStep;

/// Mutable state of one payment while it moves through the pipeline.
///
/// Created at the start of a run and dropped once the result is built.
/// Every step transition and every attribute write appends exactly one
/// audit entry.
#[derive(Debug, Clone)]
pub struct OrchestrationContext {
    internal_id: OrchestrationId,
    current_step: OrchestrationStep,
    attributes: Map<String, Value>,
    audit_trail: AuditTrail,
}

impl OrchestrationContext {
    /// Creates a context with a freshly generated internal id.
    pub fn new() -> Self {
        Self::with_id(OrchestrationId::new())
    }

    pub fn with_id(internal_id: OrchestrationId) -> Self {
        let mut audit_trail = AuditTrail::new();
        audit_trail.record("Context created");
        Self {
            internal_id,
            current_step: OrchestrationStep::ReceiveRequest,
            attributes: Map::new(),
            audit_trail,
        }
    }

    pub fn internal_id(&self) -> OrchestrationId {
        self.internal_id
    }

    pub fn current_step(&self) -> OrchestrationStep {
        self.current_step
    }

    /// Moves the run to `next`.
    ///
    /// Rejects backwards moves and any move out of a terminal step, leaving
    /// the context untouched.
    pub fn advance_to(&mut self, next: OrchestrationStep) -> Result<()> {
        if !self.current_step.can_advance_to(next) {
            return Err(StepError::InvalidTransition {
                from: self.current_step,
                to: next,
            });
        }
        self.audit_trail
            .record(format!("Advancing from {} to {}", self.current_step, next));
        self.current_step = next;
        Ok(())
    }

    /// Moves the run to `ERROR` unless it already reached a terminal step.
    pub fn fail(&mut self) {
        if !self.current_step.is_terminal() {
            let _ = self.advance_to(OrchestrationStep::Error);
        }
    }

    /// Sets an attribute, overwriting any previous value.
    pub fn put_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        self.audit_trail
            .record(format!("Attribute set: {}={}", key, render(&value)));
        self.attributes.insert(key, value);
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Returns the attribute if it holds a string.
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn audit_trail(&self) -> &AuditTrail {
        &self.audit_trail
    }

    /// Appends a free-form audit entry.
    pub fn add_audit(&mut self, message: impl Into<String>) {
        self.audit_trail.record(message);
    }
}

impl Default for OrchestrationContext {
    fn default() -> Self {
        Self::new()
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
