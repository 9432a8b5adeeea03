//! Structured events emitted while a payment is orchestrated.

use chrono::{DateTime, Utc};
use common::OrchestrationId;
use serde::{Deserialize, Serialize};

use crate::result::OrchestrationStatus;
use crate::step::OrchestrationStep;

/// Lifecycle events delivered to an [`EventSink`](crate::EventSink).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrchestrationEvent {
    /// A run started.
    Started(StartedData),

    /// A pipeline step started executing.
    StepStarted(StepData),

    /// A pipeline step finished without error.
    StepCompleted(StepData),

    /// A pipeline step failed; no later step will run.
    StepFailed(StepFailedData),

    /// The run reached a terminal step.
    Finished(FinishedData),
}

impl OrchestrationEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            OrchestrationEvent::Started(_) => "Started",
            OrchestrationEvent::StepStarted(_) => "StepStarted",
            OrchestrationEvent::StepCompleted(_) => "StepCompleted",
            OrchestrationEvent::StepFailed(_) => "StepFailed",
            OrchestrationEvent::Finished(_) => "Finished",
        }
    }

    pub fn started(internal_id: OrchestrationId) -> Self {
        OrchestrationEvent::Started(StartedData {
            internal_id,
            started_at: Utc::now(),
        })
    }

    pub fn step_started(internal_id: OrchestrationId, step: OrchestrationStep) -> Self {
        OrchestrationEvent::StepStarted(StepData { internal_id, step })
    }

    pub fn step_completed(internal_id: OrchestrationId, step: OrchestrationStep) -> Self {
        OrchestrationEvent::StepCompleted(StepData { internal_id, step })
    }

    pub fn step_failed(
        internal_id: OrchestrationId,
        step: OrchestrationStep,
        error: impl Into<String>,
    ) -> Self {
        OrchestrationEvent::StepFailed(StepFailedData {
            internal_id,
            step,
            error: error.into(),
        })
    }

    pub fn finished(
        internal_id: OrchestrationId,
        status: OrchestrationStatus,
        duration_ms: i64,
    ) -> Self {
        OrchestrationEvent::Finished(FinishedData {
            internal_id,
            status,
            duration_ms,
        })
    }
}

/// Data for the Started event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartedData {
    pub internal_id: OrchestrationId,
    pub started_at: DateTime<Utc>,
}

/// Data for step started/completed events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepData {
    pub internal_id: OrchestrationId,
    pub step: OrchestrationStep,
}

/// Data for the StepFailed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepFailedData {
    pub internal_id: OrchestrationId,
    pub step: OrchestrationStep,
    /// Error message describing the failure.
    pub error: String,
}

/// Data for the Finished event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishedData {
    pub internal_id: OrchestrationId,
    pub status: OrchestrationStatus,
    pub duration_ms: i64,
}
