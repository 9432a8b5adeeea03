//! Immutable outcome of an orchestration run.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Overall outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrchestrationStatus {
    Success,
    Failure,
}

impl OrchestrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrchestrationStatus::Success => "SUCCESS",
            OrchestrationStatus::Failure => "FAILURE",
        }
    }
}

impl std::fmt::Display for OrchestrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of a finished run: status, timing and every progress message.
///
/// Messages hold the handler messages first, followed by the full audit
/// trail of the run. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationResult {
    status: OrchestrationStatus,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    messages: Vec<String>,
}

impl OrchestrationResult {
    pub fn new(
        status: OrchestrationStatus,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        messages: Vec<String>,
    ) -> Self {
        Self {
            status,
            started_at,
            completed_at,
            messages,
        }
    }

    pub fn status(&self) -> OrchestrationStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == OrchestrationStatus::Success
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }

    pub fn duration_millis(&self) -> i64 {
        self.duration().num_milliseconds()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns true if any message contains `needle`.
    pub fn has_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl std::fmt::Display for OrchestrationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OrchestrationResult {{ status: {}, started_at: {}, completed_at: {}, messages: {} }}",
            self.status,
            self.started_at,
            self.completed_at,
            self.messages.len()
        )
    }
}
