//! Orchestration step state machine.

use serde::{Deserialize, Serialize};

/// The canonical steps of the real-time payment lifecycle.
///
/// Progression is forward-only, in declaration order:
/// ```text
/// RECEIVE_REQUEST ─► VALIDATE ─► ENRICH ─► TRANSFORM_TO_ISO20022 ─► FRAUD_CHECK
///        ─► ROUTE ─► POST ─► NOTIFY ─► COMPLETE
///
/// any non-terminal step ─► ERROR
/// ```
/// `COMPLETE` and `ERROR` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrchestrationStep {
    #[default]
    ReceiveRequest,
    Authenticate,
    Validate,
    Enrich,
    #[serde(rename = "TRANSFORM_TO_ISO20022")]
    TransformToIso20022,
    FraudCheck,
    Route,
    Post,
    Notify,
    Complete,
    Error,
}

impl OrchestrationStep {
    /// Steps executed by the sequencer, in order.
    pub const PIPELINE: [OrchestrationStep; 7] = [
        OrchestrationStep::Validate,
        OrchestrationStep::Enrich,
        OrchestrationStep::TransformToIso20022,
        OrchestrationStep::FraudCheck,
        OrchestrationStep::Route,
        OrchestrationStep::Post,
        OrchestrationStep::Notify,
    ];

    /// Returns true if this is a terminal step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrchestrationStep::Complete | OrchestrationStep::Error)
    }

    /// Returns true if a run sitting at `self` may move to `next`.
    pub fn can_advance_to(&self, next: OrchestrationStep) -> bool {
        if self.is_terminal() {
            return false;
        }
        next == OrchestrationStep::Error || next > *self
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrchestrationStep::ReceiveRequest => "RECEIVE_REQUEST",
            OrchestrationStep::Authenticate => "AUTHENTICATE",
            OrchestrationStep::Validate => "VALIDATE",
            OrchestrationStep::Enrich => "ENRICH",
            OrchestrationStep::TransformToIso20022 => "TRANSFORM_TO_ISO20022",
            OrchestrationStep::FraudCheck => "FRAUD_CHECK",
            OrchestrationStep::Route => "ROUTE",
            OrchestrationStep::Post => "POST",
            OrchestrationStep::Notify => "NOTIFY",
            OrchestrationStep::Complete => "COMPLETE",
            OrchestrationStep::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for OrchestrationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
