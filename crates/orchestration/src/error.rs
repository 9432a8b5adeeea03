//! Orchestration error types.

use thiserror::Error;

use crate::step::OrchestrationStep;

/// Failures that stop an orchestration run.
///
/// These never escape [`PaymentOrchestrator::orchestrate`]; they are turned
/// into a `FAILURE` result whose message carries the display string.
///
/// [`PaymentOrchestrator::orchestrate`]: crate::PaymentOrchestrator::orchestrate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// The payload failed a validation rule.
    #[error("{0}")]
    Validation(String),

    /// The context was asked to move backwards or out of a terminal step.
    #[error("Invalid step transition from {from} to {to}")]
    InvalidTransition {
        from: OrchestrationStep,
        to: OrchestrationStep,
    },
}

impl StepError {
    pub fn validation(message: impl Into<String>) -> Self {
        StepError::Validation(message.into())
    }
}

/// Convenience type alias for step results.
pub type Result<T> = std::result::Result<T, StepError>;
