//! Named RTP flows.
//!
//! All flows run the same gateway sequence; the label only appears in the
//! opening, halting and closing audit entries.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RtpFlow {
    ValidateAndRoutePayment,
    EnrichAndNormalizeInstruction,
    PerformRiskAndComplianceChecks,
    ExecuteDownstreamPosting,
    HandleAsyncNotificationFlow,
    SimulateExceptionScenario,
    RunEndToEndSimulation,
    ApplyOperationalMetrics,
}

impl RtpFlow {
    pub const ALL: [RtpFlow; 8] = [
        RtpFlow::ValidateAndRoutePayment,
        RtpFlow::EnrichAndNormalizeInstruction,
        RtpFlow::PerformRiskAndComplianceChecks,
        RtpFlow::ExecuteDownstreamPosting,
        RtpFlow::HandleAsyncNotificationFlow,
        RtpFlow::SimulateExceptionScenario,
        RtpFlow::RunEndToEndSimulation,
        RtpFlow::ApplyOperationalMetrics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RtpFlow::ValidateAndRoutePayment => "validateAndRoutePayment",
            RtpFlow::EnrichAndNormalizeInstruction => "enrichAndNormalizeInstruction",
            RtpFlow::PerformRiskAndComplianceChecks => "performRiskAndComplianceChecks",
            RtpFlow::ExecuteDownstreamPosting => "executeDownstreamPosting",
            RtpFlow::HandleAsyncNotificationFlow => "handleAsyncNotificationFlow",
            RtpFlow::SimulateExceptionScenario => "simulateExceptionScenario",
            RtpFlow::RunEndToEndSimulation => "runEndToEndSimulation",
            RtpFlow::ApplyOperationalMetrics => "applyOperationalMetrics",
        }
    }
}

impl std::fmt::Display for RtpFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the camelCase label or its snake_case spelling.
impl FromStr for RtpFlow {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| *c != '_').collect();
        RtpFlow::ALL
            .into_iter()
            .find(|flow| flow.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| FlowError::Unknown(s.to_string()))
    }
}
