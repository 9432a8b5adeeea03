//! FRAUD_CHECK: advisory amount screening.

use common::PaymentPayload;
use common::payload::AMOUNT;
use domain::{Amount, BasicFraudCheck, FraudOutcome};

use crate::context::OrchestrationContext;
use crate::error::{Result, StepError};
use crate::handlers::StepHandler;
use crate::step::OrchestrationStep;

/// Classifies the payment as APPROVE or REVIEW.
///
/// The decision is recorded but never stops the pipeline.
#[derive(Debug, Clone, Default)]
pub struct FraudCheckHandler {
    check: BasicFraudCheck,
}

impl FraudCheckHandler {
    pub fn new(check: BasicFraudCheck) -> Self {
        Self { check }
    }
}

impl StepHandler for FraudCheckHandler {
    fn step(&self) -> OrchestrationStep {
        OrchestrationStep::FraudCheck
    }

    fn handle(
        &self,
        payload: &mut PaymentPayload,
        context: &mut OrchestrationContext,
        messages: &mut Vec<String>,
    ) -> Result<()> {
        let amount = payload
            .get_str(AMOUNT)
            .and_then(|raw| Amount::parse(raw.trim()).ok())
            .ok_or_else(|| StepError::validation("Amount must be numeric"))?;

        let decision = self.check.classify(&amount);
        let message = match decision.outcome {
            FraudOutcome::Approve => "Fraud check result: APPROVE".to_string(),
            FraudOutcome::Review => "Fraud check result: REVIEW (high amount)".to_string(),
            FraudOutcome::Reject => format!("Fraud check result: REJECT ({})", decision.reason),
        };
        messages.push(message);
        context.put_attribute("fraudDecision", decision.outcome.as_str());
        Ok(())
    }
}
