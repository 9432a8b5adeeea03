//! NOTIFY: simulated party notification.

use common::PaymentPayload;

use crate::context::OrchestrationContext;
use crate::error::Result;
use crate::handlers::StepHandler;
use crate::step::OrchestrationStep;

#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyHandler;

impl StepHandler for NotifyHandler {
    fn step(&self) -> OrchestrationStep {
        OrchestrationStep::Notify
    }

    fn handle(
        &self,
        _payload: &mut PaymentPayload,
        _context: &mut OrchestrationContext,
        messages: &mut Vec<String>,
    ) -> Result<()> {
        messages.push("Notifications sent to debtor and creditor (simulated)".to_string());
        Ok(())
    }
}
