//! POST: simulated ledger posting.

use common::PaymentPayload;

use crate::context::OrchestrationContext;
use crate::error::Result;
use crate::handlers::StepHandler;
use crate::step::OrchestrationStep;

#[derive(Debug, Clone, Copy, Default)]
pub struct PostHandler;

impl StepHandler for PostHandler {
    fn step(&self) -> OrchestrationStep {
        OrchestrationStep::Post
    }

    fn handle(
        &self,
        _payload: &mut PaymentPayload,
        context: &mut OrchestrationContext,
        messages: &mut Vec<String>,
    ) -> Result<()> {
        let ledger_id = context.internal_id().ledger_id();
        context.put_attribute("ledgerId", ledger_id.as_str());
        messages.push(format!("Posted to simulated ledger with id={ledger_id}"));
        Ok(())
    }
}
