//! TRANSFORM_TO_ISO20022: builds the canonical message.

use common::PaymentPayload;
use common::payload::{AMOUNT, CREDITOR_ACCOUNT, CURRENCY, DEBTOR_ACCOUNT};
use serde_json::{Map, Value};

use crate::context::OrchestrationContext;
use crate::error::Result;
use crate::handlers::StepHandler;
use crate::step::OrchestrationStep;

/// Payload field receiving the canonical message id.
pub const MSG_ID: &str = "msgId";

/// Currency assumed when the payload carries none.
pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Copy, Default)]
pub struct TransformHandler;

impl StepHandler for TransformHandler {
    fn step(&self) -> OrchestrationStep {
        OrchestrationStep::TransformToIso20022
    }

    fn handle(
        &self,
        payload: &mut PaymentPayload,
        context: &mut OrchestrationContext,
        messages: &mut Vec<String>,
    ) -> Result<()> {
        let msg_id = context.internal_id().message_id();

        let mut iso = Map::new();
        iso.insert(MSG_ID.to_string(), Value::String(msg_id.clone()));
        for field in [DEBTOR_ACCOUNT, CREDITOR_ACCOUNT, AMOUNT] {
            iso.insert(
                field.to_string(),
                payload.get(field).cloned().unwrap_or(Value::Null),
            );
        }
        iso.insert(
            CURRENCY.to_string(),
            payload
                .get(CURRENCY)
                .cloned()
                .unwrap_or_else(|| Value::from(DEFAULT_CURRENCY)),
        );

        payload.insert(MSG_ID, msg_id);
        context.put_attribute("iso20022Message", Value::Object(iso));
        messages.push("Transformed into ISO 20022 inspired structure".to_string());
        Ok(())
    }
}
