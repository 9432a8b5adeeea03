//! VALIDATE: required fields and numeric amount.

use common::PaymentPayload;
use common::payload::{AMOUNT, CREDITOR_ACCOUNT, DEBTOR_ACCOUNT};
use domain::Amount;

use crate::context::OrchestrationContext;
use crate::error::{Result, StepError};
use crate::handlers::StepHandler;
use crate::step::OrchestrationStep;

/// Requires non-blank debtor and creditor accounts and a decimal amount.
///
/// A field holding a non-string value counts as missing. Spaces around the
/// amount are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateHandler;

impl StepHandler for ValidateHandler {
    fn step(&self) -> OrchestrationStep {
        OrchestrationStep::Validate
    }

    fn handle(
        &self,
        payload: &mut PaymentPayload,
        context: &mut OrchestrationContext,
        messages: &mut Vec<String>,
    ) -> Result<()> {
        require(payload, DEBTOR_ACCOUNT, "Debtor account is required")?;
        require(payload, CREDITOR_ACCOUNT, "Creditor account is required")?;
        let amount = require(payload, AMOUNT, "Amount is required")?;
        Amount::parse(amount.trim())
            .map_err(|_| StepError::validation("Amount must be numeric"))?;

        context.put_attribute("validated", true);
        messages.push("Validation succeeded".to_string());
        Ok(())
    }
}

fn require<'a>(payload: &'a PaymentPayload, field: &str, message: &str) -> Result<&'a str> {
    payload
        .get_str(field)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| StepError::validation(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> PaymentPayload {
        PaymentPayload::new()
            .with(DEBTOR_ACCOUNT, "11111111")
            .with(CREDITOR_ACCOUNT, "22222222")
            .with(AMOUNT, "10.00")
    }

    fn run(mut payload: PaymentPayload) -> (Result<()>, OrchestrationContext, Vec<String>) {
        let mut ctx = OrchestrationContext::new();
        let mut messages = Vec::new();
        let result = ValidateHandler.handle(&mut payload, &mut ctx, &mut messages);
        (result, ctx, messages)
    }

    #[test]
    fn test_valid_payload() {
        let (result, ctx, messages) = run(valid());
        assert!(result.is_ok());
        assert_eq!(ctx.attribute("validated"), Some(&json!(true)));
        assert_eq!(messages, vec!["Validation succeeded"]);
    }

    #[test]
    fn test_missing_debtor() {
        let payload = PaymentPayload::new()
            .with(CREDITOR_ACCOUNT, "22222222")
            .with(AMOUNT, "10.00");
        let (result, _, messages) = run(payload);
        assert_eq!(result.unwrap_err().to_string(), "Debtor account is required");
        assert!(messages.is_empty());
    }

    #[test]
    fn test_blank_creditor() {
        let (result, ..) = run(valid().with(CREDITOR_ACCOUNT, "   "));
        assert_eq!(result.unwrap_err().to_string(), "Creditor account is required");
    }

    #[test]
    fn test_missing_amount() {
        let (result, ..) = run(valid().with(AMOUNT, ""));
        assert_eq!(result.unwrap_err().to_string(), "Amount is required");
    }

    #[test]
    fn test_non_numeric_amount() {
        let (result, ctx, _) = run(valid().with(AMOUNT, "ten dollars"));
        assert_eq!(result.unwrap_err(), StepError::validation("Amount must be numeric"));
        assert!(ctx.attribute("validated").is_none());
    }

    #[test]
    fn test_padded_amount_is_numeric() {
        for padded in [" 10.00", "10.00 ", "\t42.50\n"] {
            let (result, ctx, _) = run(valid().with(AMOUNT, padded));
            assert!(result.is_ok(), "{padded:?} should validate");
            assert_eq!(ctx.attribute("validated"), Some(&json!(true)));
        }
    }

    #[test]
    fn test_inner_space_is_not_numeric() {
        let (result, ..) = run(valid().with(AMOUNT, "10 000"));
        assert_eq!(result.unwrap_err().to_string(), "Amount must be numeric");
    }

    #[test]
    fn test_non_string_account_counts_as_missing() {
        let (result, ..) = run(valid().with(DEBTOR_ACCOUNT, json!(11111111)));
        assert_eq!(result.unwrap_err().to_string(), "Debtor account is required");
    }

    #[test]
    fn test_debtor_checked_before_creditor() {
        let (result, ..) = run(PaymentPayload::new());
        assert_eq!(result.unwrap_err().to_string(), "Debtor account is required");
    }
}
