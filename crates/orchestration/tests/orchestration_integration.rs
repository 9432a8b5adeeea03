//! Integration tests for the payment orchestration pipeline.

use common::PaymentPayload;
use common::payload::{AMOUNT, CREDITOR_ACCOUNT, CURRENCY, DEBTOR_ACCOUNT};
use orchestration::{
    InMemoryEventSink, OrchestrationEvent, OrchestrationStatus, OrchestratorSettings,
    PaymentOrchestrator,
};
use serde_json::json;

struct TestHarness {
    orchestrator: PaymentOrchestrator<InMemoryEventSink>,
    sink: InMemoryEventSink,
}

impl TestHarness {
    fn new() -> Self {
        let sink = InMemoryEventSink::new();
        Self {
            orchestrator: PaymentOrchestrator::with_sink(sink.clone()),
            sink,
        }
    }

    fn payment(amount: &str, currency: &str) -> PaymentPayload {
        PaymentPayload::new()
            .with(DEBTOR_ACCOUNT, "11111111")
            .with(CREDITOR_ACCOUNT, "22222222")
            .with(AMOUNT, amount)
            .with(CURRENCY, currency)
    }

    fn audit_lines(messages: &[String]) -> Vec<&str> {
        messages
            .iter()
            .filter_map(|m| m.split_once(" - ").map(|(_, msg)| msg))
            .collect()
    }
}

#[test]
fn test_happy_path_usd_payment() {
    let h = TestHarness::new();
    let mut payload = TestHarness::payment("10.00", "USD");

    let result = h.orchestrator.orchestrate(&mut payload);

    assert_eq!(result.status(), OrchestrationStatus::Success);
    assert!(result.has_message("Routing decided: INTERNAL_RT"));
    assert!(result.has_message("Fraud check result: APPROVE"));

    let Some(OrchestrationEvent::Started(started)) = h.sink.events().into_iter().next() else {
        panic!("first event must be Started");
    };
    let completion = format!(
        "Payment completed successfully with internalId={}",
        started.internal_id
    );
    assert!(result.messages().contains(&completion));
    assert_eq!(
        payload.get_str("msgId"),
        Some(started.internal_id.message_id().as_str())
    );
}

#[test]
fn test_eur_payment_crosses_border_on_sepa() {
    let h = TestHarness::new();
    let result = h
        .orchestrator
        .orchestrate(&mut TestHarness::payment("42.50", "EUR"));

    assert!(result.is_success());
    assert!(result.has_message("Routing decided: CROSS_BORDER"));
    assert!(result.has_message("Attribute set: route=CROSS_BORDER"));
    assert!(result.has_message("Attribute set: scheme=SEPA_INSTANT"));
}

#[test]
fn test_high_value_payment_is_reviewed_but_completes() {
    let h = TestHarness::new();
    let result = h
        .orchestrator
        .orchestrate(&mut TestHarness::payment("75000.00", "USD"));

    assert!(result.is_success());
    assert!(result.has_message("Fraud check result: REVIEW (high amount)"));
    assert!(result.has_message("Attribute set: fraudDecision=REVIEW"));
}

#[test]
fn test_missing_debtor_fails_before_enrichment() {
    let h = TestHarness::new();
    let mut payload = PaymentPayload::new()
        .with(CREDITOR_ACCOUNT, "22222222")
        .with(AMOUNT, "10.00")
        .with(CURRENCY, "USD");

    let result = h.orchestrator.orchestrate(&mut payload);

    assert_eq!(result.status(), OrchestrationStatus::Failure);
    assert!(result.has_message("Payment orchestration failed: Debtor account is required"));
    assert!(!result.has_message("Enrichment completed"));
    assert!(!result.has_message("Routing decided"));
    assert!(!result.has_message("Posted to simulated ledger"));
}

#[test]
fn test_non_numeric_amount_fails_validation() {
    let h = TestHarness::new();
    let result = h
        .orchestrator
        .orchestrate(&mut TestHarness::payment("ten", "USD"));

    assert!(!result.is_success());
    assert!(result.has_message("Payment orchestration failed: Amount must be numeric"));
}

#[test]
fn test_padded_amount_completes() {
    let h = TestHarness::new();

    for padded in [" 10.00", "10.00 "] {
        let result = h
            .orchestrator
            .orchestrate(&mut TestHarness::payment(padded, "USD"));

        assert!(result.is_success(), "{padded:?} should complete");
        assert!(result.has_message("Validation succeeded"));
        assert!(result.has_message("Fraud check result: APPROVE"));
    }
}

#[test]
fn test_non_string_amount_counts_as_missing() {
    let h = TestHarness::new();
    let mut payload = TestHarness::payment("10.00", "USD");
    payload.insert(AMOUNT, json!(10));

    let result = h.orchestrator.orchestrate(&mut payload);

    assert!(result.has_message("Payment orchestration failed: Amount is required"));
}

#[test]
fn test_event_sequence_on_success() {
    let h = TestHarness::new();
    h.orchestrator
        .orchestrate(&mut TestHarness::payment("10.00", "USD"));

    let types = h.sink.event_types();
    let mut expected = vec!["Started"];
    for _ in 0..7 {
        expected.push("StepStarted");
        expected.push("StepCompleted");
    }
    expected.push("Finished");
    assert_eq!(types, expected);

    let Some(OrchestrationEvent::Finished(finished)) = h.sink.events().pop() else {
        panic!("last event must be Finished");
    };
    assert_eq!(finished.status, OrchestrationStatus::Success);
}

#[test]
fn test_event_sequence_on_failure() {
    let h = TestHarness::new();
    h.orchestrator
        .orchestrate(&mut TestHarness::payment("1,000", "USD"));

    let events = h.sink.events();
    let failed = events
        .iter()
        .find_map(|e| match e {
            OrchestrationEvent::StepFailed(data) => Some(data),
            _ => None,
        })
        .expect("a step must fail");
    assert_eq!(failed.step.as_str(), "VALIDATE");
    assert_eq!(failed.error, "Amount must be numeric");
}

#[test]
fn test_audit_trail_follows_pipeline_order() {
    let h = TestHarness::new();
    let result = h
        .orchestrator
        .orchestrate(&mut TestHarness::payment("10.00", "USD"));

    let audit = TestHarness::audit_lines(result.messages());
    assert_eq!(audit.first(), Some(&"Context created"));
    assert!(audit[1].starts_with("Attribute set: rawRequest="));

    let transitions: Vec<&str> = audit
        .iter()
        .copied()
        .filter(|m| m.starts_with("Advancing from"))
        .collect();
    assert_eq!(
        transitions,
        vec![
            "Advancing from RECEIVE_REQUEST to VALIDATE",
            "Advancing from VALIDATE to ENRICH",
            "Advancing from ENRICH to TRANSFORM_TO_ISO20022",
            "Advancing from TRANSFORM_TO_ISO20022 to FRAUD_CHECK",
            "Advancing from FRAUD_CHECK to ROUTE",
            "Advancing from ROUTE to POST",
            "Advancing from POST to NOTIFY",
            "Advancing from NOTIFY to COMPLETE",
        ]
    );
}

#[test]
fn test_configured_channel_is_recorded() {
    let orchestrator = PaymentOrchestrator::with_settings(
        InMemoryEventSink::new(),
        OrchestratorSettings {
            channel: "REST_API".to_string(),
        },
    );
    let result = orchestrator.orchestrate(&mut TestHarness::payment("10.00", "USD"));
    assert!(result.has_message("Attribute set: channel=REST_API"));
}

#[test]
fn test_orchestrator_is_shareable_across_threads() {
    let h = TestHarness::new();
    let orchestrator = std::sync::Arc::new(h.orchestrator);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let orchestrator = orchestrator.clone();
            std::thread::spawn(move || {
                let amount = format!("{}.00", i + 1);
                orchestrator
                    .orchestrate(&mut TestHarness::payment(&amount, "USD"))
                    .is_success()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(
        h.sink
            .event_types()
            .iter()
            .filter(|t| **t == "Finished")
            .count(),
        4
    );
}
