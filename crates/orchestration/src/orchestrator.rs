//! Step sequencer driving a payment through the pipeline.

use chrono::Utc;
use common::PaymentPayload;

use crate::context::OrchestrationContext;
use crate::error::Result;
use crate::events::OrchestrationEvent;
use crate::handlers::enrich::DEFAULT_CHANNEL;
use crate::handlers::{self, StepHandler};
use crate::result::{OrchestrationResult, OrchestrationStatus};
use crate::sink::{EventSink, TracingEventSink};
use crate::step::OrchestrationStep;

/// Tunables for a [`PaymentOrchestrator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorSettings {
    /// Channel tag stamped on every payment by the ENRICH step.
    pub channel: String,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
        }
    }
}

/// Drives a payment through VALIDATE → ENRICH → TRANSFORM_TO_ISO20022 →
/// FRAUD_CHECK → ROUTE → POST → NOTIFY → COMPLETE.
///
/// Each call owns a fresh [`OrchestrationContext`]; the orchestrator itself
/// holds no per-payment state and can be shared across threads.
pub struct PaymentOrchestrator<S = TracingEventSink>
where
    S: EventSink,
{
    sink: S,
    handlers: Vec<Box<dyn StepHandler>>,
}

impl PaymentOrchestrator<TracingEventSink> {
    /// Creates an orchestrator that reports events through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(TracingEventSink)
    }
}

impl Default for PaymentOrchestrator<TracingEventSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> PaymentOrchestrator<S>
where
    S: EventSink,
{
    pub fn with_sink(sink: S) -> Self {
        Self::with_settings(sink, OrchestratorSettings::default())
    }

    pub fn with_settings(sink: S, settings: OrchestratorSettings) -> Self {
        Self {
            sink,
            handlers: handlers::pipeline(&settings.channel),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs the full pipeline for one payment.
    ///
    /// Handlers may add derived fields to `payload`. Failures never escape:
    /// the first failing step yields a `FAILURE` result carrying the reason
    /// and the audit trail.
    #[tracing::instrument(skip_all, fields(internal_id))]
    pub fn orchestrate(&self, payload: &mut PaymentPayload) -> OrchestrationResult {
        metrics::counter!("payment_orchestrations_total").increment(1);
        let started_at = Utc::now();
        let mut messages = Vec::new();

        let mut context = OrchestrationContext::new();
        let internal_id = context.internal_id();
        tracing::Span::current().record("internal_id", tracing::field::display(internal_id));
        self.sink.emit(&OrchestrationEvent::started(internal_id));
        context.put_attribute("rawRequest", payload.to_value());

        let (status, completed_at) = match self.run_pipeline(payload, &mut context, &mut messages) {
            Ok(()) => {
                messages.push(format!(
                    "Payment completed successfully with internalId={internal_id}"
                ));
                messages.extend(context.audit_trail().to_lines());
                metrics::counter!("payment_orchestrations_completed").increment(1);
                (OrchestrationStatus::Success, Utc::now())
            }
            Err(e) => {
                context.fail();
                messages.push(format!("Payment orchestration failed: {e}"));
                messages.extend(context.audit_trail().to_lines());
                metrics::counter!("payment_orchestrations_failed").increment(1);
                (OrchestrationStatus::Failure, Utc::now())
            }
        };

        let result = OrchestrationResult::new(status, started_at, completed_at, messages);
        metrics::histogram!("payment_orchestration_duration_seconds")
            .record(result.duration().num_microseconds().unwrap_or(0) as f64 / 1_000_000.0);
        self.sink.emit(&OrchestrationEvent::finished(
            internal_id,
            status,
            result.duration_millis(),
        ));
        result
    }

    /// Executes every handler in order, stopping at the first error.
    fn run_pipeline(
        &self,
        payload: &mut PaymentPayload,
        context: &mut OrchestrationContext,
        messages: &mut Vec<String>,
    ) -> Result<()> {
        let internal_id = context.internal_id();

        for handler in &self.handlers {
            let step = handler.step();
            context.advance_to(step)?;
            tracing::info!(%internal_id, %step, "orchestration step started");
            self.sink
                .emit(&OrchestrationEvent::step_started(internal_id, step));

            if let Err(e) = handler.handle(payload, context, messages) {
                self.sink
                    .emit(&OrchestrationEvent::step_failed(internal_id, step, e.to_string()));
                return Err(e);
            }

            self.sink
                .emit(&OrchestrationEvent::step_completed(internal_id, step));
        }

        context.advance_to(OrchestrationStep::Complete)
    }
}
