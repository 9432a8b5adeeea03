//! ENRICH: stamps channel and receipt time.

use chrono::{SecondsFormat, Utc};
use common::PaymentPayload;

use crate::context::OrchestrationContext;
use crate::error::Result;
use crate::handlers::StepHandler;
use crate::step::OrchestrationStep;

/// Channel tag used when none is configured.
pub const DEFAULT_CHANNEL: &str = "CLI_DEMO";

#[derive(Debug, Clone)]
pub struct EnrichHandler {
    channel: String,
}

impl EnrichHandler {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

impl Default for EnrichHandler {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL)
    }
}

impl StepHandler for EnrichHandler {
    fn step(&self) -> OrchestrationStep {
        OrchestrationStep::Enrich
    }

    fn handle(
        &self,
        _payload: &mut PaymentPayload,
        context: &mut OrchestrationContext,
        messages: &mut Vec<String>,
    ) -> Result<()> {
        context.put_attribute("channel", self.channel.as_str());
        context.put_attribute(
            "receivedAt",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        messages.push("Enrichment completed".to_string());
        Ok(())
    }
}
