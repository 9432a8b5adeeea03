//! Per-step business logic.
//!
//! Each handler owns exactly one [`OrchestrationStep`] of the pipeline. It
//! may read and extend the payload, write attributes to the context and
//! push human-readable progress messages.

pub mod enrich;
pub mod fraud_check;
pub mod notify;
pub mod post;
pub mod route;
pub mod transform;
pub mod validate;

use common::PaymentPayload;

use crate::context::OrchestrationContext;
use crate::error::Result;
use crate::step::OrchestrationStep;

pub use enrich::EnrichHandler;
pub use fraud_check::FraudCheckHandler;
pub use notify::NotifyHandler;
pub use post::PostHandler;
pub use route::{CROSS_BORDER, RouteHandler, settlement_route};
pub use transform::TransformHandler;
pub use validate::ValidateHandler;

/// Business logic for one pipeline step.
pub trait StepHandler: Send + Sync {
    /// The step this handler executes.
    fn step(&self) -> OrchestrationStep;

    /// Runs the step. An `Err` stops the pipeline.
    fn handle(
        &self,
        payload: &mut PaymentPayload,
        context: &mut OrchestrationContext,
        messages: &mut Vec<String>,
    ) -> Result<()>;
}

/// Builds the fixed handler sequence, matching
/// [`OrchestrationStep::PIPELINE`].
pub fn pipeline(channel: &str) -> Vec<Box<dyn StepHandler>> {
    vec![
        Box::new(ValidateHandler),
        Box::new(EnrichHandler::new(channel)),
        Box::new(TransformHandler),
        Box::new(FraudCheckHandler::default()),
        Box::new(RouteHandler::default()),
        Box::new(PostHandler),
        Box::new(NotifyHandler),
    ]
}
