//! Payment orchestration pipeline.
//!
//! A [`PaymentOrchestrator`] pushes one payment payload through a fixed
//! sequence of steps, each handled by a [`StepHandler`]:
//! 1. Validate required fields
//! 2. Enrich with channel and receipt time
//! 3. Transform into an ISO 20022 inspired message
//! 4. Fraud check (advisory)
//! 5. Route
//! 6. Post to the ledger (simulated)
//! 7. Notify parties (simulated)
//!
//! Every transition and attribute write lands in the run's audit trail. The
//! first failing step moves the run to `ERROR` and no later step runs; the
//! caller always receives an [`OrchestrationResult`], never an `Err`.

pub mod context;
pub mod error;
pub mod events;
pub mod handlers;
pub mod orchestrator;
pub mod result;
pub mod sink;
pub mod step;

pub use context::OrchestrationContext;
pub use error::StepError;
pub use events::OrchestrationEvent;
pub use handlers::StepHandler;
pub use orchestrator::{OrchestratorSettings, PaymentOrchestrator};
pub use result::{OrchestrationResult, OrchestrationStatus};
pub use sink::{EventSink, InMemoryEventSink, TracingEventSink};
pub use step::OrchestrationStep;
