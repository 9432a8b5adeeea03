pub mod flows;
pub mod health;
pub mod metrics;
pub mod payments;

use orchestration::{PaymentOrchestrator, TracingEventSink};
use rtp::RtpDownstreamGateway;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub orchestrator: PaymentOrchestrator<TracingEventSink>,
    pub gateway: RtpDownstreamGateway,
}
