//! RTP downstream gateway.
//!
//! Re-validates a payment's shape, picks a real-time settlement rail from
//! currency and amount, and calls that rail with bounded retries. Outcomes
//! are collected on a [`RoutingContext`] rather than returned as errors.

pub mod codes;
pub mod context;
pub mod error;
pub mod flow;
pub mod gateway;
pub mod rail;
pub mod route;

pub use codes::{RtpErrorCode, RtpFlag, RtpWarningCode};
pub use context::RoutingContext;
pub use error::{FlowError, RailError};
pub use flow::RtpFlow;
pub use gateway::RtpDownstreamGateway;
pub use rail::{DownstreamRail, SimulatedRail, java_string_hash};
pub use route::{RtpRoute, determine_route};
