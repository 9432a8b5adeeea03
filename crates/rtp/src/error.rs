use thiserror::Error;

use crate::route::RtpRoute;

/// Failure reported by a settlement rail for a single call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RailError {
    #[error("downstream rejected call on route {route}")]
    Rejected { route: RtpRoute },

    #[error("downstream unavailable on route {route}: {reason}")]
    Unavailable { route: RtpRoute, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Unknown RTP flow: {0}")]
    Unknown(String),
}
