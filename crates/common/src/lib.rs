//! Shared types for the payment orchestration workspace.
//!
//! - [`OrchestrationId`]: identity of one orchestration run
//! - [`AuditTrail`]: append-only, timestamped progress log
//! - [`PaymentPayload`]: caller-supplied payment fields

pub mod audit;
pub mod id;
pub mod payload;

pub use audit::{AuditEntry, AuditTrail};
pub use id::OrchestrationId;
pub use payload::PaymentPayload;
