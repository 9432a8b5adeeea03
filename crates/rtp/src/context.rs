//! Mutable state of one RTP flow invocation.

use std::collections::{BTreeMap, BTreeSet};

use common::{AuditTrail, PaymentPayload};
use serde::{Deserialize, Serialize};

use crate::codes::{RtpErrorCode, RtpFlag, RtpWarningCode};

/// Input attributes plus everything the gateway accumulates about them.
///
/// Any recorded error marks the context as failed. Warnings and flags are
/// informational only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingContext {
    attributes: PaymentPayload,
    transaction_id: Option<String>,
    audit_trail: AuditTrail,
    errors: BTreeMap<RtpErrorCode, Vec<String>>,
    warnings: BTreeMap<RtpWarningCode, Vec<String>>,
    flags: BTreeSet<RtpFlag>,
}

impl RoutingContext {
    pub fn new(attributes: PaymentPayload) -> Self {
        Self {
            attributes,
            ..Self::default()
        }
    }

    /// Creates a context that keeps the caller's transaction id.
    pub fn with_transaction_id(attributes: PaymentPayload, transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: Some(transaction_id.into()),
            ..Self::new(attributes)
        }
    }

    pub fn attributes(&self) -> &PaymentPayload {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut PaymentPayload {
        &mut self.attributes
    }

    /// The transaction id, if one was supplied or generated.
    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn set_transaction_id(&mut self, transaction_id: impl Into<String>) {
        self.transaction_id = Some(transaction_id.into());
    }

    pub fn audit_trail(&self) -> &AuditTrail {
        &self.audit_trail
    }

    pub fn audit(&mut self, message: impl Into<String>) {
        self.audit_trail.record(message);
    }

    pub fn add_error(&mut self, code: RtpErrorCode, detail: impl Into<String>) {
        self.errors.entry(code).or_default().push(detail.into());
    }

    pub fn add_warning(&mut self, code: RtpWarningCode, detail: impl Into<String>) {
        self.warnings.entry(code).or_default().push(detail.into());
    }

    pub fn add_flag(&mut self, flag: RtpFlag) {
        self.flags.insert(flag);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<RtpErrorCode, Vec<String>> {
        &self.errors
    }

    pub fn warnings(&self) -> &BTreeMap<RtpWarningCode, Vec<String>> {
        &self.warnings
    }

    pub fn flags(&self) -> &BTreeSet<RtpFlag> {
        &self.flags
    }

    pub fn has_error(&self, code: RtpErrorCode) -> bool {
        self.errors.contains_key(&code)
    }

    pub fn has_warning(&self, code: RtpWarningCode) -> bool {
        self.warnings.contains_key(&code)
    }

    pub fn has_flag(&self, flag: RtpFlag) -> bool {
        self.flags.contains(&flag)
    }
}
