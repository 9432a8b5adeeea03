//! Threshold-based fraud screening.

use common::PaymentPayload;
use common::payload::AMOUNT;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Amount above which a payment is routed to manual review.
pub const DEFAULT_REVIEW_THRESHOLD: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Outcome of a fraud screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FraudOutcome {
    Approve,
    Review,
    Reject,
}

impl FraudOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            FraudOutcome::Approve => "APPROVE",
            FraudOutcome::Review => "REVIEW",
            FraudOutcome::Reject => "REJECT",
        }
    }
}

impl std::fmt::Display for FraudOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A screening outcome together with the reason it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudDecision {
    pub outcome: FraudOutcome,
    pub reason: String,
}

impl FraudDecision {
    fn new(outcome: FraudOutcome, reason: &str) -> Self {
        Self {
            outcome,
            reason: reason.to_string(),
        }
    }
}

/// A fraud or risk check over a raw payment payload.
pub trait FraudCheck: Send + Sync {
    fn evaluate(&self, payment: &PaymentPayload) -> FraudDecision;
}

/// Flags amounts above a review threshold and rejects amounts above a
/// reject threshold or amounts that cannot be read at all.
///
/// Holds no mutable state: the same input always yields the same decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicFraudCheck {
    review_threshold: Decimal,
    reject_threshold: Option<Decimal>,
}

impl BasicFraudCheck {
    pub fn new(review_threshold: Decimal, reject_threshold: Decimal) -> Self {
        Self {
            review_threshold,
            reject_threshold: Some(reject_threshold),
        }
    }

    /// A check that never rejects on amount, only approves or reviews.
    pub fn review_only(review_threshold: Decimal) -> Self {
        Self {
            review_threshold,
            reject_threshold: None,
        }
    }

    pub fn review_threshold(&self) -> Decimal {
        self.review_threshold
    }

    pub fn reject_threshold(&self) -> Option<Decimal> {
        self.reject_threshold
    }

    /// Classifies an already parsed amount.
    pub fn classify(&self, amount: &Amount) -> FraudDecision {
        let value = amount.as_decimal();
        if self.reject_threshold.is_some_and(|reject| value > reject) {
            return FraudDecision::new(FraudOutcome::Reject, "Amount exceeds reject threshold");
        }
        if value > self.review_threshold {
            return FraudDecision::new(FraudOutcome::Review, "Amount exceeds review threshold");
        }
        FraudDecision::new(FraudOutcome::Approve, "Amount within normal range")
    }
}

impl Default for BasicFraudCheck {
    fn default() -> Self {
        Self::review_only(DEFAULT_REVIEW_THRESHOLD)
    }
}

impl FraudCheck for BasicFraudCheck {
    fn evaluate(&self, payment: &PaymentPayload) -> FraudDecision {
        let Some(raw) = payment.get_str(AMOUNT) else {
            return FraudDecision::new(FraudOutcome::Reject, "Amount missing or not a string");
        };
        match Amount::parse(raw) {
            Ok(amount) => self.classify(&amount),
            Err(_) => FraudDecision::new(FraudOutcome::Reject, "Amount is not numeric"),
        }
    }
}
