//! Error, warning and flag codes accumulated by the gateway.

use serde::{Deserialize, Serialize};

/// Conditions that mark a flow as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RtpErrorCode {
    InvalidAmountFormat,
    NonPositiveAmount,
    DownstreamFailure,
}

impl RtpErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RtpErrorCode::InvalidAmountFormat => "INVALID_AMOUNT_FORMAT",
            RtpErrorCode::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            RtpErrorCode::DownstreamFailure => "DOWNSTREAM_FAILURE",
        }
    }
}

impl std::fmt::Display for RtpErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recorded anomalies that never halt a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RtpWarningCode {
    MissingParty,
    UnsupportedCurrency,
    SameAccount,
    UnusualDecimals,
}

impl RtpWarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RtpWarningCode::MissingParty => "MISSING_PARTY",
            RtpWarningCode::UnsupportedCurrency => "UNSUPPORTED_CURRENCY",
            RtpWarningCode::SameAccount => "SAME_ACCOUNT",
            RtpWarningCode::UnusualDecimals => "UNUSUAL_DECIMALS",
        }
    }
}

impl std::fmt::Display for RtpWarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory annotations for downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RtpFlag {
    /// Amount above 1,000,000.
    HighValueReview,
    /// Amount above 50,000.
    LargeValueMetric,
}

impl RtpFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RtpFlag::HighValueReview => "HIGH_VALUE_REVIEW",
            RtpFlag::LargeValueMetric => "LARGE_VALUE_METRIC",
        }
    }
}

impl std::fmt::Display for RtpFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
