//! Domain error types.

use thiserror::Error;

/// Errors raised while parsing an amount string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The input was empty or whitespace only.
    #[error("amount is empty")]
    Empty,

    /// The input is not a plain or scientific decimal literal.
    #[error("amount is not a valid decimal: {0}")]
    Malformed(String),
}

/// A violated validation rule.
///
/// Display strings are the human-readable messages surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Amount was zero or negative.
    #[error("amount must be positive")]
    NonPositiveAmount,

    /// Amount text could not be parsed.
    #[error("{0}")]
    InvalidAmount(#[from] AmountError),

    /// Timestamp fell outside the configured processing window.
    #[error("outside of configured business hours: {hour}")]
    OutsideBusinessHours { hour: u32 },

    /// Currency is not on the allow-list.
    #[error("unsupported currency: {currency}")]
    UnsupportedCurrency { currency: String },
}
