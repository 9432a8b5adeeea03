//! Exact decimal payment amounts.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AmountError;

/// A payment amount with its original scale preserved.
///
/// `"10.00"` and `"10"` compare equal but keep distinct scales, so callers
/// can detect unusual precision and render the amount exactly as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Parses a plain (`"42.50"`) or scientific (`"4.25e1"`) literal.
    ///
    /// Surrounding whitespace, digit separators and values that would need
    /// rounding to fit are rejected. Magnitudes above `Decimal::MAX` and
    /// scales beyond 28 digits do not fit and are malformed.
    pub fn parse(raw: &str) -> Result<Self, AmountError> {
        if raw.trim().is_empty() {
            return Err(AmountError::Empty);
        }
        if raw.chars().any(|c| c.is_whitespace() || c == '_') {
            return Err(AmountError::Malformed(raw.to_string()));
        }

        let parsed = if raw.contains(['e', 'E']) {
            Decimal::from_scientific(raw)
        } else {
            Decimal::from_str_exact(raw)
        };

        parsed
            .map(Self)
            .map_err(|_| AmountError::Malformed(raw.to_string()))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Number of digits after the decimal point.
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Renders the amount without exponent, keeping its scale.
    pub fn to_plain_string(&self) -> String {
        self.0.to_string()
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
