//! Rail selection by currency and amount.

use domain::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amount above which USD payments leave the standard domestic rail.
pub const DOMESTIC_HIGH_VALUE_THRESHOLD: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Real-time settlement rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RtpRoute {
    RtpDomesticStandard,
    RtpDomesticHighValue,
    RtpEuroClearing,
    RtpUkFasterPayments,
    RtpGenericFallback,
}

impl RtpRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            RtpRoute::RtpDomesticStandard => "RTP_DOMESTIC_STANDARD",
            RtpRoute::RtpDomesticHighValue => "RTP_DOMESTIC_HIGH_VALUE",
            RtpRoute::RtpEuroClearing => "RTP_EURO_CLEARING",
            RtpRoute::RtpUkFasterPayments => "RTP_UK_FASTER_PAYMENTS",
            RtpRoute::RtpGenericFallback => "RTP_GENERIC_FALLBACK",
        }
    }
}

impl std::fmt::Display for RtpRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the rail for a payment. Currency codes match exactly.
pub fn determine_route(currency: &str, amount: &Amount) -> RtpRoute {
    match currency {
        "USD" if amount.as_decimal() <= DOMESTIC_HIGH_VALUE_THRESHOLD => {
            RtpRoute::RtpDomesticStandard
        }
        "USD" => RtpRoute::RtpDomesticHighValue,
        "EUR" => RtpRoute::RtpEuroClearing,
        "GBP" => RtpRoute::RtpUkFasterPayments,
        _ => RtpRoute::RtpGenericFallback,
    }
}
