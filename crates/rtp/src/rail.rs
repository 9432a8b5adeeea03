//! Settlement rail abstraction and its deterministic simulation.

use domain::Amount;

use crate::error::RailError;
use crate::route::RtpRoute;

/// A downstream settlement rail.
///
/// One call is one attempt; retries are the gateway's concern.
pub trait DownstreamRail: Send + Sync {
    fn call(&self, route: RtpRoute, amount: &Amount) -> Result<(), RailError>;
}

/// Rail whose outcome is a fixed function of route and amount.
///
/// A call fails when the 32-bit polynomial string hash (base 31, over UTF-16
/// code units) of `route + amount` is divisible by four. Repeating a call
/// with the same inputs always yields the same outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedRail;

impl SimulatedRail {
    pub fn succeeds(route: RtpRoute, amount: &Amount) -> bool {
        let key = format!("{}{}", route.as_str(), amount.to_plain_string());
        java_string_hash(&key) % 4 != 0
    }
}

impl DownstreamRail for SimulatedRail {
    fn call(&self, route: RtpRoute, amount: &Amount) -> Result<(), RailError> {
        if Self::succeeds(route, amount) {
            Ok(())
        } else {
            Err(RailError::Rejected { route })
        }
    }
}

/// `s[0]*31^(n-1) + ... + s[n-1]` over UTF-16 code units with 32-bit
/// wrapping arithmetic.
pub fn java_string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(raw: &str) -> Amount {
        Amount::parse(raw).unwrap()
    }

    #[test]
    fn test_hash_reference_values() {
        assert_eq!(java_string_hash(""), 0);
        assert_eq!(java_string_hash("hello"), 99_162_322);
        assert_eq!(java_string_hash("RTP_DOMESTIC_STANDARD10.00"), 388_776_770);
        assert_eq!(java_string_hash("RTP_EURO_CLEARING1500000.00"), 2_059_077_240);
    }

    #[test]
    fn test_simulated_outcomes() {
        let rail = SimulatedRail;
        assert!(rail.call(RtpRoute::RtpDomesticStandard, &amount("10.00")).is_ok());
        assert_eq!(
            rail.call(RtpRoute::RtpDomesticStandard, &amount("3.00")),
            Err(RailError::Rejected {
                route: RtpRoute::RtpDomesticStandard
            })
        );
        assert!(rail.call(RtpRoute::RtpEuroClearing, &amount("1500000.00")).is_err());
        assert!(rail.call(RtpRoute::RtpUkFasterPayments, &amount("2.00")).is_ok());
    }

    #[test]
    fn test_scale_changes_outcome_key() {
        // "10" and "10.00" hash differently
        assert_ne!(
            java_string_hash("RTP_DOMESTIC_STANDARD10"),
            java_string_hash("RTP_DOMESTIC_STANDARD10.00")
        );
    }

    #[test]
    fn test_outcome_is_deterministic() {
        let a = amount("99.999");
        let first = SimulatedRail::succeeds(RtpRoute::RtpDomesticStandard, &a);
        for _ in 0..10 {
            assert_eq!(SimulatedRail::succeeds(RtpRoute::RtpDomesticStandard, &a), first);
        }
    }
}
