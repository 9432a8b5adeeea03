//! Fail-fast payment validation rules.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use common::PaymentPayload;
use common::payload::{AMOUNT, CURRENCY};

use crate::amount::Amount;
use crate::error::ValidationError;

/// Currencies accepted by the real-time rails.
pub const SUPPORTED_CURRENCIES: [&str; 4] = ["USD", "EUR", "GBP", "INR"];

/// First hour (inclusive) of the processing window.
pub const BUSINESS_HOURS_START: u32 = 6;
/// Last hour (inclusive) of the processing window.
pub const BUSINESS_HOURS_END: u32 = 22;

/// Stateless validators, each failing on the first violated rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct CutoffTimeValidator;

impl CutoffTimeValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_required(&self, field: &str, value: Option<&str>) -> Result<(), ValidationError> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(()),
            _ => Err(ValidationError::Required {
                field: field.to_string(),
            }),
        }
    }

    pub fn validate_positive_amount(&self, amount: Option<&Amount>) -> Result<(), ValidationError> {
        let amount = amount.ok_or_else(|| ValidationError::Required {
            field: AMOUNT.to_string(),
        })?;
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }
        Ok(())
    }

    /// Rejects timestamps whose local hour in `zone` is outside 06:00-22:59.
    ///
    /// A missing timestamp passes.
    pub fn validate_business_hours<Tz: TimeZone>(
        &self,
        timestamp: Option<DateTime<Utc>>,
        zone: &Tz,
    ) -> Result<(), ValidationError> {
        let Some(timestamp) = timestamp else {
            return Ok(());
        };
        let hour = timestamp.with_timezone(zone).hour();
        if !(BUSINESS_HOURS_START..=BUSINESS_HOURS_END).contains(&hour) {
            return Err(ValidationError::OutsideBusinessHours { hour });
        }
        Ok(())
    }

    pub fn validate_currency(&self, currency: &str, allowed: &[&str]) -> Result<(), ValidationError> {
        if !allowed.contains(&currency) {
            return Err(ValidationError::UnsupportedCurrency {
                currency: currency.to_string(),
            });
        }
        Ok(())
    }

    /// Checks amount and currency, reporting one `"<field>: <verdict>"`
    /// line per field instead of stopping at the first failure.
    pub fn validate_all(&self, payment: &PaymentPayload) -> Vec<String> {
        let mut report = Vec::with_capacity(2);

        match payment.get_str(AMOUNT) {
            Some(raw) => {
                let verdict = Amount::parse(raw)
                    .map_err(ValidationError::from)
                    .and_then(|amount| self.validate_positive_amount(Some(&amount)));
                match verdict {
                    Ok(()) => report.push("amount: OK".to_string()),
                    Err(e) => report.push(format!("amount: {e}")),
                }
            }
            None => report.push("amount: missing or not a String".to_string()),
        }

        match payment.get_str(CURRENCY) {
            Some(currency) => match self.validate_required(CURRENCY, Some(currency)) {
                Ok(()) => report.push("currency: OK".to_string()),
                Err(e) => report.push(format!("currency: {e}")),
            },
            None => report.push("currency: missing or not a String".to_string()),
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn validator() -> CutoffTimeValidator {
        CutoffTimeValidator::new()
    }

    #[test]
    fn test_required_field() {
        assert!(validator().validate_required("debtorAccount", Some("123")).is_ok());

        let err = validator().validate_required("debtorAccount", Some("  ")).unwrap_err();
        assert_eq!(err.to_string(), "debtorAccount is required");

        let err = validator().validate_required("currency", None).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "currency".into() });
    }

    #[test]
    fn test_positive_amount() {
        let v = validator();
        assert!(v.validate_positive_amount(Some(&Amount::parse("1.00").unwrap())).is_ok());
        assert_eq!(
            v.validate_positive_amount(Some(&Amount::parse("0").unwrap())),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(
            v.validate_positive_amount(Some(&Amount::parse("-1.00").unwrap())),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(
            v.validate_positive_amount(None).unwrap_err().to_string(),
            "amount is required"
        );
    }

    #[test]
    fn test_business_hours_in_utc() {
        let early: DateTime<Utc> = "2024-01-01T02:00:00Z".parse().unwrap();
        let err = validator().validate_business_hours(Some(early), &Utc).unwrap_err();
        assert_eq!(err.to_string(), "outside of configured business hours: 2");

        let noon: DateTime<Utc> = "2024-01-01T12:00:00Z".parse().unwrap();
        assert!(validator().validate_business_hours(Some(noon), &Utc).is_ok());

        let late: DateTime<Utc> = "2024-01-01T22:59:00Z".parse().unwrap();
        assert!(validator().validate_business_hours(Some(late), &Utc).is_ok());

        let closed: DateTime<Utc> = "2024-01-01T23:00:00Z".parse().unwrap();
        assert!(validator().validate_business_hours(Some(closed), &Utc).is_err());
    }

    #[test]
    fn test_business_hours_respects_zone() {
        // 02:00 UTC is 07:30 in UTC+05:30.
        let early: DateTime<Utc> = "2024-01-01T02:00:00Z".parse().unwrap();
        let india = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert!(validator().validate_business_hours(Some(early), &india).is_ok());
    }

    #[test]
    fn test_business_hours_absent_timestamp_passes() {
        assert!(validator().validate_business_hours(None, &Utc).is_ok());
    }

    #[test]
    fn test_currency_allow_list() {
        assert!(validator().validate_currency("EUR", &SUPPORTED_CURRENCIES).is_ok());
        let err = validator().validate_currency("JPY", &SUPPORTED_CURRENCIES).unwrap_err();
        assert_eq!(err.to_string(), "unsupported currency: JPY");
    }

    #[test]
    fn test_validate_all_reports_each_field() {
        let payment = PaymentPayload::new()
            .with(AMOUNT, "not-a-number")
            .with(CURRENCY, "");

        let report = validator().validate_all(&payment);
        assert_eq!(report.len(), 2);
        assert!(report[0].starts_with("amount:"));
        assert_ne!(report[0], "amount: OK");
        assert_eq!(report[1], "currency: currency is required");
    }

    #[test]
    fn test_validate_all_ok() {
        let payment = PaymentPayload::new()
            .with(AMOUNT, "25.00")
            .with(CURRENCY, "USD");
        assert_eq!(
            validator().validate_all(&payment),
            vec!["amount: OK".to_string(), "currency: OK".to_string()]
        );
    }

    #[test]
    fn test_validate_all_missing_fields() {
        let report = validator().validate_all(&PaymentPayload::new());
        assert_eq!(
            report,
            vec![
                "amount: missing or not a String".to_string(),
                "currency: missing or not a String".to_string()
            ]
        );
    }

    #[test]
    fn test_validate_all_non_positive() {
        let payment = PaymentPayload::new()
            .with(AMOUNT, "0.00")
            .with(CURRENCY, "USD");
        assert_eq!(validator().validate_all(&payment)[0], "amount: amount must be positive");
    }
}
