//! Currency to clearing-scheme routing table.

use std::collections::BTreeMap;

/// Scheme for domestic USD real-time transfers.
pub const INTERNAL_RT: &str = "INTERNAL_RT";
/// Scheme for euro instant credit transfers.
pub const SEPA_INSTANT: &str = "SEPA_INSTANT";
/// Scheme used when no rule matches.
pub const DEFAULT_ROUTE: &str = "DEFAULT_ROUTE";

/// Maps currency codes to clearing schemes with a fallback.
///
/// Lookups are exact and case-sensitive. Rules can be added or overridden;
/// a lookup never mutates the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTable {
    rules: BTreeMap<String, String>,
    fallback: String,
}

impl RoutingTable {
    /// Creates a table with no rules.
    pub fn empty(fallback: impl Into<String>) -> Self {
        Self {
            rules: BTreeMap::new(),
            fallback: fallback.into(),
        }
    }

    pub fn route_by_currency(&self, currency: &str) -> &str {
        self.rules
            .get(currency)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Adds a rule, replacing any existing rule for the same currency.
    pub fn add_rule(&mut self, currency: impl Into<String>, route: impl Into<String>) {
        self.rules.insert(currency.into(), route.into());
    }

    /// Builder-style [`add_rule`](Self::add_rule).
    pub fn with_rule(mut self, currency: impl Into<String>, route: impl Into<String>) -> Self {
        self.add_rule(currency, route);
        self
    }

    pub fn rules(&self) -> &BTreeMap<String, String> {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for RoutingTable {
    fn default() -> Self {
        Self::empty(DEFAULT_ROUTE)
            .with_rule("USD", INTERNAL_RT)
            .with_rule("EUR", SEPA_INSTANT)
    }
}
