//! ROUTE: picks the settlement route and clearing scheme.

use common::PaymentPayload;
use common::payload::CURRENCY;
use domain::RoutingTable;
use domain::routing::INTERNAL_RT;

use crate::context::OrchestrationContext;
use crate::error::Result;
use crate::handlers::StepHandler;
use crate::handlers::transform::DEFAULT_CURRENCY;
use crate::step::OrchestrationStep;

/// Route for any non-USD payment.
pub const CROSS_BORDER: &str = "CROSS_BORDER";

/// USD (any case) settles on the internal rail, everything else crosses
/// borders.
pub fn settlement_route(currency: &str) -> &'static str {
    if currency.eq_ignore_ascii_case("USD") {
        INTERNAL_RT
    } else {
        CROSS_BORDER
    }
}

/// Records the settlement `route` and the currency's clearing `scheme`.
#[derive(Debug, Clone, Default)]
pub struct RouteHandler {
    schemes: RoutingTable,
}

impl RouteHandler {
    pub fn new(schemes: RoutingTable) -> Self {
        Self { schemes }
    }
}

impl StepHandler for RouteHandler {
    fn step(&self) -> OrchestrationStep {
        OrchestrationStep::Route
    }

    fn handle(
        &self,
        payload: &mut PaymentPayload,
        context: &mut OrchestrationContext,
        messages: &mut Vec<String>,
    ) -> Result<()> {
        let currency = payload
            .text(CURRENCY)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let route = settlement_route(&currency);
        context.put_attribute("route", route);
        messages.push(format!("Routing decided: {route}"));

        let scheme = self.schemes.route_by_currency(&currency).to_string();
        context.put_attribute("scheme", scheme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::routing::{DEFAULT_ROUTE, SEPA_INSTANT};

    fn route(currency: Option<&str>) -> (OrchestrationContext, Vec<String>) {
        let mut payload = PaymentPayload::new();
        if let Some(c) = currency {
            payload.insert(CURRENCY, c);
        }
        let mut ctx = OrchestrationContext::new();
        let mut messages = Vec::new();
        RouteHandler::default()
            .handle(&mut payload, &mut ctx, &mut messages)
            .unwrap();
        (ctx, messages)
    }

    #[test]
    fn test_settlement_route() {
        assert_eq!(settlement_route("USD"), INTERNAL_RT);
        assert_eq!(settlement_route("usd"), INTERNAL_RT);
        assert_eq!(settlement_route("EUR"), CROSS_BORDER);
        assert_eq!(settlement_route(""), CROSS_BORDER);
    }

    #[test]
    fn test_settlement_route_is_idempotent() {
        assert_eq!(settlement_route("GBP"), settlement_route("GBP"));
    }

    #[test]
    fn test_usd_routes_internally() {
        let (ctx, messages) = route(Some("USD"));
        assert_eq!(ctx.attribute_str("route"), Some(INTERNAL_RT));
        assert_eq!(ctx.attribute_str("scheme"), Some(INTERNAL_RT));
        assert_eq!(messages, vec!["Routing decided: INTERNAL_RT"]);
    }

    #[test]
    fn test_missing_currency_defaults_to_usd() {
        let (ctx, _) = route(None);
        assert_eq!(ctx.attribute_str("route"), Some(INTERNAL_RT));
    }

    #[test]
    fn test_eur_crosses_border_via_sepa() {
        let (ctx, messages) = route(Some("EUR"));
        assert_eq!(ctx.attribute_str("route"), Some(CROSS_BORDER));
        assert_eq!(ctx.attribute_str("scheme"), Some(SEPA_INSTANT));
        assert_eq!(messages, vec!["Routing decided: CROSS_BORDER"]);
    }

    #[test]
    fn test_lowercase_usd_uses_default_scheme() {
        let (ctx, _) = route(Some("usd"));
        assert_eq!(ctx.attribute_str("route"), Some(INTERNAL_RT));
        assert_eq!(ctx.attribute_str("scheme"), Some(DEFAULT_ROUTE));
    }
}
