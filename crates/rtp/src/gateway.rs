//! Validate, route and call the downstream rail with retries.

use common::PaymentPayload;
use common::payload::{AMOUNT, CREDITOR_ACCOUNT, CURRENCY, DEBTOR_ACCOUNT};
use domain::{Amount, SUPPORTED_CURRENCIES};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::codes::{RtpErrorCode, RtpFlag, RtpWarningCode};
use crate::context::RoutingContext;
use crate::flow::RtpFlow;
use crate::rail::{DownstreamRail, SimulatedRail};
use crate::route::{RtpRoute, determine_route};

/// Stand-in for a party account that was not supplied.
pub const UNKNOWN_PARTY: &str = "UNKNOWN";

/// Calls per flow before the route is declared failed.
pub const MAX_ATTEMPTS: u32 = 3;

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_AMOUNT: &str = "0.00";

pub const HIGH_VALUE_REVIEW_THRESHOLD: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
pub const LARGE_VALUE_METRIC_THRESHOLD: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Payment fields as read by the gateway, with defaults applied.
struct Instruction {
    debtor: String,
    creditor: String,
    currency: String,
    amount: String,
}

impl Instruction {
    fn read(attributes: &PaymentPayload) -> Self {
        let field = |key: &str, default: &str| {
            attributes.text(key).unwrap_or_else(|| default.to_string())
        };
        Self {
            debtor: field(DEBTOR_ACCOUNT, UNKNOWN_PARTY),
            creditor: field(CREDITOR_ACCOUNT, UNKNOWN_PARTY),
            currency: field(CURRENCY, DEFAULT_CURRENCY),
            amount: field(AMOUNT, DEFAULT_AMOUNT),
        }
    }
}

/// Runs RTP flows against a [`DownstreamRail`].
///
/// Every flow executes the same sequence: shape checks, a halt gate, route
/// selection, up to [`MAX_ATTEMPTS`] rail calls and post-call metrics.
/// Nothing is returned; callers inspect the [`RoutingContext`] afterwards.
pub struct RtpDownstreamGateway<R = SimulatedRail>
where
    R: DownstreamRail,
{
    rail: R,
}

impl RtpDownstreamGateway<SimulatedRail> {
    pub fn new() -> Self {
        Self::with_rail(SimulatedRail)
    }
}

impl Default for RtpDownstreamGateway<SimulatedRail> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RtpDownstreamGateway<R>
where
    R: DownstreamRail,
{
    pub fn with_rail(rail: R) -> Self {
        Self { rail }
    }

    pub fn rail(&self) -> &R {
        &self.rail
    }

    #[tracing::instrument(skip_all, fields(flow = %flow))]
    pub fn execute(&self, flow: RtpFlow, context: &mut RoutingContext) {
        metrics::counter!("rtp_flow_executions_total", "flow" => flow.as_str()).increment(1);
        context.audit(format!("Starting RTP flow: {flow}"));

        let tx_id = ensure_transaction_id(context);
        let instruction = Instruction::read(context.attributes());

        let Some(amount) = check_instruction(context, &tx_id, &instruction) else {
            tracing::warn!(%tx_id, amount = %instruction.amount, "invalid amount format");
            return;
        };

        if context.has_errors() {
            tracing::warn!(%tx_id, errors = context.errors().len(), "halting RTP flow");
            context.audit(format!(
                "Stopping {flow} due to validation errors for tx {tx_id}"
            ));
            return;
        }

        let route = determine_route(&instruction.currency, &amount);
        context.audit(format!("Route selected for tx {tx_id}: {route}"));

        if self.call_with_retries(context, &tx_id, route, &amount) {
            context.audit(format!(
                "Successfully completed downstream interactions for tx {tx_id}"
            ));
        } else {
            metrics::counter!("rtp_downstream_failures_total", "route" => route.as_str())
                .increment(1);
            tracing::warn!(%tx_id, %route, "downstream failure after retries");
            context.add_error(RtpErrorCode::DownstreamFailure, route.as_str());
            context.audit(format!(
                "Downstream failure after retries for tx {tx_id} on route {route}"
            ));
        }

        record_key_metrics(context, &amount);
        context.audit(format!("Completed RTP flow: {flow} for tx {tx_id}"));
        tracing::info!(%tx_id, %route, failed = context.has_errors(), "RTP flow completed");
    }

    /// Returns whether any attempt succeeded.
    fn call_with_retries(
        &self,
        context: &mut RoutingContext,
        tx_id: &str,
        route: RtpRoute,
        amount: &Amount,
    ) -> bool {
        for attempt in 0..MAX_ATTEMPTS {
            metrics::counter!("rtp_downstream_attempts_total", "route" => route.as_str())
                .increment(1);
            context.audit(format!("Attempt {attempt} on route {route} for tx {tx_id}"));
            context.audit(format!(
                "Simulating downstream call to route {route} for amount {}",
                amount.to_plain_string()
            ));

            match self.rail.call(route, amount) {
                Ok(()) => {
                    context.audit(format!("Simulated downstream success for route {route}"));
                    return true;
                }
                Err(e) => {
                    tracing::debug!(%tx_id, attempt, error = %e, "downstream attempt failed");
                    context.audit(format!("Simulated downstream failure for route {route}"));
                }
            }
        }
        false
    }
}

fn ensure_transaction_id(context: &mut RoutingContext) -> String {
    if let Some(existing) = context.transaction_id().filter(|id| !id.trim().is_empty()) {
        return existing.to_string();
    }
    let tx_id = Uuid::new_v4().to_string();
    context.set_transaction_id(tx_id.clone());
    context.audit(format!("Generated new transaction id: {tx_id}"));
    tx_id
}

/// Shape checks ahead of the halt gate.
///
/// Returns `None` when the amount cannot be parsed, which halts the flow
/// before any other check runs.
fn check_instruction(
    context: &mut RoutingContext,
    tx_id: &str,
    instruction: &Instruction,
) -> Option<Amount> {
    let Instruction {
        debtor,
        creditor,
        currency,
        amount: raw_amount,
    } = instruction;

    if debtor == UNKNOWN_PARTY || creditor == UNKNOWN_PARTY {
        context.add_warning(RtpWarningCode::MissingParty, format!("{debtor}->{creditor}"));
        context.audit(format!("Missing party information for tx {tx_id}"));
    }

    let amount = match Amount::parse(raw_amount) {
        Ok(amount) => amount,
        Err(_) => {
            context.add_error(RtpErrorCode::InvalidAmountFormat, raw_amount.as_str());
            context.audit(format!("Invalid amount format for tx {tx_id}: {raw_amount}"));
            return None;
        }
    };

    if !amount.is_positive() {
        context.add_error(RtpErrorCode::NonPositiveAmount, amount.to_plain_string());
        context.audit(format!("Non-positive amount detected for tx {tx_id}"));
    }

    if !SUPPORTED_CURRENCIES.contains(&currency.as_str()) {
        context.add_warning(RtpWarningCode::UnsupportedCurrency, currency.as_str());
        context.audit(format!("Unsupported currency {currency} for tx {tx_id}"));
    }

    for i in 0..5 {
        let key = format!("meta_{i}");
        if let Some(value) = context.attributes().text(&key) {
            context.audit(format!("Meta attribute {key} = {value}"));
        }
    }

    if debtor == creditor && debtor != UNKNOWN_PARTY {
        context.add_warning(RtpWarningCode::SameAccount, debtor.as_str());
        context.audit(format!(
            "Debtor and creditor are the same account {debtor} for tx {tx_id}"
        ));
    }

    if amount.as_decimal() > HIGH_VALUE_REVIEW_THRESHOLD {
        context.add_flag(RtpFlag::HighValueReview);
        context.audit(format!("High value transaction flagged for tx {tx_id}"));
    }

    Some(amount)
}

fn record_key_metrics(context: &mut RoutingContext, amount: &Amount) {
    let plain = amount.to_plain_string();
    context.audit(format!("Recording key metrics for amount {plain}"));
    if amount.as_decimal() > LARGE_VALUE_METRIC_THRESHOLD {
        context.add_flag(RtpFlag::LargeValueMetric);
    }
    if amount.scale() > 2 {
        context.add_warning(RtpWarningCode::UnusualDecimals, plain);
    }
}
