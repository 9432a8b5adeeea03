//! RTP flow trigger endpoint.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::PaymentPayload;
use rtp::{RoutingContext, RtpErrorCode, RtpFlag, RtpFlow, RtpWarningCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::AppState;
use crate::error::ApiError;

// -- Request types --

#[derive(Deserialize)]
pub struct RtpRequest {
    pub transaction_id: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

// -- Response types --

#[derive(Serialize)]
pub struct RtpResponse {
    pub flow: RtpFlow,
    pub transaction_id: Option<String>,
    pub failed: bool,
    pub errors: BTreeMap<RtpErrorCode, Vec<String>>,
    pub warnings: BTreeMap<RtpWarningCode, Vec<String>>,
    pub flags: Vec<RtpFlag>,
    pub audit_trail: Vec<String>,
}

impl RtpResponse {
    fn new(flow: RtpFlow, context: &RoutingContext) -> Self {
        Self {
            flow,
            transaction_id: context.transaction_id().map(str::to_string),
            failed: context.has_errors(),
            errors: context.errors().clone(),
            warnings: context.warnings().clone(),
            flags: context.flags().iter().copied().collect(),
            audit_trail: context.audit_trail().messages().map(str::to_string).collect(),
        }
    }
}

// -- Handlers --

/// POST /rtp/{flow}: Run a named RTP flow over the posted attributes.
#[tracing::instrument(skip(state, req))]
pub async fn execute(
    State(state): State<Arc<AppState>>,
    Path(flow): Path<String>,
    Json(req): Json<RtpRequest>,
) -> Result<Json<RtpResponse>, ApiError> {
    let flow: RtpFlow = flow.parse()?;

    let attributes = PaymentPayload::from(req.attributes);
    let mut context = match req.transaction_id {
        Some(tx_id) => RoutingContext::with_transaction_id(attributes, tx_id),
        None => RoutingContext::new(attributes),
    };
    state.gateway.execute(flow, &mut context);

    Ok(Json(RtpResponse::new(flow, &context)))
}
