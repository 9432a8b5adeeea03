//! Payment submission endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use common::PaymentPayload;
use orchestration::OrchestrationStatus;
use serde::Serialize;
use serde_json::Value;

use super::AppState;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct PaymentResponse {
    pub status: OrchestrationStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_ms: i64,
    pub msg_id: Option<String>,
    pub messages: Vec<String>,
}

/// POST /payments: Run one payment through the orchestration pipeline.
///
/// Rejected payments still answer 200; the outcome is in `status`.
#[tracing::instrument(skip_all)]
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<PaymentResponse>, ApiError> {
    let Value::Object(fields) = body else {
        return Err(ApiError::BadRequest(
            "payment payload must be a JSON object".to_string(),
        ));
    };

    let mut payload = PaymentPayload::from(fields);
    let result = state.orchestrator.orchestrate(&mut payload);
    tracing::info!(status = %result.status(), duration_ms = result.duration_millis(), "payment processed");

    Ok(Json(PaymentResponse {
        status: result.status(),
        started_at: result.started_at(),
        completed_at: result.completed_at(),
        duration_ms: result.duration_millis(),
        msg_id: payload.get_str("msgId").map(str::to_string),
        messages: result.messages().to_vec(),
    }))
}
