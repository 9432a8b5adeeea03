//! HTTP channel adapter for the payment orchestration pipeline.
//!
//! Accepts payments and RTP flow requests over REST, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use orchestration::{OrchestratorSettings, PaymentOrchestrator, TracingEventSink};
use rtp::RtpDownstreamGateway;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/payments", post(routes::payments::submit))
        .route("/rtp/{flow}", post(routes::flows::execute))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state from configuration.
pub fn create_default_state(config: &Config) -> Arc<AppState> {
    let settings = OrchestratorSettings {
        channel: config.payment_channel.clone(),
    };

    Arc::new(AppState {
        orchestrator: PaymentOrchestrator::with_settings(TracingEventSink, settings),
        gateway: RtpDownstreamGateway::new(),
    })
}
