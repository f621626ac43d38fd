pub mod config;
pub mod modules;
pub mod services;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use config::ChainInfo;
use modules::dashboard::dashboard_routes;
use modules::metrics::metrics_routes;
use services::gas::GasPriceSampler;
use services::metrics::MetricsRegistry;
use services::sampler::LatencySampler;
use services::transfer::TransferSimulator;

pub struct AppState {
    pub chains: Vec<ChainInfo>,
    pub read_sampler: Arc<LatencySampler>,
    pub health_sampler: Arc<LatencySampler>,
    pub gas_sampler: Arc<GasPriceSampler>,
    pub simulator: TransferSimulator,
    pub metrics: Arc<MetricsRegistry>,
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/dashboard", dashboard_routes())
        .merge(metrics_routes())
        .layer(RequestBodyLimitLayer::new(1024 * 16)) // 16KB max body
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "ChainSpeed Monitor API"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
