use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::config::chains::find_chain;
use crate::services::sampler::LatencySampler;
use crate::AppState;

use super::schema::{
    DashboardErrorResponse, GasTableResponse, LatencyTableResponse, TransferRequest,
    TransferResponse,
};

// =============================================================================
// GET /dashboard/read-calls - Read-call latency table
// =============================================================================

pub async fn get_read_calls(State(state): State<Arc<AppState>>) -> Json<LatencyTableResponse> {
    Json(latency_table(&state.read_sampler).await)
}

// =============================================================================
// GET /dashboard/node-health - Node liveness latency table
// =============================================================================

pub async fn get_node_health(State(state): State<Arc<AppState>>) -> Json<LatencyTableResponse> {
    Json(latency_table(&state.health_sampler).await)
}

// =============================================================================
// GET /dashboard/gas-prices - Gas price table
// =============================================================================

pub async fn get_gas_prices(State(state): State<Arc<AppState>>) -> Json<GasTableResponse> {
    let snapshot = state.gas_sampler.snapshot().await;
    Json(snapshot.into())
}

// =============================================================================
// POST /dashboard/transfer - Simulated transfer call
// =============================================================================

pub async fn simulate_transfer(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferResponse>, (StatusCode, Json<DashboardErrorResponse>)> {
    let chain = find_chain(&state.chains, &request.chain).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(DashboardErrorResponse::new(format!(
                "Unknown chain: {}",
                request.chain
            ))),
        )
    })?;

    let outcome = state.simulator.simulate(&chain.name).await;
    Ok(Json(outcome.into()))
}

async fn latency_table(sampler: &LatencySampler) -> LatencyTableResponse {
    let snapshot = sampler.snapshot().await;
    let averages = sampler.averages().await;

    LatencyTableResponse {
        sampled_at: snapshot.sampled_at,
        rows: snapshot.results.into_iter().map(Into::into).collect(),
        averages: averages.into_iter().map(Into::into).collect(),
    }
}
