use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn dashboard_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/read-calls", get(controller::get_read_calls))
        .route("/node-health", get(controller::get_node_health))
        .route("/gas-prices", get(controller::get_gas_prices))
        .route("/transfer", post(controller::simulate_transfer))
}
