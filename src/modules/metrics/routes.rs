use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn metrics_routes() -> Router<Arc<AppState>> {
    Router::new().route("/metrics", get(controller::get_metrics))
}
