//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, service};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service::index))
        .route("/metrics", get(service::metrics))
        .route("/flow", get(service::flow))
        .route("/healthz", get(ops::healthz))
        .route("/statz", get(ops::statz))
        .with_state(state)
}
