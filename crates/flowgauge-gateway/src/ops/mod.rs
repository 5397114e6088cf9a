//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/statz`   : ingest counters, Prometheus text format
//!   (`/metrics` is taken by the snapshot surface)

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn statz(State(state): State<AppState>) -> impl IntoResponse {
    state.ingest().render()
}
