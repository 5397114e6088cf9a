//! Read-side HTTP surface (the metrics service).
//!
//! Handlers never block on the consumer and never surface ingestion errors:
//! before any data has arrived, `/metrics` is an empty object and `/flow`
//! scores all-zero inputs. Responses reflect the snapshot at call time.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Json};
use serde_json::json;

use flowgauge_core::score::{flow_score, FlowInputs};

use crate::app_state::AppState;

const INDEX_BODY: &str = "<h2>Metrics Server is Running</h2>\
<p>Access the performance metrics at the <a href='/metrics'>/metrics</a> endpoint.</p>";

/// `GET /` : static liveness page.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_BODY)
}

/// `GET /metrics` : the current snapshot as a JSON object, metric name to
/// latest reading. Always 200.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store().read_all())
}

/// `GET /flow` : the composite flow-state score, recomputed from the
/// current snapshot on every call.
pub async fn flow(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.store().read_all();
    let score = flow_score(FlowInputs::from_snapshot(&snapshot));
    Json(json!({ "flow_score": score }))
}
