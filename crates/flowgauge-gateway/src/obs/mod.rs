//! Observability helpers for the gateway.

pub mod metrics;

pub use metrics::{CounterVec, IngestMetrics};
