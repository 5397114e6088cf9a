//! flowgauge core: session events, label resolution, snapshot store, and the
//! flow-state score.
//!
//! This crate defines the ingestion primitives shared by the gateway and by
//! embedders that bring their own session transport. It intentionally carries
//! no transport or runtime dependencies so it can be reused in multiple
//! contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `FlowgaugeError`/`Result` so a running
//! service degrades to a stale snapshot instead of crashing on bad traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod event;
pub mod labels;
pub mod score;
pub mod snapshot;

pub use error::{FlowgaugeError, Result};
pub use event::SessionEvent;
pub use labels::{resolve_metric_index, MetricIndex, ADMIN_MARKER};
pub use score::{flow_score, FlowInputs};
pub use snapshot::{Snapshot, SnapshotStore};
