//! Reactive consumer of the metrics session.
//!
//! One long-lived task reacting to decoded session events with one handler
//! per kind. Nothing here is fatal: transport errors are informational per
//! the collaborator contract, short frames are partially applied, and if the
//! event stream dies without a close notification the consumer parks with
//! the last snapshot frozen.

use std::sync::Arc;

use futures_util::StreamExt;

use flowgauge_core::score::ATTENTION;
use flowgauge_core::{resolve_metric_index, MetricIndex, SessionEvent, Snapshot, SnapshotStore};

use crate::obs::IngestMetrics;
use crate::session::link::{SessionCredentials, SessionLink};
use crate::session::MET_STREAM;

/// Consumer lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerState {
    /// Constructed, not yet started.
    Idle,
    /// Outward open call in flight.
    Connecting,
    /// Transport open, waiting for session-ready.
    SessionPending,
    /// Subscription issued; frames are interpreted.
    Subscribed,
    /// Event stream ended (terminal).
    Closed,
}

/// Owns the session lifecycle: opens the link, subscribes on session-ready,
/// resolves label announcements, and projects value frames into the store.
pub struct StreamConsumer {
    link: Box<dyn SessionLink>,
    store: Arc<SnapshotStore>,
    ingest: Arc<IngestMetrics>,
    credentials: SessionCredentials,
    focus_watch: bool,
    state: ConsumerState,
    index: MetricIndex,
}

impl StreamConsumer {
    pub fn new(
        link: Box<dyn SessionLink>,
        store: Arc<SnapshotStore>,
        ingest: Arc<IngestMetrics>,
        credentials: SessionCredentials,
        focus_watch: bool,
    ) -> Self {
        Self {
            link,
            store,
            ingest,
            credentials,
            focus_watch,
            state: ConsumerState::Idle,
            index: MetricIndex::new(),
        }
    }

    pub fn state(&self) -> ConsumerState {
        self.state
    }

    /// Run until the session's event stream ends. Never returns an error:
    /// every failure degrades to a stale-but-consistent snapshot instead of
    /// crashing the process.
    pub async fn run(mut self) {
        self.state = ConsumerState::Connecting;
        let mut events = match self.link.open(&self.credentials).await {
            Ok(events) => events,
            Err(e) => {
                tracing::error!(error = %e, "session open failed");
                self.state = ConsumerState::Closed;
                return;
            }
        };
        self.state = ConsumerState::SessionPending;
        tracing::info!("session transport open, waiting for session-ready");

        while let Some(event) = events.next().await {
            match event {
                SessionEvent::SessionReady => self.on_session_ready().await,
                SessionEvent::Labels { stream, labels } => self.on_labels(stream, labels),
                SessionEvent::Frame { stream, values } => self.on_frame(stream, values),
                SessionEvent::Error { details } => self.on_error(details),
            }
        }

        // Transport gone without a close notification: known limitation,
        // the last snapshot stays frozen.
        self.state = ConsumerState::Closed;
        tracing::warn!("session event stream ended, snapshot is frozen");
    }

    async fn on_session_ready(&mut self) {
        tracing::info!(stream = MET_STREAM, "session ready, subscribing");
        match self.link.subscribe(&[MET_STREAM.to_string()]).await {
            Ok(()) => self.state = ConsumerState::Subscribed,
            Err(e) => {
                // Informational per the collaborator contract; a
                // re-announced session-ready retries the subscription.
                self.ingest.transport_errors.inc(&[]);
                tracing::warn!(error = %e, "subscribe request failed");
            }
        }
    }

    fn on_labels(&mut self, stream: String, labels: Vec<String>) {
        if stream != MET_STREAM {
            self.ingest.unknown_stream.inc(&[("stream", stream.as_str())]);
            tracing::debug!(%stream, "label announcement for unconsumed stream ignored");
            return;
        }
        self.index = resolve_metric_index(&labels);
        self.ingest.label_resets.inc(&[]);
        tracing::info!(
            metrics = ?self.index.keys().collect::<Vec<_>>(),
            "metric layout resolved"
        );
    }

    fn on_frame(&mut self, stream: String, values: Vec<f64>) {
        if stream != MET_STREAM {
            self.ingest.unknown_stream.inc(&[("stream", stream.as_str())]);
            return;
        }
        self.ingest.frames_received.inc(&[]);

        if self.index.is_empty() {
            // No layout announced yet: early traffic, not an error.
            self.ingest.frames_no_layout.inc(&[]);
            return;
        }

        let mut update = Snapshot::new();
        let mut short = false;
        for (name, pos) in &self.index {
            match values.get(*pos) {
                Some(v) => {
                    update.insert(name.clone(), *v);
                }
                None => short = true,
            }
        }
        if short {
            self.ingest.frames_short.inc(&[]);
            tracing::debug!(
                len = values.len(),
                "short frame, out-of-bounds positions skipped"
            );
        }
        if update.is_empty() {
            return;
        }

        if self.focus_watch {
            if let Some(foc) = update.get(ATTENTION) {
                tracing::info!(value = %foc, "attention reading");
            }
        }

        self.store.merge(update);
    }

    fn on_error(&mut self, details: serde_json::Value) {
        self.ingest.transport_errors.inc(&[]);
        tracing::warn!(%details, "session error reported");
    }
}
