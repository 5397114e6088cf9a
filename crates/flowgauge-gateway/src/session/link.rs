//! Session link implementations.
//!
//! A link owns one side of the collaborator boundary: `open` performs the
//! outward connection call and yields the stream the delivery mechanism
//! feeds, `subscribe` is the one outward call the consumer issues after
//! session-ready. Everything upstream of the decoded events (handshake,
//! authentication exchange, reconnection) stays inside the link.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::stream::{self, BoxStream};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::{mpsc, Notify};
use tokio::time::MissedTickBehavior;

use flowgauge_core::error::{FlowgaugeError, Result};
use flowgauge_core::{SessionEvent, ADMIN_MARKER};

use crate::config::{GatewayConfig, SessionSection, SessionSource};
use crate::session::MET_STREAM;

/// Decoded events as delivered by a link.
pub type EventStream = BoxStream<'static, SessionEvent>;

/// Positional layout announced by the virtual headset, matching the
/// performance metrics stream of a real device: each detector announces an
/// `isActive` flag channel next to its reading.
pub const MET_LABELS: [&str; 13] = [
    "eng.isActive",
    "eng",
    "exc.isActive",
    "exc",
    "lex",
    "str.isActive",
    "str",
    "rel.isActive",
    "rel",
    "int.isActive",
    "int",
    "foc.isActive",
    "foc",
];

/// Opaque upstream credentials, resolved from the environment at startup and
/// handed to the link when the session is opened. The bundled links
/// terminate authentication at their own boundary and ignore them.
#[derive(Clone)]
pub struct SessionCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl SessionCredentials {
    /// Resolve from the environment variables named in config. An unset
    /// variable resolves to an empty string; a link that talks to a real
    /// upstream rejects empty credentials at open time.
    pub fn from_env(session: &SessionSection) -> Self {
        let read = |var: &str| {
            std::env::var(var).unwrap_or_else(|_| {
                tracing::warn!(var, "credential variable not set");
                String::new()
            })
        };
        Self {
            client_id: read(&session.client_id_env),
            client_secret: read(&session.client_secret_env),
        }
    }
}

impl fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Boundary to the streaming-session collaborator.
#[async_trait]
pub trait SessionLink: Send {
    /// Open the session. Returning the event stream marks the transport as
    /// open; the consumer then waits for session-ready on that stream.
    async fn open(&mut self, credentials: &SessionCredentials) -> Result<EventStream>;

    /// Request a subscription to the named streams.
    async fn subscribe(&mut self, streams: &[String]) -> Result<()>;
}

/// Build the link the binary hosts for the configured source.
pub fn build_link(cfg: &GatewayConfig) -> Box<dyn SessionLink> {
    match cfg.session.source {
        SessionSource::Virtual => Box::new(VirtualLink::new(Duration::from_millis(
            cfg.session.frame_interval_ms,
        ))),
        SessionSource::Pipe => Box::new(PipeLink::new()),
    }
}

fn receiver_stream(rx: mpsc::Receiver<SessionEvent>) -> EventStream {
    Box::pin(stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|ev| (ev, rx))
    }))
}

// --------------------
// ChannelLink: embedding seam
// --------------------

/// Producer side of a [`ChannelLink`] pair, held by the embedding transport:
/// push decoded events in, read subscription requests out.
pub struct SessionHandle {
    pub events: mpsc::Sender<SessionEvent>,
    pub subscriptions: mpsc::Receiver<Vec<String>>,
}

/// A link driven by an external transport through a channel pair.
///
/// This is the integration point for a real upstream connection: whatever
/// owns the wire decodes its traffic into [`SessionEvent`]s and feeds them
/// through the paired [`SessionHandle`].
pub struct ChannelLink {
    events: Option<mpsc::Receiver<SessionEvent>>,
    sub_tx: mpsc::Sender<Vec<String>>,
}

impl ChannelLink {
    /// Create a handle/link pair.
    pub fn create() -> (SessionHandle, ChannelLink) {
        let (event_tx, event_rx) = mpsc::channel(64);
        let (sub_tx, sub_rx) = mpsc::channel(8);
        (
            SessionHandle {
                events: event_tx,
                subscriptions: sub_rx,
            },
            ChannelLink {
                events: Some(event_rx),
                sub_tx,
            },
        )
    }
}

#[async_trait]
impl SessionLink for ChannelLink {
    async fn open(&mut self, _credentials: &SessionCredentials) -> Result<EventStream> {
        let rx = self
            .events
            .take()
            .ok_or_else(|| FlowgaugeError::Internal("channel link already opened".into()))?;
        Ok(receiver_stream(rx))
    }

    async fn subscribe(&mut self, streams: &[String]) -> Result<()> {
        self.sub_tx
            .send(streams.to_vec())
            .await
            .map_err(|_| FlowgaugeError::Transport("subscription channel closed".into()))
    }
}

// --------------------
// VirtualLink: synthetic headset
// --------------------

/// Development source emulating a headset session: announces session-ready,
/// then (once subscribed) the full performance layout followed by periodic
/// synthetic frames. Readings drift smoothly inside [0, 1]; flag channels
/// report 1.0.
pub struct VirtualLink {
    frame_interval: Duration,
    subscribed: Arc<Notify>,
}

impl VirtualLink {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            subscribed: Arc::new(Notify::new()),
        }
    }
}

fn synth_frame(tick: u64) -> Vec<f64> {
    MET_LABELS
        .iter()
        .enumerate()
        .map(|(pos, label)| {
            if label.contains(ADMIN_MARKER) {
                1.0
            } else {
                let t = tick as f64 * 0.05;
                let phase = pos as f64 * 0.7;
                0.5 + 0.5 * (t + phase).sin()
            }
        })
        .collect()
}

#[async_trait]
impl SessionLink for VirtualLink {
    async fn open(&mut self, _credentials: &SessionCredentials) -> Result<EventStream> {
        let (tx, rx) = mpsc::channel(64);
        let subscribed = Arc::clone(&self.subscribed);
        let frame_interval = self.frame_interval;

        tokio::spawn(async move {
            if tx.send(SessionEvent::SessionReady).await.is_err() {
                return;
            }

            // The headset streams nothing until the subscription request.
            subscribed.notified().await;

            let labels = MET_LABELS.iter().map(|s| s.to_string()).collect();
            if tx
                .send(SessionEvent::Labels {
                    stream: MET_STREAM.into(),
                    labels,
                })
                .await
                .is_err()
            {
                return;
            }

            let mut clock = tokio::time::interval(frame_interval);
            clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut tick: u64 = 0;
            loop {
                clock.tick().await;
                let values = synth_frame(tick);
                tick = tick.wrapping_add(1);
                if tx
                    .send(SessionEvent::Frame {
                        stream: MET_STREAM.into(),
                        values,
                    })
                    .await
                    .is_err()
                {
                    return;
                }
            }
        });

        Ok(receiver_stream(rx))
    }

    async fn subscribe(&mut self, streams: &[String]) -> Result<()> {
        if streams.iter().any(|s| s == MET_STREAM) {
            self.subscribed.notify_one();
        }
        Ok(())
    }
}

// --------------------
// PipeLink: stdin/stdout bridge
// --------------------

/// A link fed by an external session bridge over the process pipes: decoded
/// events arrive as JSON lines on stdin, subscription requests go out as a
/// JSON line on stdout. Undecodable lines are skipped, not fatal.
#[derive(Default)]
pub struct PipeLink;

impl PipeLink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SessionLink for PipeLink {
    async fn open(&mut self, _credentials: &SessionCredentials) -> Result<EventStream> {
        let lines = BufReader::new(tokio::io::stdin()).lines();
        let stream = stream::unfold(lines, |mut lines| async move {
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        match serde_json::from_str::<SessionEvent>(&line) {
                            Ok(ev) => return Some((ev, lines)),
                            Err(e) => {
                                tracing::warn!(error = %e, "undecodable event line skipped");
                                continue;
                            }
                        }
                    }
                    Ok(None) => return None,
                    Err(e) => {
                        tracing::warn!(error = %e, "stdin read failed");
                        return None;
                    }
                }
            }
        });
        Ok(Box::pin(stream))
    }

    async fn subscribe(&mut self, streams: &[String]) -> Result<()> {
        let mut line = serde_json::json!({ "subscribe": streams }).to_string();
        line.push('\n');

        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(line.as_bytes())
            .await
            .map_err(|e| FlowgaugeError::Transport(format!("subscription write failed: {e}")))?;
        stdout
            .flush()
            .await
            .map_err(|e| FlowgaugeError::Transport(format!("subscription flush failed: {e}")))?;
        Ok(())
    }
}
