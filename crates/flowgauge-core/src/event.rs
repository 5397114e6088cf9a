//! Events emitted by the streaming-session collaborator.
//!
//! The transport itself (handshake, authentication exchange, reconnection)
//! is out of scope; links decode their traffic into these four kinds once,
//! and the consumer reacts with one handler per kind.
//!
//! The serde representation is the line protocol spoken by external session
//! bridges (see the gateway's pipe link), e.g.
//! `{"event":"frame","stream":"met","values":[0.5,0.62]}`.

use serde::{Deserialize, Serialize};

/// One inbound event from the streaming session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The session is established; subscriptions may now be issued.
    SessionReady,
    /// A label announcement defining the positional layout of every
    /// subsequent value frame on `stream`. Replaces any prior announcement.
    Labels { stream: String, labels: Vec<String> },
    /// One batch of readings positionally aligned to the latest announcement.
    Frame { stream: String, values: Vec<f64> },
    /// An error notification from the collaborator. Informational only.
    Error { details: serde_json::Value },
}
