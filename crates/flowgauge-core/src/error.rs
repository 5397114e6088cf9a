//! Shared error type across flowgauge crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, FlowgaugeError>;

/// Unified error type used by core and gateway.
///
/// None of these are fatal to ingestion: transport errors are informational
/// per the session contract, and malformed frames are recovered locally by
/// skipping the positions a frame cannot fill.
#[derive(Debug, Error)]
pub enum FlowgaugeError {
    /// Reported by the session collaborator (or the link implementation).
    #[error("transport: {0}")]
    Transport(String),
    /// A value frame that cannot be interpreted against the current layout.
    #[error("malformed frame: {0}")]
    MalformedFrame(String),
    /// Invalid or unusable configuration.
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}
