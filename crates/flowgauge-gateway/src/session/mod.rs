//! Session ingestion: the collaborator boundary and the stream consumer.

pub mod consumer;
pub mod link;

pub use consumer::{ConsumerState, StreamConsumer};
pub use link::{
    build_link, ChannelLink, EventStream, PipeLink, SessionCredentials, SessionHandle,
    SessionLink, VirtualLink,
};

/// The one stream consumed here: performance metrics.
pub const MET_STREAM: &str = "met";
