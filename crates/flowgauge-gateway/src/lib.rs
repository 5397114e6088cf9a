//! flowgauge gateway library entry.
//!
//! This crate wires the config, the session consumer, the snapshot store and
//! the read-side HTTP surface into a cohesive service. It is intended to be
//! consumed by the binary (`main.rs`), by integration tests, and by
//! embedders that bring their own session transport via
//! [`session::ChannelLink`].

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod service;
pub mod session;
