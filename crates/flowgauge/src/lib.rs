//! Top-level facade crate for flowgauge.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use flowgauge_core::*;
}

pub mod gateway {
    pub use flowgauge_gateway::*;
}
