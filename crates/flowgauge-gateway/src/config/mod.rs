//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use flowgauge_core::error::{FlowgaugeError, Result};

pub use schema::{GatewayConfig, ServerSection, SessionSection, SessionSource};

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| FlowgaugeError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| FlowgaugeError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
