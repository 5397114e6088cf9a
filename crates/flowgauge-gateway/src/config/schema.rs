use std::net::SocketAddr;

use serde::Deserialize;

use flowgauge_core::error::{FlowgaugeError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub session: SessionSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FlowgaugeError::Config("version must be 1".into()));
        }

        self.server.validate()?;
        self.session.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen.parse::<SocketAddr>().map_err(|e| {
            FlowgaugeError::Config(format!("server.listen is not a socket address: {e}"))
        })?;
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:5001".into()
}

/// Which session link the binary hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionSource {
    /// Synthetic headset for development without hardware.
    Virtual,
    /// Decoded session events piped in as JSON lines on stdin, with
    /// subscription requests written back on stdout.
    Pipe,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSection {
    #[serde(default = "default_source")]
    pub source: SessionSource,

    /// Emission period of the virtual headset.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// Log the attention ("foc") reading of every merged frame.
    #[serde(default)]
    pub focus_watch: bool,

    /// Environment variable holding the upstream client id.
    #[serde(default = "default_client_id_env")]
    pub client_id_env: String,

    /// Environment variable holding the upstream client secret.
    #[serde(default = "default_client_secret_env")]
    pub client_secret_env: String,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            source: default_source(),
            frame_interval_ms: default_frame_interval_ms(),
            focus_watch: false,
            client_id_env: default_client_id_env(),
            client_secret_env: default_client_secret_env(),
        }
    }
}

impl SessionSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=10_000).contains(&self.frame_interval_ms) {
            return Err(FlowgaugeError::Config(
                "session.frame_interval_ms must be between 100 and 10000".into(),
            ));
        }
        if self.client_id_env.is_empty() || self.client_secret_env.is_empty() {
            return Err(FlowgaugeError::Config(
                "session credential variable names must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_source() -> SessionSource {
    SessionSource::Virtual
}
fn default_frame_interval_ms() -> u64 {
    1000
}
fn default_client_id_env() -> String {
    "CORTEX_CLIENT_ID".into()
}
fn default_client_secret_env() -> String {
    "CORTEX_CLIENT_SECRET".into()
}
