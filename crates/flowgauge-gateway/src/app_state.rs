//! Shared application state for the flowgauge gateway.

use std::sync::Arc;

use flowgauge_core::SnapshotStore;

use crate::config::GatewayConfig;
use crate::obs::IngestMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    store: Arc<SnapshotStore>,
    ingest: Arc<IngestMetrics>,
}

impl AppState {
    pub fn new(cfg: GatewayConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store: Arc::new(SnapshotStore::new()),
                ingest: Arc::new(IngestMetrics::default()),
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> Arc<SnapshotStore> {
        Arc::clone(&self.inner.store)
    }

    pub fn ingest(&self) -> Arc<IngestMetrics> {
        Arc::clone(&self.inner.ingest)
    }
}
