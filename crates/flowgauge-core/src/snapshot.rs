//! Latest-reading store shared between the consumer and HTTP readers.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

/// Latest observed reading per metric name. `BTreeMap` keeps iteration (and
/// therefore serialized output) in a stable order.
pub type Snapshot = BTreeMap<String, f64>;

/// Thread-safe cache of the most recent metric readings.
///
/// One writer (the stream consumer) and arbitrarily many concurrent readers
/// (HTTP handlers). Writers apply whole batches under the lock; readers get
/// copies. The backing map never leaves this type, so a reader cannot race a
/// merge in progress or mutate ingestion state.
///
/// Keys written under an earlier label layout are left in place when a new
/// layout arrives; a reader may see readings for metrics the current session
/// no longer announces.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    inner: RwLock<Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every entry of `update` atomically: existing keys are
    /// overwritten, new keys inserted. Readers observe either none or all of
    /// the batch.
    pub fn merge(&self, update: Snapshot) {
        tracing::trace!(entries = update.len(), "merging metric update");
        let mut snapshot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        snapshot.extend(update);
    }

    /// Copy-out of the full snapshot.
    pub fn read_all(&self) -> Snapshot {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Copy-out of a single metric, if it has been observed.
    pub fn read(&self, name: &str) -> Option<f64> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .copied()
    }
}
