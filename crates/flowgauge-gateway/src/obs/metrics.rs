//! Minimal ingest counters for the gateway.
//!
//! No external metrics dependency; counters with dynamic labels are backed
//! by `DashMap`. Labels are flattened into sorted key vectors to keep
//! deterministic ordering in the rendered output.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for a label set (0 when never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();
        self.map
            .get(&key)
            .map(|c| c.value().load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        for r in self.map.iter() {
            let key = r.key();
            let val = r.value().load(Ordering::Relaxed);
            if key.is_empty() {
                let _ = writeln!(out, "{name} {val}");
            } else {
                let label_str = key
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                let _ = writeln!(out, "{name}{{{label_str}}} {val}");
            }
        }
    }
}

/// Ingestion counters maintained by the stream consumer.
#[derive(Default)]
pub struct IngestMetrics {
    pub frames_received: CounterVec,
    pub frames_no_layout: CounterVec,
    pub frames_short: CounterVec,
    pub label_resets: CounterVec,
    pub transport_errors: CounterVec,
    pub unknown_stream: CounterVec,
}

impl IngestMetrics {
    /// Render all counters in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.frames_received.render("flowgauge_frames_received_total", &mut out);
        self.frames_no_layout.render("flowgauge_frames_no_layout_total", &mut out);
        self.frames_short.render("flowgauge_frames_short_total", &mut out);
        self.label_resets.render("flowgauge_label_resets_total", &mut out);
        self.transport_errors.render("flowgauge_transport_errors_total", &mut out);
        self.unknown_stream.render("flowgauge_unknown_stream_total", &mut out);
        out
    }
}
