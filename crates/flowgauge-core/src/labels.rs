//! Label-to-position resolution for the performance metrics stream.

use std::collections::BTreeMap;

/// Substring marking administrative flag channels (e.g. `eng.isActive`).
/// Flag channels announce whether a detector is running; they are not
/// metrics and never enter the index.
pub const ADMIN_MARKER: &str = "isActive";

/// Mapping from metric name to its position in a value frame.
///
/// Derived wholesale from the most recent label announcement and replaced,
/// never patched, when labels are re-announced.
pub type MetricIndex = BTreeMap<String, usize>;

/// Build a [`MetricIndex`] from a label announcement.
///
/// Positions are the labels' original positions in the announcement, so
/// value frames can be projected through the index unchanged. An empty or
/// fully filtered announcement yields an empty index, which makes the
/// consumer ignore value frames until a usable announcement arrives.
pub fn resolve_metric_index(labels: &[String]) -> MetricIndex {
    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| !label.contains(ADMIN_MARKER))
        .map(|(pos, label)| (label.clone(), pos))
        .collect()
}
