//! SnapshotStore concurrency tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use flowgauge_core::{Snapshot, SnapshotStore};

#[test]
fn merge_overwrites_and_inserts() {
    let store = SnapshotStore::new();

    let mut first = Snapshot::new();
    first.insert("foc".into(), 0.2);
    first.insert("eng".into(), 0.4);
    store.merge(first);

    let mut second = Snapshot::new();
    second.insert("foc".into(), 0.9);
    second.insert("str".into(), 0.1);
    store.merge(second);

    let snapshot = store.read_all();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot["foc"], 0.9);
    assert_eq!(snapshot["eng"], 0.4);
    assert_eq!(snapshot["str"], 0.1);
    assert_eq!(store.read("str"), Some(0.1));
    assert_eq!(store.read("rel"), None);
}

#[test]
fn read_all_is_a_copy() {
    let store = SnapshotStore::new();
    let mut update = Snapshot::new();
    update.insert("foc".into(), 0.5);
    store.merge(update);

    let mut copy = store.read_all();
    copy.insert("foc".into(), 99.0);
    copy.insert("bogus".into(), 1.0);

    assert_eq!(store.read("foc"), Some(0.5));
    assert_eq!(store.read("bogus"), None);
}

/// Every merge writes the same marker value to a whole batch of keys.
/// If a reader ever sees two different markers in one snapshot, it observed
/// a partially applied merge.
#[test]
fn readers_never_observe_a_partial_merge() {
    const KEYS: usize = 16;
    const MERGES: usize = 500;
    const READERS: usize = 4;

    let store = Arc::new(SnapshotStore::new());

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for marker in 0..MERGES {
                let mut batch = Snapshot::new();
                for k in 0..KEYS {
                    batch.insert(format!("m{k}"), marker as f64);
                }
                store.merge(batch);
            }
        })
    };

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                loop {
                    let snapshot = store.read_all();
                    if snapshot.is_empty() {
                        continue;
                    }
                    let mut markers: Vec<f64> = snapshot.values().copied().collect();
                    markers.dedup();
                    assert_eq!(
                        markers.len(),
                        1,
                        "snapshot mixes values from two merges: {snapshot:?}"
                    );
                    if markers[0] as usize == MERGES - 1 {
                        break;
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
}
