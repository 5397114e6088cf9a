//! Flow score property tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use flowgauge_core::score::{flow_score, FlowInputs};
use flowgauge_core::Snapshot;

fn inputs(
    stress: f64,
    engagement: f64,
    interest: f64,
    excitement: f64,
    attention: f64,
    relaxation: f64,
) -> FlowInputs {
    FlowInputs {
        stress,
        engagement,
        interest,
        excitement,
        attention,
        relaxation,
    }
}

#[test]
fn bounded_over_input_grid() {
    let grid = [0.0, 0.25, 0.5, 0.75, 1.0];
    for &s in &grid {
        for &en in &grid {
            for &i in &grid {
                for &ex in &grid {
                    for &a in &grid {
                        for &r in &grid {
                            let score = flow_score(inputs(s, en, i, ex, a, r));
                            assert!(
                                (0.0..=1.0).contains(&score),
                                "score {score} out of range for ({s},{en},{i},{ex},{a},{r})"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn theoretical_maximum() {
    // Moderate arousal, full engagement/interest/attention.
    let score = flow_score(inputs(0.5, 1.0, 1.0, 0.5, 1.0, 0.5));
    assert!((score - 1.0).abs() < 1e-12, "got {score}");
}

#[test]
fn all_zero_inputs_score_zero() {
    // inverted_u(0) = -4 * 0.25 + 1 = 0, so every contribution vanishes.
    let score = flow_score(inputs(0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
    assert_eq!(score, 0.0);
}

#[test]
fn out_of_range_inputs_equal_clamped_inputs() {
    let high = flow_score(inputs(1.5, 0.7, 0.6, 0.4, 0.8, 0.5));
    let high_clamped = flow_score(inputs(1.0, 0.7, 0.6, 0.4, 0.8, 0.5));
    assert_eq!(high, high_clamped);

    let low = flow_score(inputs(0.3, 0.7, 0.6, 0.4, -0.3, 0.5));
    let low_clamped = flow_score(inputs(0.3, 0.7, 0.6, 0.4, 0.0, 0.5));
    assert_eq!(low, low_clamped);
}

#[test]
fn from_snapshot_maps_short_labels() {
    let mut snapshot = Snapshot::new();
    snapshot.insert("str".into(), 0.1);
    snapshot.insert("eng".into(), 0.2);
    snapshot.insert("int".into(), 0.3);
    snapshot.insert("exc".into(), 0.4);
    snapshot.insert("foc".into(), 0.5);
    snapshot.insert("rel".into(), 0.6);
    snapshot.insert("lex".into(), 0.9); // not scored

    let got = FlowInputs::from_snapshot(&snapshot);
    let want = inputs(0.1, 0.2, 0.3, 0.4, 0.5, 0.6);
    assert_eq!(got, want);
}

#[test]
fn from_snapshot_defaults_missing_metrics_to_zero() {
    let mut snapshot = Snapshot::new();
    snapshot.insert("foc".into(), 0.8);

    let got = FlowInputs::from_snapshot(&snapshot);
    assert_eq!(got.attention, 0.8);
    assert_eq!(got.stress, 0.0);
    assert_eq!(got.relaxation, 0.0);

    // Still a valid score: empty snapshot scores like all-zero inputs.
    let empty = flow_score(FlowInputs::from_snapshot(&Snapshot::new()));
    assert_eq!(empty, 0.0);
}
