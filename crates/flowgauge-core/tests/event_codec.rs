//! Session event line-protocol vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use flowgauge_core::SessionEvent;

#[test]
fn parse_session_ready() {
    let ev: SessionEvent = serde_json::from_str(r#"{"event":"session_ready"}"#).unwrap();
    assert_eq!(ev, SessionEvent::SessionReady);
}

#[test]
fn parse_labels() {
    let ev: SessionEvent = serde_json::from_str(
        r#"{"event":"labels","stream":"met","labels":["eng.isActive","eng","foc"]}"#,
    )
    .unwrap();
    match ev {
        SessionEvent::Labels { stream, labels } => {
            assert_eq!(stream, "met");
            assert_eq!(labels, vec!["eng.isActive", "eng", "foc"]);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn parse_frame() {
    let ev: SessionEvent =
        serde_json::from_str(r#"{"event":"frame","stream":"met","values":[1.0,0.62,0.0]}"#)
            .unwrap();
    match ev {
        SessionEvent::Frame { stream, values } => {
            assert_eq!(stream, "met");
            assert_eq!(values, vec![1.0, 0.62, 0.0]);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn error_round_trips_arbitrary_details() {
    let ev = SessionEvent::Error {
        details: serde_json::json!({"code": -32601, "message": "no headset connected"}),
    };
    let line = serde_json::to_string(&ev).unwrap();
    let back: SessionEvent = serde_json::from_str(&line).unwrap();
    assert_eq!(back, ev);
}
