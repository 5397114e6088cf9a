//! Virtual headset link tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use futures_util::StreamExt;
use tokio::time::timeout;

use flowgauge_core::{SessionEvent, ADMIN_MARKER};
use flowgauge_gateway::session::link::{SessionCredentials, SessionLink, VirtualLink, MET_LABELS};

fn credentials() -> SessionCredentials {
    SessionCredentials {
        client_id: String::new(),
        client_secret: String::new(),
    }
}

async fn next<S: futures_util::Stream<Item = SessionEvent> + Unpin>(
    stream: &mut S,
) -> SessionEvent {
    timeout(Duration::from_secs(2), stream.next())
        .await
        .expect("no event in time")
        .expect("stream ended")
}

#[tokio::test]
async fn announces_layout_before_frames() {
    let mut link = VirtualLink::new(Duration::from_millis(10));
    let mut events = link.open(&credentials()).await.unwrap();

    assert_eq!(next(&mut events).await, SessionEvent::SessionReady);

    link.subscribe(&["met".to_string()]).await.unwrap();

    match next(&mut events).await {
        SessionEvent::Labels { stream, labels } => {
            assert_eq!(stream, "met");
            assert_eq!(labels, MET_LABELS.map(String::from).to_vec());
        }
        other => panic!("expected labels, got {other:?}"),
    }

    for _ in 0..3 {
        match next(&mut events).await {
            SessionEvent::Frame { stream, values } => {
                assert_eq!(stream, "met");
                assert_eq!(values.len(), MET_LABELS.len());
                for (label, value) in MET_LABELS.iter().zip(&values) {
                    assert!(
                        (0.0..=1.0).contains(value),
                        "{label} out of range: {value}"
                    );
                    if label.contains(ADMIN_MARKER) {
                        assert_eq!(*value, 1.0, "flag channel {label} must report active");
                    }
                }
            }
            other => panic!("expected frame, got {other:?}"),
        }
    }
}
