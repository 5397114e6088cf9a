//! flowgauge gateway
//!
//! - Loads `flowgauge.yaml` (strict parsing + validate)
//! - Spawns the stream consumer against the configured session link
//! - Serves the read-side HTTP surface

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use flowgauge_gateway::{app_state, config, router, session};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("flowgauge.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let credentials = session::SessionCredentials::from_env(&cfg.session);
    let focus_watch = cfg.session.focus_watch;

    let state = app_state::AppState::new(cfg);

    let link = session::build_link(state.cfg());
    let consumer = session::StreamConsumer::new(
        link,
        state.store(),
        state.ingest(),
        credentials,
        focus_watch,
    );
    tokio::spawn(consumer.run());

    let app = router::build_router(state);

    tracing::info!(%listen, "flowgauge-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
