//! Main entry point for the session-auth backend.
//!
//! This file initializes the Axum web server, loads configuration, and
//! serves the application router. Missing signing secrets abort startup.

use backend::build_app;
use backend::config::Config;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let app = build_app(&config);

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting session-auth server on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}
