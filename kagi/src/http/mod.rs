use self::handler::{health, keygen};
use crate::{signal, state::Zustand};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use eyre::Context;
use kagi_config::server;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

mod extractor;
mod handler;

pub use self::extractor::VerifiedWebhook;

pub fn create_router(state: Zustand, server_config: &server::Configuration) -> Router {
    Router::new()
        .route(&server_config.webhook_path, post(keygen::post))
        .route("/health", get(health::get))
        .layer(DefaultBodyLimit::max(server_config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[instrument(skip_all, fields(port = %server_config.port))]
pub async fn run(
    state: Zustand,
    server_config: server::Configuration,
    shutdown_signal: signal::Receiver,
) -> eyre::Result<()> {
    let router = create_router(state, &server_config);
    let listener = TcpListener::bind((server_config.host.as_str(), server_config.port))
        .await
        .wrap_err_with(|| format!("Failed to bind to {}:{}", server_config.host, server_config.port))?;

    info!(
        address = %listener.local_addr()?,
        path = %server_config.webhook_path,
        "listening for webhooks"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal.wait())
        .await?;

    Ok(())
}
