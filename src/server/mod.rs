//! HTTP surface: a single `GET /api/scrape` endpoint.

mod error;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use clap::Args;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

pub use error::ApiError;

use crate::client::ScrapeService;
use crate::config::DEFAULT_BIND;
use crate::telemetry::{self};
use crate::telemetry::ops::serve::Phase as ServePhase;

#[derive(Args)]
pub struct ServeCmd {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ScrapeService>,
}

pub fn router(service: ScrapeService) -> Router {
    let state = AppState { service: Arc::new(service) };
    Router::new()
        .route("/api/scrape", get(routes::scrape_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(service: ScrapeService, args: ServeCmd) -> Result<()> {
    let log = telemetry::serve();
    let root = log.root_span_kv([("bind", args.bind.to_string())]);

    async {
        let listener = tokio::net::TcpListener::bind(args.bind)
            .instrument(log.span(&ServePhase::Bind))
            .await
            .with_context(|| format!("bind {}", args.bind))?;
        log.info(format!("🌐 Listening on http://{}/api/scrape", args.bind));

        axum::serve(listener, router(service))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("http server")?;

        log.info("👋 Server stopped");
        Ok(())
    }
    .instrument(root)
    .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
