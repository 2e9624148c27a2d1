//! HTTP serving: router assembly, bind, graceful shutdown

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::signal;
use tower_http::trace::TraceLayer;

use calculator::api::rest::routes::build_router;
use calculator::domain::Service;

use crate::config::AppConfig;
use crate::cors::build_cors_layer;

/// Assemble the application router: module routes, CORS, request tracing.
pub fn build_app(config: &AppConfig, service: Arc<Service>) -> Router {
    let mut router = build_router(service, config.server.enable_docs);

    if let Some(cors) = build_cors_layer(&config.cors) {
        router = router.layer(cors);
    }

    router.layer(TraceLayer::new_for_http().make_span_with(
        |req: &axum::http::Request<axum::body::Body>| {
            tracing::info_span!(
                "http_request",
                method = %req.method(),
                uri = %req.uri().path(),
            )
        },
    ))
}

/// Bind and serve until Ctrl+C or SIGTERM.
///
/// # Errors
/// Fails when the bind address is invalid or the socket cannot be bound.
pub async fn run(config: AppConfig) -> Result<()> {
    let service = Arc::new(Service::new(config.calculator.history_capacity));
    let app = build_app(&config, service);

    let addr: std::net::SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.server.bind_addr))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("HTTP server bound on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

/// Wait for termination signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(%e, "Error handling Ctrl+C signal");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut handler) => {
                handler.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        () = sigterm => tracing::info!("Received SIGTERM signal"),
    }

    tracing::info!("HTTP server shutting down gracefully");
}
