//! Storefront action server: the webhook the dialogue engine calls to run
//! storefront actions, plus a health endpoint that probes the backend.

pub mod bootstrap;
pub mod health;
pub mod webhook;

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use storefront_actions::{ActionDispatcher, HttpBackend};
use storefront_core::config::{AppConfig, LoadOptions};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn init_logging(config: &AppConfig) {
    use storefront_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

/// Webhook, action listing and health routes behind one trace layer.
pub fn app(dispatcher: ActionDispatcher, backend: HttpBackend) -> Router {
    webhook::router(dispatcher).merge(health::router(backend)).layer(TraceLayer::new_for_http())
}

pub async fn run() -> Result<()> {
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config)?;
    let address = app.config.listen_address();
    let listener = TcpListener::bind(&address).await?;
    info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        bind_address = %address,
        "storefront action server listening"
    );

    let grace = Duration::from_secs(app.config.server.graceful_shutdown_secs);
    serve(listener, self::app(app.dispatcher, app.backend), wait_for_shutdown(), grace).await?;

    info!(
        event_name = "system.server.stopped",
        correlation_id = "shutdown",
        "storefront action server stopped"
    );
    Ok(())
}

/// Serves until `shutdown` resolves, then gives in-flight requests `grace` to finish.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
    grace: Duration,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (stop_tx, mut stop_rx) = watch::channel(false);
    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.wait_for(|stopping| *stopping).await;
            })
            .await
    });

    tokio::select! {
        finished = &mut server => return Ok(finished??),
        () = shutdown => {}
    }

    info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        grace_secs = grace.as_secs(),
        "draining in-flight requests"
    );
    let _ = stop_tx.send(true);

    match tokio::time::timeout(grace, &mut server).await {
        Ok(finished) => Ok(finished??),
        Err(_) => {
            warn!(
                event_name = "system.server.drain_timeout",
                correlation_id = "shutdown",
                "in-flight requests exceeded the shutdown grace period"
            );
            server.abort();
            Ok(())
        }
    }
}

async fn wait_for_shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(
            event_name = "system.server.signal_error",
            correlation_id = "shutdown",
            error = %error,
            "could not listen for ctrl-c; shutting down"
        );
    }
}
