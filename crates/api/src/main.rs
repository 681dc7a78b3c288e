//! Polaris AI web server
//!
//! Main entry point: loads configuration, installs logging and serves the
//! application router until Ctrl+C or SIGTERM.

use anyhow::Context;
use polaris_lib::utils::logging::{error_label, init_tracing};
use polaris_lib::{router, AppContext};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration
    let dotenv = dotenvy::dotenv();

    let config = match polaris_infra::config::load() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(polaris_domain::LogFormat::default());
            error!(error_type = error_label(&err), error = %err, "failed to load configuration");
            return Err(err.into());
        }
    };
    init_tracing(config.server.log_format);

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "no .env file loaded"),
    }

    let bind_addr = config.server.bind_addr.clone();
    let ctx = AppContext::new(config).context("failed to build application context")?;
    let app = router(ctx);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %listener.local_addr()?, "Polaris listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Polaris stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}
