//! glossa-server - HTTP server binary.

use anyhow::Context;
use glossa_core::GlossaConfig;
use glossa_server::{create_server, AppState};
use tokio::signal;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive(Level::INFO.into())
        .add_directive("glossa_server=debug".parse()?);

    let json = std::env::var("GLOSSA_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
    Ok(())
}

/// Load `GLOSSA_CONFIG` if set, then apply `GLOSSA_*` overrides.
fn load_config() -> anyhow::Result<GlossaConfig> {
    let mut config = match std::env::var("GLOSSA_CONFIG") {
        Ok(path) => {
            info!("Loading configuration from {}", path);
            GlossaConfig::from_file(&path)
                .with_context(|| format!("failed to load config file {}", path))?
        }
        Err(_) => GlossaConfig::default(),
    };
    config
        .apply_env()
        .context("invalid GLOSSA_* environment variable")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing()?;

    let config = load_config()?;
    let addr = config.server.bind_address();

    let state = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || AppState::from_config(config)).await??
    };

    let app = create_server(state);

    info!("Starting glossa-server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
