use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lookword_config::Config;
use lookword_config::server::ServerConfig;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod error;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

use self::cli::{Args, LogFormat};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_format);

    let config = load_config(&args)?;

    // Serving without a dictionary is pointless
    let state = match AppState::from_config(&config).await {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Startup failed: {e:#}");
            return Err(e);
        }
    };

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl+c: {e}");
            return;
        }
        tracing::info!("Shutdown requested");
        shutdown.cancel();
    });

    serve(state, &config.server, cancel).await
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// Defaults < config file < environment < command line
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.apply_env(|key| std::env::var(key).ok());
            config
        }
        None => Config::new(),
    };
    args.apply(&mut config);
    Ok(config)
}

pub async fn serve(
    state: Arc<AppState>,
    server: &ServerConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let prefix = server.normalized_prefix();
    let app = routes::router(state, prefix.as_deref());

    let addr = server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(
        "Listening on {} (api at {})",
        listener.local_addr()?,
        prefix.as_deref().unwrap_or("/")
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
