//! Parley HTTP server entry point.
//!
//! Binary name: `parley`
//!
//! Parses CLI arguments, loads configuration, wires the chat orchestrator to
//! the completion provider, and serves the JSON API until Ctrl+C or SIGTERM.

mod cli;
mod http;
mod state;
mod sweeper;

#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;

use parley_core::chat::prompt::render_system_prompt;
use parley_infra::catalog::resolve_catalog;
use parley_infra::config::{apply_env_overrides, load_config};
use parley_observe::tracing_setup::{init_tracing, shutdown_tracing};
use parley_types::config::ServiceConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_filter(), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "parley exited with an error");
    }
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref()).await?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    match cli.command.unwrap_or_default() {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            serve(config).await
        }
        Commands::Prompt => {
            let catalog = resolve_catalog(&config)?;
            println!("{}", render_system_prompt(&catalog));
            Ok(())
        }
    }
}

async fn serve(config: ServiceConfig) -> anyhow::Result<()> {
    let state = AppState::init(&config)?;

    let cancel = CancellationToken::new();
    let sweeper = sweeper::spawn_session_sweeper(
        state.chat.clone(),
        Duration::from_secs(config.session.background_sweep_secs),
        cancel.clone(),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %addr,
        service = %config.service_name,
        "Parley listening"
    );

    let router = http::router::build_router(state, &config.server.allowed_origins);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    cancel.cancel();
    if let Some(handle) = sweeper {
        sweeper::join_sweeper(handle).await;
    }
    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
