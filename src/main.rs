//! todo-server - REST API over a JSON-backed todo list
//!
//! Usage:
//!   todo-server [-h host] [-p port] [-f file]

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;

use todo_rest::config::ServerConfig;
use todo_rest::handlers::{build_router, TodoStore};
use todo_rest::tracing_setup;

#[derive(Parser)]
#[command(name = "todo-server")]
#[command(about = "REST API server for the todo list")]
#[command(disable_help_flag = true)]
struct Cli {
    /// Server host
    #[arg(short = 'h', long)]
    host: Option<String>,

    /// Server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// File name to store the list
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Fail to start server: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    tracing_setup::init_tracing();

    // Environment first, flags override
    let mut config = ServerConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(file) = cli.file {
        config.storage_path = file;
    }
    config.log();

    let store = TodoStore::open(config.storage_path.clone())
        .with_context(|| format!("cannot open {}", config.storage_path.display()))?;
    info!(items = store.all().len(), "Todo list loaded");

    let app = build_router(
        Arc::new(store),
        Duration::from_secs(config.request_timeout_secs),
    );

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    info!(
        "Server started at {}, port {}, using file {}",
        config.host,
        config.port,
        config.storage_path.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {e}");
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

    info!("Shutdown signal received, starting graceful shutdown");
}
