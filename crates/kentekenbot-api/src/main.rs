//! Kentekenbot CLI and REST API entry point.
//!
//! Binary name: `kbot`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the
//! appropriate command handler or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;

use kentekenbot_infra::config::load_with_env;
use kentekenbot_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let enable_otel = matches!(cli.command, Commands::Serve { otel: true, .. });
    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), enable_otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let config = load_with_env(&cli.config).await;

    match cli.command {
        Commands::Extract { text } => {
            cli::extract::extract(&text, cli.json)?;
        }

        Commands::Lookup { plate } => {
            cli::lookup::lookup(&config.registry, &plate, cli.json).await?;
        }

        Commands::Serve { port, host, .. } => {
            let state = AppState::from_config(&config)?;

            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} Kentekenbot API listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }
            tracing::info!(%addr, "server started");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            shutdown_tracing();
            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
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
                tracing::error!(error = %err, "failed to install SIGTERM handler");
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

    tracing::info!("shutdown signal received");
}
