//! budgie CLI and REST API entry point.
//!
//! Binary name: `budgie`
//!
//! Parses CLI arguments, wires the scenario registry and narrative
//! service, then dispatches to a command handler or starts the REST API
//! server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use budgie_core::scenario::ScenarioRegistry;
use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,budgie=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need any wiring
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "budgie", &mut std::io::stdout());
        return Ok(());
    }

    match cli.command {
        Commands::Scenarios => {
            // Listing and showing never touch the provider, so no
            // credential is required.
            let registry = ScenarioRegistry::builtin()?;
            cli::scenario::list_scenarios(&registry, cli.json)?;
        }

        Commands::Show { scenario } => {
            let registry = ScenarioRegistry::builtin()?;
            cli::scenario::show_scenario(&registry, &scenario, cli.json)?;
        }

        Commands::Narrate {
            scenario,
            set,
            budget,
            offline,
        } => {
            let state = AppState::init(offline).await?;
            cli::narrate::narrate(&state, &scenario, &set, budget, cli.json).await?;
        }

        Commands::Serve { host, port } => {
            let state = AppState::init(false).await?;

            let host = host.unwrap_or_else(|| state.config.server.host.clone());
            let port = port.unwrap_or(state.config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} budgie API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

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
