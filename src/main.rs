//! hash-router
//!
//! Route table for the single-page application, with a small CLI to inspect it
//! and a development server that serves the application shell.
//!
//! # Architecture Overview
//!
//! ```text
//!   config (TOML or defaults)
//!        │
//!        ▼
//!   lifecycle::build_router ──▶ routing::Router (immutable)
//!                                 │
//!           ┌─────────────────────┼──────────────────────┐
//!           ▼                     ▼                      ▼
//!     resolve / href        navigation::Navigator     http::DevServer
//!       (CLI)               (history + view host)     (shell + JSON API)
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;

use hash_router::history::{HashHistory, HashLocation};
use hash_router::http::{shell::load_shell, DevServer};
use hash_router::config::LOG_LEVELS;
use hash_router::lifecycle::{build_router, load};
use hash_router::observability::{init_logging, metrics};
use hash_router::routing::Params;

#[derive(Parser)]
#[command(name = "hash-router")]
#[command(about = "Hash-mode route table for the single-page application", long_about = None)]
struct Cli {
    /// TOML configuration file; the built-in route table is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(LOG_LEVELS))]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve locations (URLs, `#/fragments` or paths) and print JSON
    Resolve {
        #[arg(required = true)]
        locations: Vec<String>,
    },
    /// Print the route table
    Routes,
    /// Print the href for a named route
    Href {
        name: String,
        /// Parameters as KEY=VALUE
        params: Vec<String>,
    },
    /// Run the development server
    Serve {
        /// Override the configured bind address.
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    // Logs go to stderr so `resolve` output stays pipeable
    init_logging(&config.observability.log_level);
    match &cli.config {
        Some(path) => tracing::info!(path = %path.display(), routes = config.routes.len(), "Configuration loaded"),
        None => tracing::debug!("Using built-in route table"),
    }

    let router = build_router(&config)?;
    let history = HashHistory::new(config.history.base.clone(), HashLocation::default());

    match cli.command {
        Commands::Resolve { locations } => {
            let mut all_matched = true;
            for input in &locations {
                let location = HashLocation::parse(input)?;
                let resolution = router.resolve_location(&location);
                all_matched &= resolution.is_matched();
                println!("{}", serde_json::to_string(&resolution)?);
            }
            if !all_matched {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Routes => {
            let routes: Vec<_> = router
                .routes()
                .map(|r| {
                    serde_json::json!({
                        "name": r.name(),
                        "path": r.pattern().to_string(),
                        "view": r.view(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Href { name, params } => {
            let params = parse_params(&params)?;
            let path = router.build_path(&name, &params)?;
            println!("{}", history.create_href(&path));
        }
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind_address = bind;
            }

            tracing::info!(
                bind_address = %config.server.bind_address,
                log_level = %config.observability.log_level,
                "Starting dev server"
            );

            if config.observability.metrics_enabled {
                match config.observability.metrics_address.parse() {
                    Ok(addr) => metrics::init_metrics(addr),
                    Err(_) => tracing::error!(
                        metrics_address = %config.observability.metrics_address,
                        "Failed to parse metrics address"
                    ),
                }
            }

            let shell = load_shell(&config.server, &router, &config.history.base)?;
            let listener = TcpListener::bind(&config.server.bind_address).await?;
            let server = DevServer::new(config, Arc::new(router), shell);
            server.run(listener).await?;
            tracing::info!("Shutdown complete");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_params(pairs: &[String]) -> Result<Params, String> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .ok_or_else(|| format!("expected KEY=VALUE, got `{pair}`"))
        })
        .collect()
}
