//! Portfolio Tracker CLI
//!
//! Command-line interface for the portfolio tracker:
//! - Run the REST API the dashboard talks to
//! - Print the dashboard or an asset's details in the terminal
//! - Write a default configuration file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use portfolio_tracker::api::{serve, AppState};
use portfolio_tracker::client::{ClientConfig, ClientError, PortfolioClient, DEFAULT_API_BASE};
use portfolio_tracker::config::{generate_default_config, Config};
use portfolio_tracker::store::PortfolioStore;
use portfolio_tracker::{logging, view};

#[derive(Parser)]
#[command(name = "portfolio-tracker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read-only investment portfolio tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = DEFAULT_API_BASE, global = true)]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the portfolio API server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory containing portfolio.toml and transactions.csv
        #[arg(short, long)]
        data_dir: Option<String>,
    },

    /// Show the portfolio dashboard
    Dashboard,

    /// Show an asset with its transaction history
    Asset {
        /// Asset identifier
        id: String,
    },

    /// Write a default config file
    InitConfig {
        /// Output path
        #[arg(default_value = "config.toml")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            data_dir,
        } => {
            let mut config = match config {
                Some(path) => Config::load_with_env(&path)?,
                None => Config::load_default(),
            };
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if data_dir.is_some() {
                config.data.data_dir = data_dir;
            }

            logging::init(&config.logging);
            tracing::info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

            let store = match &config.data.data_dir {
                Some(dir) => PortfolioStore::load(dir)
                    .with_context(|| format!("Failed to load portfolio from {}", dir))?,
                None => {
                    tracing::info!("No data directory configured, serving demo portfolio");
                    PortfolioStore::seeded()?
                }
            };

            serve(AppState::new(store), &config.server).await?;
        }

        Commands::Dashboard => {
            let client = PortfolioClient::new(ClientConfig::new(&cli.api_url))?;
            let (portfolio, alerts) =
                tokio::join!(client.fetch_portfolio(), client.fetch_risk_alerts());

            let portfolio = portfolio.map_err(|e| unreachable_hint(e, &cli.api_url))?;
            let alerts = alerts.map_err(|e| unreachable_hint(e, &cli.api_url))?;
            print!("{}", view::render_dashboard(&portfolio, &alerts));
        }

        Commands::Asset { id } => {
            let client = PortfolioClient::new(ClientConfig::new(&cli.api_url))?;
            let details = client
                .fetch_asset_details(&id)
                .await
                .map_err(|e| unreachable_hint(e, &cli.api_url))?;
            print!("{}", view::render_asset_details(&details));
        }

        Commands::InitConfig { path } => {
            if path.exists() {
                anyhow::bail!("Refusing to overwrite existing file {:?}", path);
            }
            std::fs::write(&path, generate_default_config())
                .with_context(|| format!("Failed to write {:?}", path))?;
            println!("Config written to {:?}", path);
        }
    }

    Ok(())
}

fn unreachable_hint(error: ClientError, api_url: &str) -> anyhow::Error {
    match error {
        ClientError::Network(_) | ClientError::Timeout => anyhow::Error::new(error).context(format!(
            "Cannot reach the portfolio API at {} (start it with: portfolio-tracker serve)",
            api_url
        )),
        other => other.into(),
    }
}
