use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use financeflow_notification::{EmailService, Mailer};

/// financeflow - FinanceFlow marketing site and contact relay
#[derive(Parser)]
#[command(name = "financeflow")]
#[command(about = "FinanceFlow marketing site and contact relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = financeflow::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    financeflow::observability::init_observability(
        "financeflow",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
    }
}

async fn serve_command(
    mut config: financeflow::config::Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    // CLI flags win over config file and environment
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    // The SMTP transport is built once here and shared across all
    // requests. Mail settings are not validated at this point; a bad
    // account only surfaces as a delivery-time failure.
    let mailer: Arc<dyn Mailer> = Arc::new(EmailService::new(&config.email)?);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = financeflow::create_app(config, mailer);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
