use anyhow::Result;
use clap::{Parser, Subcommand};

/// issuetrack - Issue tracking
#[derive(Parser)]
#[command(name = "issuetrack")]
#[command(about = "Issue tracker web application", long_about = None)]
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
    /// Run database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = issuetrack::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    issuetrack::observability::init_observability(
        "issuetrack",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.to_owned());
            let port = port.unwrap_or(config.server.port);

            tracing::info!("Starting issuetrack server...");
            issuetrack::server::serve(config, host, port).await
        }
        Commands::Migrate => migrate_command(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: issuetrack::Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool = issuetrack::db::create_pool(&config.database.url, 1).await?;
    issuetrack::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Database migrations completed successfully");

    Ok(())
}
