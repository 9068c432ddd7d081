use anyhow::Result;
use clap::{Parser, Subcommand};
use link_desk::{config, server};
use tracing_subscriber::EnvFilter;

/// URL shortener and user-management services.
#[derive(Parser)]
#[command(name = "link-desk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the URL shortener (in-memory store)
    Shortener,

    /// Run the user-management API (SQLite)
    Users,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.print_summary();

    match cli.command {
        Commands::Shortener => server::run_shortener(config).await,
        Commands::Users => server::run_users(config).await,
    }
}
