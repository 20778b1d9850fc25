use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// mailroom - contact form backend
#[derive(Parser)]
#[command(name = "mailroom")]
#[command(about = "Stores and serves contact form submissions", long_about = None)]
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
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mailroom::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mailroom::observability::init_observability(
        "mailroom",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        &config.observability.log_format,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => cli::migrate::migrate(config).await,
        Commands::Reset => cli::migrate::reset(config).await,
    }
}
