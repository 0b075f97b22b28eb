//! Alert Bridge - Entry Point
//!
//! Reads newline-delimited JSON arrays of alerts from stdin and delivers them
//! through the batcher until EOF or Ctrl-C.

use clap::Parser;

/// Command line interface for Alert Bridge
#[derive(Parser, Debug)]
#[command(name = "alertbridge")]
#[command(about = "Alert Bridge - Batched alert delivery to an external Alertmanager")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    alertbridge::run(cli.config.as_deref()).await
}
