use anyhow::Result;
use clap::Parser;
use repoinfo::cli::CliArgs;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    info!("Starting repoinfo");

    if let Err(err) = repoinfo::run(&args) {
        error!("Report failed: {:#}", err);
        return Err(err);
    }

    Ok(())
}
