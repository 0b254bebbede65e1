//! meli-dataset - MercadoLibre search dataset builder CLI
//!
//! Pages through the search API for a configured query, keeps listings
//! in the target condition, and writes the projected fields to a CSV
//! file.

use anyhow::Result;
use clap::Parser;
use meli_dataset::commands::BuildCommand;
use meli_dataset::config::Config;
use meli_dataset::export;
use meli_dataset::meli::sites::Site;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meli-dataset",
    version,
    about = "MercadoLibre search dataset builder CLI",
    long_about = "Pages through the MercadoLibre search API for a configured query and \
                  writes the matching listings to a CSV dataset."
)]
struct Cli {
    /// Site to query (MLA, MLB, MLM); anything else falls back to the default
    site: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, env = "MELI_OUTPUT")]
    output: Option<PathBuf>,

    /// Listing condition to keep
    #[arg(long, env = "MELI_CONDITION")]
    condition: Option<String>,

    /// Number of result pages to request
    #[arg(long, env = "MELI_PAGES")]
    pages: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(condition) = cli.condition {
        config.condition = condition;
    }
    if let Some(pages) = cli.pages {
        config.pages = pages;
    }

    let (site, used_default) = Site::resolve(cli.site.as_deref());
    if used_default {
        println!("Default site used: {}", site);
    }

    let cmd = BuildCommand::new(config.clone());
    let records = cmd.execute(site).await?;

    export::write_csv(&records, &config.output)?;
    info!("Wrote {} records to {}", records.len(), config.output.display());

    Ok(())
}
