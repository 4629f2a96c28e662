mod config;
mod crawl;
mod error;
mod models;
mod output;
mod scrapers;
mod text;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use config::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Scrape Incruit job search results into a CSV file
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file; keys left out keep their defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Where to write the CSV (overrides the config file)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    info!("💼 Job Scout - Incruit Scraper");
    info!("Search: {}", config.search.base_url);

    let extracted = crawl::run(&config)
        .await
        .with_context(|| format!("scrape of {} failed", config.search.base_url))?;

    println!("Done. Extracted: {}", extracted);

    Ok(())
}
