use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use remote_jobs::collectors::{Collector, HttpFetcher};
use remote_jobs::config::{CollectorConfig, Command, Config};
use remote_jobs::{analysis, pipeline, storage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("remote_jobs=info")),
        )
        .init();

    let config = Config::parse();

    match &config.command {
        Command::Collect { .. } => {
            let collector_config = CollectorConfig::from_command(&config.command)
                .context("collect subcommand without collector settings")?;
            let fetcher = HttpFetcher::from_config(&collector_config)?;
            let collector = Collector::new(collector_config, fetcher);
            pipeline::run_collect(&collector).await?;
        }
        Command::Analyze { input } => {
            tracing::info!("Loading listings from '{}'", input.display());
            let dataset = storage::read_csv(input)
                .with_context(|| format!("failed to load '{}'", input.display()))?;
            if dataset.is_empty() {
                anyhow::bail!("'{}' contains no listings", input.display());
            }
            analysis::run(&dataset);
        }
    }

    Ok(())
}
