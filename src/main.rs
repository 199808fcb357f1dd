use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use nfl_history_scraper::logging::init_logging;
use nfl_history_scraper::{CrawlConfig, Crawler};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let config = CrawlConfig::parse();

    info!(
        "Writing QB/RB/WR/TE/K datasets to {}",
        config.output_dir.display()
    );

    let mut crawler = Crawler::from_config(&config).context("Failed to set up the crawler")?;
    let summary = crawler
        .run()
        .await
        .context("Failed to initialize the output datasets")?;

    for (position, rows) in &summary.rows_written {
        info!("{}: {} season rows", position, rows);
    }
    summary.print();

    Ok(())
}
