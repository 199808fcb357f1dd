use chrono::{DateTime, Duration, Local};
use std::collections::BTreeMap;
use tracing::{debug, error, info};

use crate::config::CrawlConfig;
use crate::dispatcher::{dispatch, PageOutcome};
use crate::error::Result;
use crate::frontier::Frontier;
use crate::net::{HttpSource, PageSource};
use crate::output::OutputSink;
use crate::player_handler::PlayerOutcome;
use crate::schema::Position;
use crate::season_handler::SeasonWindow;

// ============================================================================
// SUMMARY
// ============================================================================

/// Counters reported once the frontier drains
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    pub crawled: usize,
    pub errors: usize,
    pub listings: usize,
    pub no_stats: usize,
    pub unsupported: usize,
    pub rows_written: BTreeMap<Position, usize>,
    pub started_at: DateTime<Local>,
    pub elapsed: Duration,
}

impl CrawlSummary {
    fn new(started_at: DateTime<Local>) -> Self {
        CrawlSummary {
            crawled: 0,
            errors: 0,
            listings: 0,
            no_stats: 0,
            unsupported: 0,
            rows_written: BTreeMap::new(),
            started_at,
            elapsed: Duration::zero(),
        }
    }

    fn record(&mut self, outcome: &PageOutcome) {
        match outcome {
            PageOutcome::Listing { .. } => self.listings += 1,
            PageOutcome::Profile(PlayerOutcome::NoStats) => self.no_stats += 1,
            PageOutcome::Profile(PlayerOutcome::UnsupportedPosition(_)) => self.unsupported += 1,
            PageOutcome::Profile(PlayerOutcome::Extracted { position, records, .. }) => {
                *self.rows_written.entry(*position).or_insert(0) += records.len();
            }
        }
    }

    pub fn total_rows(&self) -> usize {
        self.rows_written.values().sum()
    }

    /// Prints the three-line run summary
    pub fn print(&self) {
        println!("Number of crawled pages: {}", self.crawled);
        println!("Number of errors: {}", self.errors);
        println!("Elapsed time: {}", format_elapsed(self.elapsed));
    }
}

/// Formats a duration as H:MM:SS.mmm
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.num_milliseconds().max(0);
    let seconds = millis / 1000;
    format!(
        "{}:{:02}:{:02}.{:03}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60,
        millis % 1000
    )
}

// ============================================================================
// CRAWL LOOP
// ============================================================================

/// Owns the frontier and drives fetch -> classify -> extract until it drains
pub struct Crawler<S: PageSource> {
    source: S,
    frontier: Frontier,
    sink: OutputSink,
    seasons: SeasonWindow,
    max_pages: Option<usize>,
}

impl Crawler<HttpSource> {
    /// HTTP crawler for the configured host, seeded with the configured listings
    pub fn from_config(config: &CrawlConfig) -> Result<Self> {
        let source = HttpSource::new(config)?;
        Ok(Crawler::new(source, config))
    }
}

impl<S: PageSource> Crawler<S> {
    pub fn new(source: S, config: &CrawlConfig) -> Self {
        let mut crawler = Crawler {
            source,
            frontier: Frontier::new(config.order),
            sink: OutputSink::new(&config.output_dir),
            seasons: config.season_window(),
            max_pages: config.max_pages,
        };
        crawler.seed(config.seed_urls());
        crawler
    }

    /// Queues additional start URLs
    pub fn seed<I, U>(&mut self, urls: I)
    where
        I: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        for url in urls {
            self.frontier.enqueue(url.as_ref());
        }
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// Truncates the datasets, then crawls until no URL is left.
    /// Page failures are counted and logged; only dataset initialization can fail the run.
    pub async fn run(&mut self) -> Result<CrawlSummary> {
        let mut summary = CrawlSummary::new(Local::now());
        self.sink.initialize_all()?;

        info!(
            "Crawling {} seeds, seasons {}-{}, {} order",
            self.frontier.queued_len(),
            self.seasons.first().unwrap_or("?"),
            self.seasons.last().unwrap_or("?"),
            self.frontier.order()
        );

        let mut dispatched = 0;
        loop {
            if self.max_pages.is_some_and(|max| dispatched >= max) {
                info!("Reached page limit, {} URLs left unvisited", self.frontier.queued_len());
                break;
            }
            let Some(url) = self.frontier.pop() else {
                break;
            };
            if self.frontier.is_crawled(&url) {
                continue;
            }

            info!("{}", url);
            dispatched += 1;
            match dispatch(&self.source, &url, &mut self.frontier, &self.sink, &self.seasons).await {
                Ok(outcome) => {
                    debug!("{} -> {:?}", url, outcome);
                    summary.record(&outcome);
                }
                Err(e) => {
                    summary.errors += 1;
                    error!("{}: {}", url, e);
                }
            }
            self.frontier.mark_crawled(&url);
        }

        summary.crawled = self.frontier.crawled_len();
        summary.elapsed = Local::now() - summary.started_at;
        info!(
            "Crawl finished: {} pages, {} errors, {} rows written",
            summary.crawled,
            summary.errors,
            summary.total_rows()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::milliseconds(0)), "0:00:00.000");
        assert_eq!(format_elapsed(Duration::milliseconds(61_005)), "0:01:01.005");
        assert_eq!(format_elapsed(Duration::seconds(3 * 3600 + 59)), "3:00:59.000");
    }
}
