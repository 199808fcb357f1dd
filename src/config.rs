use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::directory_handler::LISTING_PATH;
use crate::error::Result;
use crate::frontier::TraversalOrder;
use crate::season_handler::SeasonWindow;

pub const DEFAULT_HOST: &str = "www.nfl.com";
pub const DEFAULT_YEAR: i32 = 2013;
pub const DEFAULT_SEASONS: u32 = 20;
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Query of the seed listings; the last-name initial is appended
const SEED_QUERY: &str = "category=lastName&playerType=current&d-447263-p=1&filter=";

/// Crawl settings, parsed from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "nfl_history_scraper", version, about = "Collect historical NFL player season stats into per-position CSV files")]
pub struct CrawlConfig {
    /// Host to crawl
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Last season to collect
    #[arg(long, default_value_t = DEFAULT_YEAR)]
    pub year: i32,

    /// Number of seasons to collect, ending at --year
    #[arg(long, default_value_t = DEFAULT_SEASONS)]
    pub seasons: u32,

    /// Directory the QB/RB/WR/TE/K CSV files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Last-name initials to seed the crawl with
    #[arg(long, default_value = ALPHABET)]
    pub letters: String,

    /// depth-first (stack) or breadth-first (queue)
    #[arg(long, default_value_t = TraversalOrder::DepthFirst)]
    pub order: TraversalOrder,

    /// Stop after dispatching this many pages
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Pooled connections kept to the host
    #[arg(long, default_value_t = 1)]
    pub max_connections: usize,

    /// Per-request timeout; none by default
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        CrawlConfig {
            host: DEFAULT_HOST.to_string(),
            year: DEFAULT_YEAR,
            seasons: DEFAULT_SEASONS,
            output_dir: PathBuf::from("."),
            letters: ALPHABET.to_string(),
            order: TraversalOrder::DepthFirst,
            max_pages: None,
            max_connections: 1,
            timeout_secs: None,
        }
    }
}

impl CrawlConfig {
    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&format!("http://{}/", self.host))?)
    }

    pub fn season_window(&self) -> SeasonWindow {
        SeasonWindow::ending_at(self.year, self.seasons)
    }

    /// One listing URL per configured initial, uppercased and without repeats
    pub fn seed_urls(&self) -> Vec<String> {
        let mut letters: Vec<char> = Vec::new();
        for letter in self.letters.chars().filter(|c| c.is_ascii_alphabetic()) {
            let letter = letter.to_ascii_uppercase();
            if !letters.contains(&letter) {
                letters.push(letter);
            }
        }

        letters
            .into_iter()
            .map(|letter| format!("{}?{}{}", LISTING_PATH, SEED_QUERY, letter))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seeds_cover_alphabet() {
        let seeds = CrawlConfig::default().seed_urls();
        assert_eq!(seeds.len(), 26);
        assert_eq!(
            seeds[0],
            "/players/search?category=lastName&playerType=current&d-447263-p=1&filter=A"
        );
        assert!(seeds[25].ends_with("filter=Z"));
    }

    #[test]
    fn test_letters_are_normalized() {
        let config = CrawlConfig { letters: "b, a b".to_string(), ..CrawlConfig::default() };
        let seeds = config.seed_urls();
        assert_eq!(seeds.len(), 2);
        assert!(seeds[0].ends_with("filter=B"));
        assert!(seeds[1].ends_with("filter=A"));
    }

    #[test]
    fn test_cli_defaults_match_default() {
        let parsed = CrawlConfig::parse_from(["nfl_history_scraper"]);
        let default = CrawlConfig::default();
        assert_eq!(parsed.host, default.host);
        assert_eq!(parsed.year, default.year);
        assert_eq!(parsed.seasons, default.seasons);
        assert_eq!(parsed.letters, default.letters);
        assert_eq!(parsed.order, default.order);
        assert_eq!(parsed.max_connections, 1);
        assert_eq!(parsed.max_pages, None);
    }

    #[test]
    fn test_cli_overrides() {
        let parsed = CrawlConfig::parse_from([
            "nfl_history_scraper",
            "--year",
            "2012",
            "--seasons",
            "5",
            "--order",
            "breadth-first",
            "--letters",
            "Q",
            "--max-pages",
            "10",
        ]);
        assert_eq!(parsed.order, TraversalOrder::BreadthFirst);
        assert_eq!(parsed.max_pages, Some(10));
        let window = parsed.season_window();
        assert_eq!(window.first(), Some("2008"));
        assert_eq!(window.last(), Some("2012"));
        assert_eq!(parsed.seed_urls().len(), 1);
    }

    #[test]
    fn test_base_url() {
        let url = CrawlConfig::default().base_url().unwrap();
        assert_eq!(url.as_str(), "http://www.nfl.com/");
    }
}
