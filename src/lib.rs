pub mod config;
pub mod crawler;
pub mod directory_handler;
pub mod dispatcher;
pub mod error;
pub mod frontier;
pub mod logging;
pub mod net;
pub mod output;
pub mod player_handler;
pub mod schema;
pub mod season_handler;
pub mod utils;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================
pub use config::CrawlConfig;
pub use crawler::{format_elapsed, CrawlSummary, Crawler};
pub use directory_handler::{classify_link, extract_listing_links, process_listing_page, LinkKind, LISTING_TITLE};
pub use dispatcher::{classify_page, dispatch, PageKind, PageOutcome};
pub use error::{CrawlError, Result};
pub use frontier::{Frontier, TraversalOrder};
pub use net::{HttpSource, PageSource};
pub use output::OutputSink;
pub use player_handler::{extract_player_page, process_player_page, PlayerOutcome, NO_STATS_PHRASE};
pub use schema::{Position, POSITIONS};
pub use season_handler::{parse_season_row, Field, SeasonRecord, SeasonWindow};
