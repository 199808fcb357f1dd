use scraper::Html;

use crate::directory_handler::{process_listing_page, LISTING_TITLE};
use crate::error::{CrawlError, Result};
use crate::frontier::Frontier;
use crate::net::PageSource;
use crate::output::OutputSink;
use crate::player_handler::{process_player_page, PlayerOutcome};
use crate::season_handler::SeasonWindow;
use crate::utils::{element_text, selector};

/// The two page shapes the crawl understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Listing,
    Profile,
}

/// Result of dispatching one URL
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// A listing page and the number of new links it queued
    Listing { discovered: usize },
    Profile(PlayerOutcome),
}

/// A page is a listing if its title is the listing title, otherwise a profile
pub fn classify_page(document: &Html) -> Result<PageKind> {
    let title_selector = selector("title")?;
    let title = document
        .select(&title_selector)
        .next()
        .ok_or_else(|| CrawlError::MissingElement("title".to_string()))?;

    if element_text(title).trim() == LISTING_TITLE {
        Ok(PageKind::Listing)
    } else {
        Ok(PageKind::Profile)
    }
}

/// Fetches a URL and routes the page to the listing or profile handler.
pub async fn dispatch<S: PageSource>(
    source: &S,
    url: &str,
    frontier: &mut Frontier,
    sink: &OutputSink,
    seasons: &SeasonWindow,
) -> Result<PageOutcome> {
    let html = source.fetch(url).await?;
    let document = Html::parse_document(&html);

    match classify_page(&document)? {
        PageKind::Listing => {
            let discovered = process_listing_page(&document, source.base_url(), frontier)?;
            Ok(PageOutcome::Listing { discovered })
        }
        PageKind::Profile => {
            let outcome = process_player_page(&document, seasons, sink)?;
            Ok(PageOutcome::Profile(outcome))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_title() {
        let listing = Html::parse_document("<html><head><title> NFL Players\n</title></head></html>");
        assert_eq!(classify_page(&listing).unwrap(), PageKind::Listing);

        let profile = Html::parse_document("<html><head><title>Tom Brady - NFL.com</title></head></html>");
        assert_eq!(classify_page(&profile).unwrap(), PageKind::Profile);

        let near_miss = Html::parse_document("<html><head><title>NFL Players - Page 2</title></head></html>");
        assert_eq!(classify_page(&near_miss).unwrap(), PageKind::Profile);
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let document = Html::parse_fragment("<div>no head</div>");
        assert!(matches!(classify_page(&document), Err(CrawlError::MissingElement(_))));
    }
}
