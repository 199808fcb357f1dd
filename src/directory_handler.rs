use scraper::Html;
use tracing::debug;
use url::Url;

use crate::error::{CrawlError, Result};
use crate::frontier::Frontier;
use crate::utils::selector;

/// Title of the player search pages
pub const LISTING_TITLE: &str = "NFL Players";

/// Path of the player search listing, shared by the seeds and its pagination links
pub const LISTING_PATH: &str = "/players/search";

/// Links worth following from a listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `/player/<slug>/<id>/profile`
    Profile,
    /// Another page of the search listing
    Listing,
}

/// Classifies an href found on a listing page.
/// Returns the site-relative path (plus query) used as the frontier key,
/// or `None` for links that lead off the crawl host or to other page types.
pub fn classify_link(base: &Url, href: &str) -> Option<(LinkKind, String)> {
    let url = base.join(href).ok()?;
    if url.host_str() != base.host_str() {
        return None;
    }

    let path = url.path();
    let kind = if is_profile_path(path) {
        LinkKind::Profile
    } else if path == LISTING_PATH {
        LinkKind::Listing
    } else {
        return None;
    };

    let key = match url.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };
    Some((kind, key))
}

fn is_profile_path(path: &str) -> bool {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match segments.as_slice() {
        ["player", slug, id, "profile"] => {
            !slug.is_empty() && !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

/// Collects the followable links inside the search results container, in page order
pub fn extract_listing_links(document: &Html, base: &Url) -> Result<Vec<(LinkKind, String)>> {
    let results_selector = selector("#searchResults")?;
    let anchor_selector = selector("a")?;

    let results = document
        .select(&results_selector)
        .next()
        .ok_or_else(|| CrawlError::MissingElement("#searchResults".to_string()))?;

    Ok(results
        .select(&anchor_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| classify_link(base, href))
        .collect())
}

/// Enqueues every unseen link of a listing page. Returns how many were new.
pub fn process_listing_page(document: &Html, base: &Url, frontier: &mut Frontier) -> Result<usize> {
    let mut discovered = 0;
    for (kind, link) in extract_listing_links(document, base)? {
        if frontier.enqueue(&link) {
            debug!("Queued {:?} link {}", kind, link);
            discovered += 1;
        }
    }
    Ok(discovered)
}

// ============================================================================
// TESTS
// ============================================================================
