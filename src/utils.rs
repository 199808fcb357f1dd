use scraper::{ElementRef, Selector};

use crate::error::{CrawlError, Result};

/// Compiles a CSS selector, mapping parse failures into a crawl error
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| CrawlError::Selector(format!("{}: {:?}", css, e)))
}

/// Concatenated text of an element and its descendants
pub fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

/// Removes every whitespace character, not just the ends
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
