use scraper::{ElementRef, Html};
use tracing::debug;

use crate::error::{CrawlError, Result};
use crate::output::OutputSink;
use crate::schema::Position;
use crate::season_handler::{parse_season_row, SeasonRecord, SeasonWindow};
use crate::utils::{element_text, selector};

/// Text shown in the summary table of a player who never recorded a stat
pub const NO_STATS_PHRASE: &str = "This player does not have any statistics...";

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// What a profile page turned out to contain
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerOutcome {
    /// The player has no statistics at all
    NoStats,
    /// The player plays a position that is not collected
    UnsupportedPosition(String),
    Extracted {
        position: Position,
        name: String,
        records: Vec<SeasonRecord>,
    },
}

impl PlayerOutcome {
    /// Number of dataset rows this outcome produces
    pub fn record_count(&self) -> usize {
        match self {
            PlayerOutcome::Extracted { records, .. } => records.len(),
            _ => 0,
        }
    }
}

// ============================================================================
// PROFILE PARSING
// ============================================================================

/// Parses a player profile into an outcome without touching the datasets.
pub fn extract_player_page(document: &Html, seasons: &SeasonWindow) -> Result<PlayerOutcome> {
    if !has_statistics(document)? {
        return Ok(PlayerOutcome::NoStats);
    }

    let code = position_code(document)?;
    let position = match code.parse::<Position>() {
        Ok(position) => position,
        Err(_) => return Ok(PlayerOutcome::UnsupportedPosition(code)),
    };

    let name = player_name(document)?;
    let records = career_rows(document, seasons)?
        .into_iter()
        .map(|row| {
            Ok(SeasonRecord {
                position,
                name: name.clone(),
                values: parse_season_row(row)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PlayerOutcome::Extracted { position, name, records })
}

/// Extracts a profile and writes its records.
/// All records are checked against the schema first, so a malformed page writes nothing.
pub fn process_player_page(
    document: &Html,
    seasons: &SeasonWindow,
    sink: &OutputSink,
) -> Result<PlayerOutcome> {
    let outcome = extract_player_page(document, seasons)?;

    if let PlayerOutcome::Extracted { position, name, records } = &outcome {
        for record in records {
            record.validate()?;
        }
        for record in records {
            sink.append(record)?;
        }
        debug!("Wrote {} {} seasons for {}", records.len(), position, name);
    }

    Ok(outcome)
}

/// Reads the second cell of the summary data table
fn has_statistics(document: &Html) -> Result<bool> {
    let table_selector = selector("table.data-table1")?;
    let cell_selector = selector("td")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| CrawlError::MissingElement("table.data-table1".to_string()))?;
    let cell = table
        .select(&cell_selector)
        .nth(1)
        .ok_or_else(|| CrawlError::MissingElement("second cell of table.data-table1".to_string()))?;

    Ok(!element_text(cell).contains(NO_STATS_PHRASE))
}

/// Last token of the player-number element, e.g. "#18 QB" -> "QB"
fn position_code(document: &Html) -> Result<String> {
    let number_selector = selector("span.player-number")?;
    let number = document
        .select(&number_selector)
        .next()
        .ok_or_else(|| CrawlError::MissingElement("span.player-number".to_string()))?;

    let text = element_text(number);
    Ok(text.split_whitespace().last().unwrap_or_default().to_string())
}

fn player_name(document: &Html) -> Result<String> {
    let name_selector = selector("span.player-name")?;
    let name = document
        .select(&name_selector)
        .next()
        .ok_or_else(|| CrawlError::MissingElement("span.player-name".to_string()))?;

    Ok(element_text(name).trim_end().to_string())
}

/// Rows of the career table (second table on the page) whose season is in the window
fn career_rows<'a>(document: &'a Html, seasons: &SeasonWindow) -> Result<Vec<ElementRef<'a>>> {
    let table_selector = selector("table")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;

    let career = document
        .select(&table_selector)
        .nth(1)
        .ok_or_else(|| CrawlError::MissingElement("career statistics table".to_string()))?;

    let mut rows = Vec::new();
    for row in career.select(&row_selector) {
        // Header rows only carry <th> cells
        let Some(season_cell) = row.select(&cell_selector).next() else {
            continue;
        };
        if !seasons.contains(element_text(season_cell).trim()) {
            continue;
        }
        if let Some(season_row) = closest_row(season_cell) {
            rows.push(season_row);
        }
    }

    Ok(rows)
}

fn closest_row(cell: ElementRef) -> Option<ElementRef> {
    cell.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "tr")
}

// ============================================================================
// TESTS
// ============================================================================
