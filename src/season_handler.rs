use scraper::ElementRef;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

use crate::error::{CrawlError, Result};
use crate::schema::Position;
use crate::utils::{element_text, selector, strip_whitespace};

/// Placeholder the career tables use for a stat that was not recorded
pub const MISSING_PLACEHOLDER: &str = "--";

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One cell of a season row
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Value(String),
    /// Written as a floating-point NaN
    Missing,
}

impl Field {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Field::Value(value) => serializer.serialize_str(value),
            Field::Missing => serializer.serialize_f64(f64::NAN),
        }
    }
}

/// One season of one player's career, in the owning position's column order
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonRecord {
    pub position: Position,
    pub name: String,
    /// Season, team, then the stat columns
    pub values: Vec<Field>,
}

impl SeasonRecord {
    /// Full output row: the player name followed by the season values
    pub fn row(&self) -> Vec<Field> {
        let mut row = Vec::with_capacity(self.values.len() + 1);
        row.push(Field::Value(self.name.clone()));
        row.extend(self.values.iter().cloned());
        row
    }

    /// Checks the row width against the position schema
    pub fn validate(&self) -> Result<()> {
        let expected = self.position.schema().len();
        let actual = self.values.len() + 1;
        if expected != actual {
            return Err(CrawlError::RecordShape {
                position: self.position,
                name: self.name.clone(),
                expected,
                actual,
            });
        }
        Ok(())
    }
}

/// Season identifiers that qualify a career-table row for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonWindow {
    seasons: BTreeSet<String>,
}

impl SeasonWindow {
    /// The `span` seasons ending at (and including) `last_season`
    pub fn ending_at(last_season: i32, span: u32) -> SeasonWindow {
        let first = last_season - span as i32 + 1;
        let seasons = (first..=last_season).map(|year| year.to_string()).collect();
        SeasonWindow { seasons }
    }

    pub fn contains(&self, season: &str) -> bool {
        self.seasons.contains(season)
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.seasons.iter().next().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.seasons.iter().next_back().map(String::as_str)
    }
}

// ============================================================================
// ROW PARSING
// ============================================================================

/// Parses one career-table row into ordered fields.
/// The team cell (index 1) renders as a link, so its anchor text is used.
/// Other cells lose all whitespace and `--` becomes `Field::Missing`.
/// The number of fields follows the row; width is checked later against the schema.
pub fn parse_season_row(row: ElementRef) -> Result<Vec<Field>> {
    let cell_selector = selector("td")?;
    let anchor_selector = selector("a")?;

    let mut fields = Vec::new();
    for (index, cell) in row.select(&cell_selector).enumerate() {
        if index == 1 {
            let anchor = cell
                .select(&anchor_selector)
                .next()
                .ok_or_else(|| CrawlError::MissingElement("team link in season row".to_string()))?;
            fields.push(Field::Value(element_text(anchor)));
        } else {
            fields.push(normalize_cell(&element_text(cell)));
        }
    }

    Ok(fields)
}

/// Whitespace-stripped cell value, with the placeholder mapped to `Missing`
pub fn normalize_cell(text: &str) -> Field {
    let normalized = strip_whitespace(text);
    if normalized == MISSING_PLACEHOLDER {
        Field::Missing
    } else {
        Field::Value(normalized)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_row(html: &str) -> Vec<Field> {
        let document = Html::parse_document(html);
        let row_selector = selector("tr").unwrap();
        let row = document.select(&row_selector).next().unwrap();
        parse_season_row(row).unwrap()
    }

    #[test]
    fn test_placeholder_becomes_missing() {
        assert_eq!(normalize_cell("--"), Field::Missing);
        assert_eq!(normalize_cell("  --\n"), Field::Missing);
        assert!(normalize_cell("--").is_missing());
    }

    #[test]
    fn test_other_text_is_preserved() {
        assert_eq!(normalize_cell("1,234"), Field::Value("1,234".to_string()));
        assert_eq!(normalize_cell("-3"), Field::Value("-3".to_string()));
        assert_eq!(normalize_cell("87.5%"), Field::Value("87.5%".to_string()));
        assert_eq!(normalize_cell("---"), Field::Value("---".to_string()));
        assert_eq!(normalize_cell(""), Field::Value(String::new()));
    }

    #[test]
    fn test_parse_row_uses_anchor_for_team() {
        let fields = first_row(
            "<table><tr><td>2012</td><td> <a href=\"/teams/profile?team=DEN\">DEN</a> (trade)</td>\
             <td> 16 </td><td>--</td></tr></table>",
        );
        assert_eq!(
            fields,
            vec![
                Field::Value("2012".to_string()),
                Field::Value("DEN".to_string()),
                Field::Value("16".to_string()),
                Field::Missing,
            ]
        );
    }

    #[test]
    fn test_parse_row_without_team_link_fails() {
        let document = Html::parse_document("<table><tr><td>2012</td><td>DEN</td></tr></table>");
        let row_selector = selector("tr").unwrap();
        let row = document.select(&row_selector).next().unwrap();
        assert!(matches!(parse_season_row(row), Err(CrawlError::MissingElement(_))));
    }

    #[test]
    fn test_record_validation() {
        let record = SeasonRecord {
            position: Position::K,
            name: "Matt Prater".to_string(),
            values: vec![Field::Value("2012".to_string()); 17],
        };
        assert!(record.validate().is_ok());
        assert_eq!(record.row().len(), 18);

        let short = SeasonRecord { values: vec![Field::Missing; 5], ..record };
        match short.validate() {
            Err(CrawlError::RecordShape { expected, actual, .. }) => {
                assert_eq!(expected, 18);
                assert_eq!(actual, 6);
            }
            other => panic!("Expected shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_season_window() {
        let window = SeasonWindow::ending_at(2013, 20);
        assert_eq!(window.len(), 20);
        assert_eq!(window.first(), Some("1994"));
        assert_eq!(window.last(), Some("2013"));
        assert!(window.contains("2000"));
        assert!(!window.contains("1993"));
        assert!(!window.contains("2014"));
        assert!(!window.contains("TOTAL"));
    }
}
