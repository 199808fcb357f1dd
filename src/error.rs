use thiserror::Error;

use crate::schema::Position;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("{position} record for {name} has {actual} columns, schema expects {expected}")]
    RecordShape {
        position: Position,
        name: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, CrawlError>;
