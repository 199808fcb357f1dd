use csv::{Terminator, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::schema::{Position, POSITIONS};
use crate::season_handler::SeasonRecord;

// ============================================================================
// DATASET FILES
// ============================================================================

/// Per-position CSV datasets in one output directory.
///
/// Every append opens the file, writes one row and closes it again. That costs
/// an open per record but leaves each record on disk before the next page is
/// fetched, so an interrupted run keeps everything written so far.
#[derive(Debug, Clone)]
pub struct OutputSink {
    dir: PathBuf,
}

impl OutputSink {
    pub fn new(dir: impl Into<PathBuf>) -> OutputSink {
        OutputSink { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of a position's dataset
    pub fn path(&self, position: Position) -> PathBuf {
        self.dir.join(position.file_name())
    }

    /// Creates or truncates the dataset and writes its header row.
    pub fn initialize(&self, position: Position) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let file = File::create(self.path(position))?;
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);

        writer.write_record(position.schema())?;
        writer.flush()?;
        debug!("Initialized {}", self.path(position).display());
        Ok(())
    }

    /// Initializes the datasets of every supported position
    pub fn initialize_all(&self) -> Result<()> {
        for position in POSITIONS {
            self.initialize(position)?;
        }
        Ok(())
    }

    /// Appends one record (name followed by the season values) to its position's dataset.
    pub fn append(&self, record: &SeasonRecord) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.path(record.position))?;
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(file);

        writer.serialize(record.row())?;
        writer.flush()?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
