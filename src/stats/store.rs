//! Statistics persistence
//!
//! The record is a small JSON document:
//!
//! ```json
//! { "version": 1, "fields": [played, won, win_percent, current_streak, max_streak, d1, d2, d3, d4, d5, d6] }
//! ```
//!
//! where `dN` is the number of wins on attempt `N`.

use super::Statistics;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Current on-disk record version
pub const RECORD_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StatsRecord {
    version: u32,
    fields: Vec<u32>,
}

/// Result of reading the persisted record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredStats {
    Found(Statistics),
    /// Nothing has been saved yet
    Absent,
    /// Something was saved but cannot be trusted
    Corrupt(String),
}

/// The backing store could not be read or written
#[derive(Debug)]
pub struct PersistenceError {
    path: Option<PathBuf>,
    source: io::Error,
}

impl PersistenceError {
    fn new(path: Option<&Path>, source: io::Error) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            source,
        }
    }

    /// Failure of a store that has no file path
    #[must_use]
    pub fn unavailable(source: io::Error) -> Self {
        Self::new(None, source)
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "Statistics unavailable at {}: {}", path.display(), self.source),
            None => write!(f, "Statistics unavailable: {}", self.source),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Key-value style persistence for a single statistics record
pub trait StatsStore {
    /// Read the record
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` when the backing store cannot be read at all.
    /// Missing or unreadable records are reported through `StoredStats`.
    fn load(&self) -> Result<StoredStats, PersistenceError>;

    /// Overwrite the record
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the write does not complete.
    fn save(&self, stats: &Statistics) -> Result<(), PersistenceError>;
}

fn encode(stats: &Statistics) -> Result<String, serde_json::Error> {
    let record = StatsRecord {
        version: RECORD_VERSION,
        fields: stats.to_fields().to_vec(),
    };
    serde_json::to_string_pretty(&record)
}

fn decode(data: &str) -> StoredStats {
    let record: StatsRecord = match serde_json::from_str(data) {
        Ok(record) => record,
        Err(err) => return StoredStats::Corrupt(format!("unreadable record: {err}")),
    };

    if record.version != RECORD_VERSION {
        return StoredStats::Corrupt(format!("unsupported version {}", record.version));
    }
    if record.fields.len() != Statistics::FIELD_COUNT {
        return StoredStats::Corrupt(format!(
            "expected {} fields, found {}",
            Statistics::FIELD_COUNT,
            record.fields.len()
        ));
    }

    Statistics::from_fields(&record.fields).map_or_else(
        || StoredStats::Corrupt("fields are inconsistent".to_string()),
        StoredStats::Found,
    )
}

/// JSON file on disk, overwritten atomically on save
#[derive(Debug, Clone)]
pub struct JsonStatsStore {
    path: PathBuf,
}

impl JsonStatsStore {
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StatsStore for JsonStatsStore {
    fn load(&self) -> Result<StoredStats, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(decode(&data)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(StoredStats::Absent),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                Ok(StoredStats::Corrupt("record is not valid UTF-8".to_string()))
            }
            Err(err) => Err(PersistenceError::new(Some(&self.path), err)),
        }
    }

    fn save(&self, stats: &Statistics) -> Result<(), PersistenceError> {
        let fail = |err| PersistenceError::new(Some(&self.path), err);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(fail)?;
        }

        let data = encode(stats).map_err(|e| fail(io::Error::other(e)))?;

        // Write beside the target then rename, so readers never see half a record
        let temp = self.temp_path();
        fs::write(&temp, data).map_err(fail)?;
        fs::rename(&temp, &self.path).map_err(|err| {
            // Nothing else will clean it up if every save fails
            if let Err(cleanup) = fs::remove_file(&temp) {
                log::debug!("could not remove {}: {cleanup}", temp.display());
            }
            fail(err)
        })?;

        log::debug!("saved statistics to {}", self.path.display());
        Ok(())
    }
}

/// Default location of the statistics file
#[must_use]
pub fn default_stats_path() -> PathBuf {
    ProjectDirs::from("", "", "wordle").map_or_else(
        || PathBuf::from("wordle_statistics.json"),
        |dirs| dirs.data_dir().join("statistics.json"),
    )
}

/// In-memory store holding the encoded record
///
/// Used by `--no-save` runs and tests. Goes through the same encoding as the
/// file store so corrupt-record handling is identical.
#[derive(Debug, Default)]
pub struct MemoryStatsStore {
    data: RefCell<Option<String>>,
}

impl MemoryStatsStore {
    /// Pre-populate with a raw record
    #[must_use]
    pub fn with_raw(data: impl Into<String>) -> Self {
        Self {
            data: RefCell::new(Some(data.into())),
        }
    }

    /// The raw record as last saved
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.data.borrow().clone()
    }
}

impl StatsStore for MemoryStatsStore {
    fn load(&self) -> Result<StoredStats, PersistenceError> {
        Ok(self
            .data
            .borrow()
            .as_deref()
            .map_or(StoredStats::Absent, decode))
    }

    fn save(&self, stats: &Statistics) -> Result<(), PersistenceError> {
        let data = encode(stats).map_err(|e| PersistenceError::unavailable(io::Error::other(e)))?;
        *self.data.borrow_mut() = Some(data);
        Ok(())
    }
}
