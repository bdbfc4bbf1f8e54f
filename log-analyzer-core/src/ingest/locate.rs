use crate::ingest::constants::{LOG_FILE_DATE_FORMAT, LOG_FILE_NAME};
use crate::ingest::error::AnalyzeError;
use crate::ingest::types::Compression;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// A log file picked for analysis, identified by the date in its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileDescriptor {
    pub path: PathBuf,
    pub date: NaiveDate,
    pub compression: Compression,
}

impl LogFileDescriptor {
    /// Builds a descriptor from a path whose file name follows the
    /// `nginx-access-ui.log-YYYYMMDD[.gz]` convention.
    ///
    /// Returns `None` when the name does not match or the date is not a real
    /// calendar date.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let name = path.file_name()?.to_str()?;
        let (date, compression) = parse_file_name(name)?;

        Some(Self {
            path,
            date,
            compression,
        })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

fn parse_file_name(name: &str) -> Option<(NaiveDate, Compression)> {
    let caps = LOG_FILE_NAME.captures(name)?;
    let date = NaiveDate::parse_from_str(&caps["date"], LOG_FILE_DATE_FORMAT).ok()?;
    let compression = if caps.name("gz").is_some() {
        Compression::Gzip
    } else {
        Compression::Plain
    };

    Some((date, compression))
}

/// Finds the most recent log file in `dir`.
///
/// Only the directory listing is read. Entries that do not follow the naming
/// convention (including other compression suffixes such as `.bz2`) and
/// entries with an impossible date are skipped.
///
/// When two files carry the same date the uncompressed one wins, then the
/// smaller file name, so the result never depends on listing order.
///
/// # Errors
///
/// Returns `AnalyzeError::ListDir` if the directory cannot be read.
pub fn locate_latest(dir: &Path) -> Result<Option<LogFileDescriptor>, AnalyzeError> {
    let list_err = |source| AnalyzeError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut latest: Option<LogFileDescriptor> = None;

    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;

        let Some(candidate) = LogFileDescriptor::from_path(entry.path()) else {
            continue;
        };

        latest = match latest {
            Some(current) if !is_newer(&candidate, &current) => Some(current),
            _ => Some(candidate),
        };
    }

    Ok(latest)
}

fn is_newer(candidate: &LogFileDescriptor, current: &LogFileDescriptor) -> bool {
    candidate
        .date
        .cmp(&current.date)
        .then_with(|| current.compression.cmp(&candidate.compression))
        .then_with(|| current.path.cmp(&candidate.path))
        .is_gt()
}
