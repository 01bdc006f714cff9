//! Run history: where completed runs are reported
//!
//! The session hands a [`RunRecord`] to a [`HistorySink`] once per completed
//! run, and only when a user name is known. Two sinks are provided:
//!
//! - [`JsonlHistory`]: appends one JSON object per line to a file
//! - [`MemoryHistory`]: keeps records in a `Vec`
//!
//! Sink failures never reach playback; the session logs and drops them.

use crate::errors::HistoryError;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// One completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub algorithm: String,
    pub array_size: usize,
    pub elapsed_ms: f64,
    pub user: String,
    /// Seconds since the Unix epoch
    pub recorded_at: u64,
}

impl RunRecord {
    /// Stamp a record with the current system time
    pub fn now(algorithm: &str, array_size: usize, elapsed_ms: f64, user: &str) -> Self {
        let recorded_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |since| since.as_secs());
        RunRecord {
            algorithm: algorithm.to_string(),
            array_size,
            elapsed_ms,
            user: user.to_string(),
            recorded_at,
        }
    }
}

/// Receives completed runs and lists recent ones
pub trait HistorySink {
    fn record(&mut self, record: &RunRecord) -> Result<(), HistoryError>;

    /// Up to `limit` records, newest first
    fn recent(&self, limit: usize) -> Result<Vec<RunRecord>, HistoryError>;
}

impl<H: HistorySink + ?Sized> HistorySink for Box<H> {
    fn record(&mut self, record: &RunRecord) -> Result<(), HistoryError> {
        (**self).record(record)
    }

    fn recent(&self, limit: usize) -> Result<Vec<RunRecord>, HistoryError> {
        (**self).recent(limit)
    }
}

/// In-memory history
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    records: Vec<RunRecord>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, oldest first
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl HistorySink for MemoryHistory {
    fn record(&mut self, record: &RunRecord) -> Result<(), HistoryError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<RunRecord>, HistoryError> {
        Ok(self.records.iter().rev().take(limit).cloned().collect())
    }
}

/// Append-only JSON-lines history file
#[derive(Debug, Clone)]
pub struct JsonlHistory {
    path: PathBuf,
}

impl JsonlHistory {
    /// The file is created on the first record
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonlHistory { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistorySink for JsonlHistory {
    fn record(&mut self, record: &RunRecord) -> Result<(), HistoryError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<RunRecord>, HistoryError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str::<RunRecord>(&line)?);
        }

        records.reverse();
        records.truncate(limit);
        Ok(records)
    }
}
