// src/logfile/scan.rs

use std::path::Path;

use tracing::debug;

use crate::fs::FileSystem;
use crate::logfile::parse::{is_data_row, parse_row, LogRecord};

/// What one scan of the log produced.
///
/// Every variant is a reportable state, not an error; the polling loop never
/// fails because of what it found (or didn't find) in the log.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// The log file does not exist yet.
    MissingLog,
    /// The log exists but holds no thermo rows so far. `minimizing` is set
    /// when the minimization marker was seen in the tail window.
    NoDataRow { minimizing: bool },
    /// The most recent thermo row.
    Row(LogRecord),
    /// The most recent numeric-looking line failed to parse fully.
    Malformed { line: String, reason: String },
}

/// Bounded tail scanner for the thermo log.
///
/// Reads at most `tail_bytes` from the end of the file per poll, so the cost
/// of a scan stays flat as the simulation runs for hours and the log grows.
#[derive(Debug, Clone)]
pub struct LogScanner {
    tail_bytes: u64,
    minimization_marker: String,
}

impl LogScanner {
    pub fn new(tail_bytes: u64, minimization_marker: impl Into<String>) -> Self {
        Self {
            tail_bytes,
            minimization_marker: minimization_marker.into(),
        }
    }

    /// Scan the log once and classify what was found.
    ///
    /// A read failure on an existing file (e.g. it vanished between the
    /// existence check and the read) is folded into [`ScanOutcome::MissingLog`]
    /// rather than escalated; the next poll simply tries again.
    pub fn scan(&self, fs: &dyn FileSystem, path: &Path) -> ScanOutcome {
        if !fs.exists(path) {
            return ScanOutcome::MissingLog;
        }

        let tail = match fs.read_tail(path, self.tail_bytes) {
            Ok(tail) => tail,
            Err(err) => {
                debug!(path = ?path, error = %err, "log tail read failed");
                return ScanOutcome::MissingLog;
            }
        };

        // The LAST matching line is the simulation's most recent state.
        let latest = tail.lines().rev().find(|line| is_data_row(line));

        match latest {
            None => ScanOutcome::NoDataRow {
                minimizing: tail.contains(&self.minimization_marker),
            },
            Some(line) => match parse_row(line) {
                Ok(record) => ScanOutcome::Row(record),
                Err(err) => ScanOutcome::Malformed {
                    line: line.trim().to_string(),
                    reason: err.to_string(),
                },
            },
        }
    }
}
