// src/monitor/observe.rs

//! Gathering one [`PollObservation`] from the capability seams.

use std::path::Path;

use tracing::debug;

use crate::config::MonitorSection;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::logfile::LogScanner;
use crate::monitor::PollObservation;
use crate::process::ProcessLocator;

/// Perform one poll's worth of IO: liveness check plus log scan.
///
/// Log-side conditions are folded into the [`ScanOutcome`] (soft states);
/// only locator failures (e.g. an unreadable `/proc`) escalate as errors.
///
/// [`ScanOutcome`]: crate::logfile::ScanOutcome
pub fn observe(
    locator: &dyn ProcessLocator,
    fs: &dyn FileSystem,
    scanner: &LogScanner,
    settings: &MonitorSection,
) -> Result<PollObservation> {
    let pid = locator.find_by_pattern(&settings.process_pattern)?;
    let scan = scanner.scan(fs, Path::new(&settings.log_file));

    debug!(?pid, ?scan, "poll observation");

    Ok(PollObservation { pid, scan })
}
