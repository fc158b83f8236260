// src/monitor/oneshot.rs

//! One-shot status report (`--once`).
//!
//! Reuses the same observation and classification pipeline as the polling
//! loop, invoked exactly once. The rendered line additionally carries the
//! overall progress percentage against the whole schedule. Purely read-only:
//! running it repeatedly against an unchanged log yields equal reports.

use crate::config::MonitorSection;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::logfile::LogScanner;
use crate::monitor::core::MonitorCore;
use crate::monitor::observe::observe;
use crate::monitor::{ExitReason, StatusReport};
use crate::process::ProcessLocator;

/// Observe once and classify.
///
/// Returns the report plus the exit reason the process should carry
/// (`NeverStarted` when neither a process nor any log data exists).
pub fn status_once(
    core: &mut MonitorCore,
    locator: &dyn ProcessLocator,
    fs: &dyn FileSystem,
    scanner: &LogScanner,
    settings: &MonitorSection,
) -> Result<(StatusReport, ExitReason)> {
    let obs = observe(locator, fs, scanner, settings)?;
    let step = core.step(obs);
    Ok((step.report, core.exit_reason()))
}
