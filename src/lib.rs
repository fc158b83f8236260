// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod health;
pub mod logfile;
pub mod logging;
pub mod monitor;
pub mod process;
pub mod report;
pub mod schedule;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_or_default;
use crate::config::ConfigFile;
use crate::fs::RealFileSystem;
use crate::logfile::LogScanner;
use crate::monitor::{ExitReason, Monitor, MonitorCore};
use crate::process::ProcLocator;
use crate::report::StdoutSink;
use crate::schedule::PhaseTable;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading + CLI overrides
/// - the phase table and health thresholds
/// - the pure monitor core and its async polling shell (or the one-shot
///   status report for `--once`)
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> crate::errors::Result<ExitReason> {
    let cfg = load_or_default(args.config.as_deref())?;
    let settings = apply_cli_overrides(&cfg, &args);

    let table = PhaseTable::from_config(&cfg)?;
    info!(
        phases = table.phases().len(),
        total_steps = table.total_steps(),
        log_file = %settings.log_file,
        "configuration loaded"
    );

    let scanner = LogScanner::new(settings.tail_bytes, settings.minimization_marker.clone());
    let mut core = MonitorCore::new(table, cfg.health);
    let locator = ProcLocator;
    let fs = Arc::new(RealFileSystem);

    if args.once {
        let (report, reason) =
            monitor::status_once(&mut core, &locator, fs.as_ref(), &scanner, &settings)?;
        println!("{}", report::render_status(&report));
        return Ok(reason);
    }

    // Ctrl-C -> shutdown signal for the polling loop.
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            return;
        }
        let _ = shutdown_tx.send(()).await;
    });

    let interval = Duration::from_secs(settings.interval_secs);
    let monitor = Monitor::new(
        core,
        settings,
        interval,
        scanner,
        locator,
        fs,
        StdoutSink,
        shutdown_rx,
    );
    monitor.run().await
}

/// Fold CLI arguments over the `[monitor]` section. CLI wins.
fn apply_cli_overrides(cfg: &ConfigFile, args: &CliArgs) -> config::MonitorSection {
    let mut settings = cfg.monitor.clone();

    if let Some(interval) = args.interval {
        // Zero would busy-loop; validation enforces >= 1 for the config
        // file, so hold the CLI to the same bound.
        settings.interval_secs = interval.max(1);
    }
    if let Some(log_file) = &args.log_file {
        settings.log_file = log_file.clone();
    }

    debug!(?settings, "effective monitor settings");
    settings
}
