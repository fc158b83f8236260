// src/monitor/runtime.rs

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::info;

use crate::config::MonitorSection;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::logfile::LogScanner;
use crate::monitor::core::MonitorCore;
use crate::monitor::observe::observe;
use crate::monitor::ExitReason;
use crate::process::ProcessLocator;
use crate::report::{self, ReportSink};

/// Polling loop around [`MonitorCore`].
///
/// This is a pure IO shell: it gathers observations through the
/// `ProcessLocator` and `FileSystem` seams, feeds them into the core (which
/// contains all classification semantics), emits rendered status lines
/// through the sink, and sleeps between polls. The loop ends when the core
/// reports a terminal state or a shutdown signal arrives.
pub struct Monitor<L: ProcessLocator, S: ReportSink> {
    core: MonitorCore,
    locator: L,
    fs: Arc<dyn FileSystem>,
    scanner: LogScanner,
    settings: MonitorSection,
    interval: Duration,
    sink: S,
    shutdown_rx: mpsc::Receiver<()>,
}

impl<L: ProcessLocator, S: ReportSink> fmt::Debug for Monitor<L, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monitor")
            .field("core", &self.core)
            .field("settings", &self.settings)
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl<L: ProcessLocator, S: ReportSink> Monitor<L, S> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        core: MonitorCore,
        settings: MonitorSection,
        interval: Duration,
        scanner: LogScanner,
        locator: L,
        fs: Arc<dyn FileSystem>,
        sink: S,
        shutdown_rx: mpsc::Receiver<()>,
    ) -> Self {
        Self {
            core,
            locator,
            fs,
            scanner,
            settings,
            interval,
            sink,
            shutdown_rx,
        }
    }

    /// Main polling loop.
    ///
    /// - Observes the process and the log.
    /// - Feeds the observation into the pure core.
    /// - Emits the rendered status line.
    /// - Sleeps for the poll interval, unless the core said to stop or a
    ///   shutdown signal arrives first.
    pub async fn run(mut self) -> Result<ExitReason> {
        info!(
            log_file = %self.settings.log_file,
            interval_secs = self.interval.as_secs(),
            "mdwatch monitor started"
        );

        loop {
            let obs = observe(
                &self.locator,
                self.fs.as_ref(),
                &self.scanner,
                &self.settings,
            )?;

            let step = self.core.step(obs);
            self.sink.emit(&report::render_poll(&step.report));

            if !step.keep_running {
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                msg = self.shutdown_rx.recv() => {
                    match msg {
                        Some(()) => {
                            info!("shutdown requested; stopping monitor");
                            return Ok(ExitReason::Interrupted);
                        }
                        // All senders are gone, so no shutdown signal can
                        // arrive anymore; finish the sleep and keep polling.
                        None => tokio::time::sleep(self.interval).await,
                    }
                }
            }
        }

        let reason = self.core.exit_reason();
        info!(?reason, "monitor exiting");
        Ok(reason)
    }
}
