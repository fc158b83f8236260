// src/monitor/core.rs

//! Pure monitor core.
//!
//! This module contains a synchronous, deterministic state machine that
//! consumes [`PollObservation`]s and produces:
//! - an updated last-known snapshot
//! - a [`MonitorStep`] describing what the IO shell should report and
//!   whether to keep polling
//!
//! The async/IO-heavy shell (`monitor::runtime::Monitor`) is responsible
//! for gathering observations, rendering reports, sleeping between polls,
//! and handling Ctrl-C.
//!
//! The core is intended to be extensively tested without any Tokio,
//! filesystem, or processes.

use crate::health::HealthThresholds;
use crate::logfile::{LogRecord, ScanOutcome};
use crate::monitor::{ExitReason, MonitorStep, PollObservation, Snapshot, StatusReport};
use crate::schedule::PhaseTable;

/// Pure monitor state.
///
/// The last-known snapshot is threaded through explicitly rather than held
/// in ambient globals, so a single iteration is testable in isolation.
#[derive(Debug)]
pub struct MonitorCore {
    table: PhaseTable,
    thresholds: HealthThresholds,
    last: Option<Snapshot>,
    seen_process: bool,
}

impl MonitorCore {
    pub fn new(table: PhaseTable, thresholds: HealthThresholds) -> Self {
        Self {
            table,
            thresholds,
            last: None,
            seen_process: false,
        }
    }

    /// The most recent fully classified row, if any.
    pub fn last(&self) -> Option<&Snapshot> {
        self.last.as_ref()
    }

    /// Handle a single observation, updating state and returning the report
    /// plus the keep-polling decision.
    pub fn step(&mut self, obs: PollObservation) -> MonitorStep {
        if obs.pid.is_some() {
            self.seen_process = true;
        }

        let report = match (obs.pid, obs.scan) {
            // A data row updates the last-known state even when the process
            // is already gone, so the terminal report can describe the final
            // step.
            (pid, ScanOutcome::Row(record)) => {
                let snapshot = self.classify(record);
                self.last = Some(snapshot.clone());
                match pid {
                    Some(pid) => StatusReport::Running { pid, snapshot },
                    None => StatusReport::NotRunning {
                        last: self.last.clone(),
                    },
                }
            }
            (None, _) => StatusReport::NotRunning {
                last: self.last.clone(),
            },
            (Some(pid), ScanOutcome::MissingLog) => StatusReport::MissingLog { pid },
            (Some(pid), ScanOutcome::NoDataRow { minimizing }) => {
                if minimizing {
                    StatusReport::Minimizing { pid }
                } else {
                    StatusReport::Waiting { pid }
                }
            }
            (Some(pid), ScanOutcome::Malformed { line, reason }) => StatusReport::ParseError {
                pid,
                line,
                reason,
                last: self.last.clone(),
            },
        };

        let keep_running = !matches!(report, StatusReport::NotRunning { .. });

        MonitorStep {
            report,
            keep_running,
        }
    }

    /// How a terminated loop should exit.
    ///
    /// `Finished` once a process or any data row was observed; `NeverStarted`
    /// when there was never anything to monitor.
    pub fn exit_reason(&self) -> ExitReason {
        if self.seen_process || self.last.is_some() {
            ExitReason::Finished
        } else {
            ExitReason::NeverStarted
        }
    }

    fn classify(&self, record: LogRecord) -> Snapshot {
        let phase = self.table.classify(record.step);
        Snapshot {
            phase_name: phase.name.clone(),
            phase_progress: self.table.phase_progress(record.step),
            overall_progress: self.table.overall_progress(record.step),
            health: self.thresholds.classify(record.temperature),
            record,
        }
    }
}
