// src/monitor/mod.rs

//! Progress-monitoring engine for `mdwatch`.
//!
//! This module ties together:
//! - the observation step (process liveness + log scan)
//! - the pure classification core (phase, health, last-known state)
//! - the polling loop that sleeps between observations and reacts to
//!   shutdown signals
//!
//! The pure core state machine lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`]. [`oneshot`] reuses the core for the `--once`
//! status report.

use crate::health::HealthStatus;
use crate::logfile::{LogRecord, ScanOutcome};
pub use crate::process::Pid;

/// One observation of the outside world, gathered per poll.
#[derive(Debug, Clone, PartialEq)]
pub struct PollObservation {
    /// Pid of the simulation process, when one was found.
    pub pid: Option<Pid>,
    /// What the log scan produced.
    pub scan: ScanOutcome,
}

/// A fully classified thermo row.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub record: LogRecord,
    pub phase_name: String,
    /// Integer percent through the current phase.
    pub phase_progress: u8,
    /// Integer percent through the whole schedule.
    pub overall_progress: u8,
    pub health: HealthStatus,
}

/// What the monitor has to say after one poll.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusReport {
    /// The simulation is alive and has produced thermo output.
    Running { pid: Pid, snapshot: Snapshot },
    /// No matching process exists. Terminal.
    NotRunning { last: Option<Snapshot> },
    /// The process is alive but its log does not exist yet.
    MissingLog { pid: Pid },
    /// The log exists but holds no thermo rows yet.
    Waiting { pid: Pid },
    /// No thermo rows yet, but the minimization marker was seen.
    Minimizing { pid: Pid },
    /// The latest numeric-looking line failed to parse.
    ParseError {
        pid: Pid,
        line: String,
        reason: String,
        last: Option<Snapshot>,
    },
}

/// Result of feeding one observation into the core.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorStep {
    pub report: StatusReport,
    /// False exactly when the report is terminal (`NotRunning`).
    pub keep_running: bool,
}

/// Why the monitor stopped, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The simulation was observed and has since finished or stopped.
    Finished,
    /// Neither a process nor any log data was ever found.
    NeverStarted,
    /// Ctrl-C before the simulation ended.
    Interrupted,
}

impl ExitReason {
    pub fn exit_code(self) -> i32 {
        match self {
            ExitReason::Finished | ExitReason::Interrupted => 0,
            ExitReason::NeverStarted => 1,
        }
    }
}

pub mod core;
pub mod observe;
pub mod oneshot;
pub mod runtime;

pub use self::core::MonitorCore;
pub use self::observe::observe;
pub use self::oneshot::status_once;
pub use self::runtime::Monitor;
