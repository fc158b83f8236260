// src/config/model.rs

use serde::Deserialize;

use crate::health::HealthThresholds;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [monitor]
/// interval_secs = 30
/// log_file = "log.lammps"
/// process_pattern = ["lmp", "in."]
///
/// [health]
/// normal_max = 350.0
///
/// [[phase]]
/// name = "heating"
/// steps = 50000
/// ```
///
/// All sections are optional and have built-in defaults; an empty `[[phase]]`
/// list selects the default schedule.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Polling behaviour from `[monitor]`.
    #[serde(default)]
    pub monitor: MonitorSection,

    /// Temperature thresholds from `[health]`.
    #[serde(default)]
    pub health: HealthThresholds,

    /// Phase schedule from `[[phase]]`, in order.
    #[serde(default)]
    pub phase: Vec<PhaseSpec>,
}

/// `[monitor]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorSection {
    /// Seconds to sleep between polls.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Path of the thermo log written by the simulation process.
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Substrings that must all appear in a process cmdline for it to count
    /// as the simulation (typically the binary name and an input-file hint).
    #[serde(default = "default_process_pattern")]
    pub process_pattern: Vec<String>,

    /// Byte window read from the end of the log on each poll.
    #[serde(default = "default_tail_bytes")]
    pub tail_bytes: u64,

    /// Marker substring that distinguishes "still minimizing" from
    /// "waiting for output" while no thermo rows exist yet.
    #[serde(default = "default_minimization_marker")]
    pub minimization_marker: String,
}

fn default_interval_secs() -> u64 {
    30
}

fn default_log_file() -> String {
    "log.lammps".to_string()
}

fn default_process_pattern() -> Vec<String> {
    vec!["lmp".to_string(), "in.".to_string()]
}

fn default_tail_bytes() -> u64 {
    64 * 1024
}

fn default_minimization_marker() -> String {
    "Minimization".to_string()
}

impl Default for MonitorSection {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            log_file: default_log_file(),
            process_pattern: default_process_pattern(),
            tail_bytes: default_tail_bytes(),
            minimization_marker: default_minimization_marker(),
        }
    }
}

/// One `[[phase]]` entry: a named stretch of the simulation schedule.
///
/// Boundaries are the cumulative sums of `steps`, so consecutive entries are
/// contiguous by construction.
#[derive(Debug, Clone, Deserialize)]
pub struct PhaseSpec {
    pub name: String,
    pub steps: u64,
}

/// The default relax -> heat -> equilibrate -> produce schedule.
pub fn default_phases() -> Vec<PhaseSpec> {
    let spec = |name: &str, steps: u64| PhaseSpec {
        name: name.to_string(),
        steps,
    };
    vec![
        spec("pre-relaxation", 10_000),
        spec("heating", 50_000),
        spec("equilibration", 100_000),
        spec("production", 1_000_000),
    ]
}

/// Validated configuration.
///
/// Construct via `ConfigFile::try_from(raw)` (see `config::validate`) or the
/// loader helpers; `new_unchecked` exists for the validation module only.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub monitor: MonitorSection,
    pub health: HealthThresholds,
    pub phases: Vec<PhaseSpec>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        monitor: MonitorSection,
        health: HealthThresholds,
        phases: Vec<PhaseSpec>,
    ) -> Self {
        Self {
            monitor,
            health,
            phases,
        }
    }
}
