// src/report.rs

//! Rendering status reports as single timestamped lines, and the sink they
//! are emitted through.
//!
//! Status lines go to stdout (the sink); diagnostics go to `tracing` on
//! stderr. Tests substitute a recording sink.

use crate::monitor::{Snapshot, StatusReport};

/// Where rendered status lines go.
///
/// Production code uses [`StdoutSink`]; tests can provide their own
/// implementation that records lines instead of printing them.
pub trait ReportSink: Send {
    fn emit(&mut self, line: &str);
}

/// Prints each status line to stdout.
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Render a report for the polling loop (per-phase progress only).
pub fn render_poll(report: &StatusReport) -> String {
    render(report, false)
}

/// Render a report for the one-shot status command (adds overall progress).
pub fn render_status(report: &StatusReport) -> String {
    render(report, true)
}

fn render(report: &StatusReport, with_overall: bool) -> String {
    let ts = timestamp();
    match report {
        StatusReport::Running { pid, snapshot } => {
            format!("[{ts}] pid {pid} | {}", describe(snapshot, with_overall))
        }
        StatusReport::NotRunning { last: Some(last) } => format!(
            "[{ts}] simulation not running | last seen: {}",
            describe(last, with_overall)
        ),
        StatusReport::NotRunning { last: None } => {
            format!("[{ts}] simulation not running")
        }
        StatusReport::MissingLog { pid } => {
            format!("[{ts}] pid {pid} | log file not found yet")
        }
        StatusReport::Waiting { pid } => {
            format!("[{ts}] pid {pid} | waiting for thermo output")
        }
        StatusReport::Minimizing { pid } => {
            format!("[{ts}] pid {pid} | minimizing")
        }
        StatusReport::ParseError {
            pid,
            line,
            reason,
            last,
        } => {
            let mut out = format!("[{ts}] pid {pid} | unparseable thermo line '{line}' ({reason})");
            if let Some(last) = last {
                out.push_str(&format!(" | last seen: {}", describe(last, with_overall)));
            }
            out
        }
    }
}

fn describe(snapshot: &Snapshot, with_overall: bool) -> String {
    let record = &snapshot.record;
    let mut out = format!(
        "step {} | T={:.1}K ({}) | phase {} {}%",
        record.step, record.temperature, snapshot.health, snapshot.phase_name,
        snapshot.phase_progress
    );
    if with_overall {
        out.push_str(&format!(" | overall {}%", snapshot.overall_progress));
    }
    out.push_str(&format!(
        " | PE={:.4} eV | KE={:.4} eV",
        record.potential_energy, record.kinetic_energy
    ));
    if let Some(pressure) = record.pressure {
        out.push_str(&format!(" | P={:.1} bar", pressure));
    }
    out
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
