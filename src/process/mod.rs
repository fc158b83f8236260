// src/process/mod.rs

//! Process liveness via cmdline pattern matching.
//!
//! "The simulation" is whichever process has every configured substring in
//! its command line (typically the engine binary name plus an input-file
//! hint). This is a heuristic inherited from the workflow being monitored;
//! it is documented here as an external contract, not hardened.
//!
//! The production locator reads `/proc` and is therefore Linux-only.

use std::fmt::Debug;

use anyhow::Context;
use tracing::debug;

use crate::errors::Result;

pub type Pid = u32;

/// Capability interface for finding the simulation process, so the polling
/// logic can be tested with a scripted fake.
pub trait ProcessLocator: Send + Sync + Debug {
    /// Return the pid of the first live process whose command line contains
    /// every pattern, or `None` when no such process exists.
    fn find_by_pattern(&self, patterns: &[String]) -> Result<Option<Pid>>;
}

/// `/proc`-scanning locator used in production.
#[derive(Debug, Clone, Default)]
pub struct ProcLocator;

impl ProcessLocator for ProcLocator {
    fn find_by_pattern(&self, patterns: &[String]) -> Result<Option<Pid>> {
        let own_pid = std::process::id();
        let entries = std::fs::read_dir("/proc").context("reading /proc")?;

        for entry in entries {
            let entry = entry?;
            let name = entry.file_name();
            let Some(pid) = name.to_str().and_then(|s| s.parse::<Pid>().ok()) else {
                continue;
            };
            if pid == own_pid {
                continue;
            }

            // The process may exit between readdir and this read.
            let Ok(raw) = std::fs::read(format!("/proc/{pid}/cmdline")) else {
                continue;
            };
            // Kernel threads and zombies expose an empty cmdline.
            if raw.is_empty() {
                continue;
            }

            let cmdline = String::from_utf8_lossy(&raw).replace('\0', " ");
            if patterns.iter().all(|p| cmdline.contains(p.as_str())) {
                debug!(pid, cmdline = %cmdline.trim_end(), "matched simulation process");
                return Ok(Some(pid));
            }
        }

        Ok(None)
    }
}
