// src/schedule/mod.rs

//! Phase schedule: named, contiguous, half-open step ranges.
//!
//! A [`PhaseTable`] is built from an ordered list of phase lengths; the range
//! boundaries are the cumulative sums, so the ranges are contiguous and
//! monotonically increasing by construction. Classification is total: steps
//! at or beyond the final boundary belong to the final phase, with progress
//! clamped to 100%.

use crate::config::PhaseSpec;
use crate::errors::{MdwatchError, Result};

/// One named stretch of the schedule, covering `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub name: String,
    pub start: u64,
    pub end: u64,
}

/// The full schedule.
#[derive(Debug, Clone)]
pub struct PhaseTable {
    phases: Vec<Phase>,
    total_steps: u64,
}

impl PhaseTable {
    /// Build a table from validated config phases.
    pub fn from_config(cfg: &crate::config::ConfigFile) -> Result<Self> {
        Self::from_specs(&cfg.phases)
    }

    /// Build a table from `(name, length)` specs, enforcing the schedule
    /// invariants: at least one phase, positive lengths, unique names, and
    /// boundaries that fit in `u64`.
    pub fn from_specs(specs: &[PhaseSpec]) -> Result<Self> {
        if specs.is_empty() {
            return Err(MdwatchError::ConfigError(
                "phase schedule must contain at least one phase".to_string(),
            ));
        }

        let mut phases = Vec::with_capacity(specs.len());
        let mut cursor: u64 = 0;

        for spec in specs {
            if spec.name.is_empty() {
                return Err(MdwatchError::ConfigError(
                    "phase names must not be empty".to_string(),
                ));
            }
            if spec.steps == 0 {
                return Err(MdwatchError::ConfigError(format!(
                    "phase '{}' must have steps >= 1",
                    spec.name
                )));
            }
            if phases.iter().any(|p: &Phase| p.name == spec.name) {
                return Err(MdwatchError::ConfigError(format!(
                    "duplicate phase name '{}'",
                    spec.name
                )));
            }

            let end = cursor.checked_add(spec.steps).ok_or_else(|| {
                MdwatchError::ConfigError(format!(
                    "phase boundaries overflow at phase '{}'",
                    spec.name
                ))
            })?;

            phases.push(Phase {
                name: spec.name.clone(),
                start: cursor,
                end,
            });
            cursor = end;
        }

        Ok(Self {
            phases,
            total_steps: cursor,
        })
    }

    /// The phase containing `step`.
    ///
    /// Total over all steps: anything at or beyond the final boundary
    /// classifies into the final phase.
    pub fn classify(&self, step: u64) -> &Phase {
        self.phases
            .iter()
            .find(|p| step < p.end)
            .unwrap_or_else(|| self.last_phase())
    }

    /// Integer progress percentage within the phase containing `step`.
    ///
    /// 0 at the phase start; the largest value below 100 at `end - 1`;
    /// clamped to 100 past the final boundary.
    pub fn phase_progress(&self, step: u64) -> u8 {
        let phase = self.classify(step);
        if step >= phase.end {
            return 100;
        }
        let span = phase.end - phase.start;
        (((step - phase.start) as u128 * 100) / span as u128) as u8
    }

    /// Integer progress percentage against the whole schedule, clamped
    /// to 100.
    pub fn overall_progress(&self, step: u64) -> u8 {
        let step = step.min(self.total_steps);
        ((step as u128 * 100) / self.total_steps as u128) as u8
    }

    /// Sum of all configured phase lengths.
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// The phases in schedule order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    fn last_phase(&self) -> &Phase {
        self.phases.last().expect("phase table is never empty")
    }
}
