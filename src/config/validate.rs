// src/config/validate.rs

use crate::config::model::{default_phases, ConfigFile, RawConfigFile};
use crate::errors::{MdwatchError, Result};
use crate::schedule::PhaseTable;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::MdwatchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_monitor_section(&raw)?;
        validate_health_thresholds(&raw)?;

        // An absent [[phase]] list selects the default schedule.
        let phases = if raw.phase.is_empty() {
            default_phases()
        } else {
            raw.phase
        };

        // Building the table enforces the schedule invariants (non-empty,
        // positive lengths, unique names, no boundary overflow).
        PhaseTable::from_specs(&phases)?;

        Ok(ConfigFile::new_unchecked(raw.monitor, raw.health, phases))
    }
}

fn validate_monitor_section(cfg: &RawConfigFile) -> Result<()> {
    let monitor = &cfg.monitor;

    if monitor.interval_secs == 0 {
        return Err(MdwatchError::ConfigError(
            "[monitor].interval_secs must be >= 1 (got 0)".to_string(),
        ));
    }

    if monitor.tail_bytes == 0 {
        return Err(MdwatchError::ConfigError(
            "[monitor].tail_bytes must be >= 1 (got 0)".to_string(),
        ));
    }

    if monitor.log_file.is_empty() {
        return Err(MdwatchError::ConfigError(
            "[monitor].log_file must not be empty".to_string(),
        ));
    }

    if monitor.process_pattern.is_empty() {
        return Err(MdwatchError::ConfigError(
            "[monitor].process_pattern must contain at least one substring".to_string(),
        ));
    }

    for pattern in &monitor.process_pattern {
        if pattern.is_empty() {
            return Err(MdwatchError::ConfigError(
                "[monitor].process_pattern entries must not be empty".to_string(),
            ));
        }
    }

    if monitor.minimization_marker.is_empty() {
        return Err(MdwatchError::ConfigError(
            "[monitor].minimization_marker must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_health_thresholds(cfg: &RawConfigFile) -> Result<()> {
    let h = &cfg.health;

    let ordered = h.low_below <= h.normal_min
        && h.normal_min <= h.normal_max
        && h.normal_max <= h.abnormal_above;

    if !ordered {
        return Err(MdwatchError::ConfigError(format!(
            "[health] thresholds must satisfy low_below <= normal_min <= normal_max <= \
             abnormal_above (got {}, {}, {}, {})",
            h.low_below, h.normal_min, h.normal_max, h.abnormal_above
        )));
    }

    for (field, value) in [
        ("low_below", h.low_below),
        ("normal_min", h.normal_min),
        ("normal_max", h.normal_max),
        ("abnormal_above", h.abnormal_above),
    ] {
        if value.is_nan() {
            return Err(MdwatchError::ConfigError(format!(
                "[health].{field} must not be NaN"
            )));
        }
    }

    Ok(())
}
