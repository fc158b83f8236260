// src/health.rs

//! Temperature-based health classification.
//!
//! The thresholds partition the temperature axis into four deterministic
//! bands. The two "soft" bands (below-normal-but-not-low and
//! above-normal-but-not-abnormal) both map to [`HealthStatus::Borderline`].

use std::fmt;

use serde::Deserialize;

/// Coarse health signal derived from the instantaneous temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Normal,
    Low,
    Borderline,
    AbnormalHigh,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            HealthStatus::Normal => "normal",
            HealthStatus::Low => "low",
            HealthStatus::Borderline => "borderline",
            HealthStatus::AbnormalHigh => "abnormal-high",
        };
        f.write_str(tag)
    }
}

/// Temperature thresholds (Kelvin) for the `[health]` config section.
///
/// Required ordering: `low_below <= normal_min <= normal_max <= abnormal_above`
/// (checked during config validation).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HealthThresholds {
    /// Temperatures strictly below this are reported as `low`.
    #[serde(default = "default_low_below")]
    pub low_below: f64,

    /// Lower bound (inclusive) of the `normal` band.
    #[serde(default = "default_normal_min")]
    pub normal_min: f64,

    /// Upper bound (inclusive) of the `normal` band.
    #[serde(default = "default_normal_max")]
    pub normal_max: f64,

    /// Temperatures strictly above this are reported as `abnormal-high`.
    #[serde(default = "default_abnormal_above")]
    pub abnormal_above: f64,
}

fn default_low_below() -> f64 {
    40.0
}

fn default_normal_min() -> f64 {
    45.0
}

fn default_normal_max() -> f64 {
    350.0
}

fn default_abnormal_above() -> f64 {
    500.0
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            low_below: default_low_below(),
            normal_min: default_normal_min(),
            normal_max: default_normal_max(),
            abnormal_above: default_abnormal_above(),
        }
    }
}

impl HealthThresholds {
    /// Classify a temperature reading.
    ///
    /// Everything the explicit bands do not claim (including NaN, which fails
    /// every comparison) lands in `Borderline`.
    pub fn classify(&self, temperature: f64) -> HealthStatus {
        if temperature > self.abnormal_above {
            HealthStatus::AbnormalHigh
        } else if temperature < self.low_below {
            HealthStatus::Low
        } else if temperature >= self.normal_min && temperature <= self.normal_max {
            HealthStatus::Normal
        } else {
            HealthStatus::Borderline
        }
    }
}
