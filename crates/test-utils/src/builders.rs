#![allow(dead_code)]

use mdwatch::config::{ConfigFile, MonitorSection, PhaseSpec, RawConfigFile};
use mdwatch::health::HealthThresholds;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                monitor: MonitorSection::default(),
                health: HealthThresholds::default(),
                phase: Vec::new(),
            },
        }
    }

    pub fn with_phase(mut self, name: &str, steps: u64) -> Self {
        self.config.phase.push(PhaseSpec {
            name: name.to_string(),
            steps,
        });
        self
    }

    pub fn with_interval_secs(mut self, secs: u64) -> Self {
        self.config.monitor.interval_secs = secs;
        self
    }

    pub fn with_log_file(mut self, path: &str) -> Self {
        self.config.monitor.log_file = path.to_string();
        self
    }

    pub fn with_process_pattern(mut self, patterns: &[&str]) -> Self {
        self.config.monitor.process_pattern =
            patterns.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_tail_bytes(mut self, bytes: u64) -> Self {
        self.config.monitor.tail_bytes = bytes;
        self
    }

    pub fn with_health(mut self, thresholds: HealthThresholds) -> Self {
        self.config.health = thresholds;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }

    /// The raw, unvalidated form (for tests exercising validation errors).
    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for thermo-log text, mimicking what the external simulation
/// process appends over time.
pub struct ThermoLogBuilder {
    lines: Vec<String>,
}

impl ThermoLogBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Free-form text line (engine banner, section header, ...).
    pub fn text(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// A four-column thermo row.
    pub fn row(mut self, step: u64, temp: f64, pe: f64, ke: f64) -> Self {
        self.lines
            .push(format!("{step} {temp} {pe} {ke}"));
        self
    }

    /// A five-column thermo row with trailing pressure.
    pub fn row_with_pressure(
        mut self,
        step: u64,
        temp: f64,
        pe: f64,
        ke: f64,
        press: f64,
    ) -> Self {
        self.lines
            .push(format!("{step} {temp} {pe} {ke} {press}"));
        self
    }

    pub fn build(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

impl Default for ThermoLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
