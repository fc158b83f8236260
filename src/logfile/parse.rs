// src/logfile/parse.rs

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// One parsed thermo row.
///
/// Columns between kinetic energy and pressure (if the engine is configured
/// to print extras) are ignored; pressure is taken from the last column when
/// more than four are present.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub step: u64,
    /// Kelvin.
    pub temperature: f64,
    /// eV.
    pub potential_energy: f64,
    /// eV.
    pub kinetic_energy: f64,
    /// bar; absent when the engine prints only the four core columns.
    pub pressure: Option<f64>,
}

/// Why a numeric-looking line failed to parse as a [`LogRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    #[error("expected at least 4 columns, found {0}")]
    TooFewColumns(usize),

    #[error("column {index} ({name}) is not numeric: '{value}'")]
    BadColumn {
        index: usize,
        name: &'static str,
        value: String,
    },
}

static DATA_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    // An integer first column followed by at least one more column.
    Regex::new(r"^\s*\d+\s+\S").expect("valid literal regex")
});

/// Whether a line looks like a thermo data row (an integer step column
/// followed by another column). Lines that match are expected to fully
/// parse; ones that match but don't (e.g. a non-numeric temperature, or a
/// row torn mid-write) are reported as malformed rather than skipped
/// silently.
pub fn is_data_row(line: &str) -> bool {
    DATA_ROW_RE.is_match(line)
}

/// Parse one whitespace-delimited thermo row.
pub fn parse_row(line: &str) -> Result<LogRecord, RowParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < 4 {
        return Err(RowParseError::TooFewColumns(fields.len()));
    }

    let step = parse_column(fields[0], 0, "step")?;
    let temperature = parse_float(fields[1], 1, "temperature")?;
    let potential_energy = parse_float(fields[2], 2, "potential_energy")?;
    let kinetic_energy = parse_float(fields[3], 3, "kinetic_energy")?;

    let pressure = if fields.len() > 4 {
        let last = fields.len() - 1;
        Some(parse_float(fields[last], last, "pressure")?)
    } else {
        None
    };

    Ok(LogRecord {
        step,
        temperature,
        potential_energy,
        kinetic_energy,
        pressure,
    })
}

fn parse_column(value: &str, index: usize, name: &'static str) -> Result<u64, RowParseError> {
    value.parse::<u64>().map_err(|_| RowParseError::BadColumn {
        index,
        name,
        value: value.to_string(),
    })
}

fn parse_float(value: &str, index: usize, name: &'static str) -> Result<f64, RowParseError> {
    value.parse::<f64>().map_err(|_| RowParseError::BadColumn {
        index,
        name,
        value: value.to_string(),
    })
}
