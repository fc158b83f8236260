// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `mdwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mdwatch",
    version,
    about = "Monitor a running molecular dynamics simulation from its thermo log.",
    long_about = None
)]
pub struct CliArgs {
    /// Poll interval in seconds.
    ///
    /// Overrides `interval_secs` from the config file. Default: 30.
    #[arg(value_name = "SECONDS")]
    pub interval: Option<u64>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Mdwatch.toml` in the current working directory, if present.
    /// Without a config file, built-in defaults are used.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Path to the simulation log file. Overrides the config file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<String>,

    /// Report the current status once and exit instead of polling.
    #[arg(long)]
    pub once: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MDWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
