//! TINY Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all tiny-scan crates.
//! Every type deserializes from JSON with all fields optional.

use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration, as read from a `tiny.json` project file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TinyConfig {
    pub scan: ScanConfig,
    pub log: LogConfig,
}

/// Configuration for a single scan run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Source file to scan
    pub input: PathBuf,
    /// Destination of the token report
    pub output: PathBuf,
    /// Report layout
    pub format: ReportFormat,
    /// Append a trailing space to the loaded source
    pub sentinel: bool,
    /// Fail the run when the scanner reported diagnostics
    pub strict: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            output: PathBuf::from("output.txt"),
            format: ReportFormat::Table,
            sentinel: true,
            strict: false,
        }
    }
}

/// Token report layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Two-column `Type` / `Token` table
    #[default]
    Table,
    /// JSON array of token objects
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Table => "table",
            ReportFormat::Json => "json",
        }
    }
}

/// Log verbosity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

/// Log line layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level applied to every target without an override
    pub level: LogLevel,
    /// Override for the `tiny::lexer` target
    pub lexer: Option<LogLevel>,
    pub format: LogFormat,
    /// Optional log file, written in addition to stderr
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// Get the effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        match phase {
            Phase::Lexer => self.lexer.unwrap_or(self.level),
            _ => self.level,
        }
    }
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loader,
    Lexer,
    Report,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Loader => "loader",
            Phase::Lexer => "lexer",
            Phase::Report => "report",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("tiny::{}", self.as_str())
    }
}
