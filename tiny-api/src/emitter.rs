//! Emitter trait and types
//!
//! Emitters serialize a scan result into a report and write it to a target.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use tiny_config::ReportFormat;
use tiny_core::ScanOutput;
use tracing::debug;

use crate::emitters::{JsonEmitter, TableEmitter};
use crate::error::EmitterError;

/// The kind of target to emit to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Write to a file
    File,
    /// Write to standard output
    Stdout,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::File => write!(f, "file"),
            TargetKind::Stdout => write!(f, "stdout"),
        }
    }
}

/// A target to emit to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub kind: TargetKind,
    /// Path for file targets
    pub path: Option<PathBuf>,
}

impl Target {
    /// Create a new file target
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: TargetKind::File,
            path: Some(path.into()),
        }
    }

    /// Create a stdout target
    pub fn stdout() -> Self {
        Self {
            kind: TargetKind::Stdout,
            path: None,
        }
    }

    /// Require a path (returns error if not a file target)
    pub fn require_path(&self) -> Result<&PathBuf, EmitterError> {
        self.path
            .as_ref()
            .ok_or_else(|| EmitterError::TargetNotFound("file path not specified".to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} '{}'", self.kind, path.display()),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Serialized report data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedOutput {
    pub format: ReportFormat,
    pub data: Vec<u8>,
}

impl SerializedOutput {
    pub fn new(format: ReportFormat, data: Vec<u8>) -> Self {
        Self { format, data }
    }
}

/// The Emitter trait for writing reports
pub trait Emitter {
    /// Get the format this emitter produces
    fn format(&self) -> ReportFormat;

    /// Serialize the scan result
    fn serialize(&self, output: &ScanOutput) -> Result<SerializedOutput, EmitterError>;

    /// Write serialized data to a target
    fn write(&self, data: &SerializedOutput, target: &Target) -> Result<(), EmitterError> {
        match target.kind {
            TargetKind::File => {
                let path = target.require_path()?;
                std::fs::write(path, &data.data).map_err(|source| EmitterError::WriteFailed {
                    path: path.clone(),
                    source,
                })?;
            }
            TargetKind::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(&data.data)
                    .and_then(|()| stdout.flush())
                    .map_err(EmitterError::Stdout)?;
            }
        }
        debug!(
            target: "tiny::report",
            format = data.format.as_str(),
            bytes = data.data.len(),
            %target,
            "Report written"
        );
        Ok(())
    }

    /// Convenience method: serialize and emit in one call
    fn emit(&self, output: &ScanOutput, target: &Target) -> Result<(), EmitterError> {
        let serialized = self.serialize(output)?;
        self.write(&serialized, target)
    }
}

/// Pick the emitter for a report format
pub fn emitter_for(format: ReportFormat) -> Box<dyn Emitter> {
    match format {
        ReportFormat::Table => Box::new(TableEmitter::new()),
        ReportFormat::Json => Box::new(JsonEmitter::new()),
    }
}
