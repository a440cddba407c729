//! TINY API - Scan orchestration layer
//!
//! Provides the unified run interface, including:
//! - Source loading (with the trailing sentinel)
//! - Report emitters (table and JSON)
//! - Unified error handling (TinyError)

use std::path::Path;

use tracing::info;

pub mod config;
pub mod emitter;
pub mod emitters;
pub mod error;
pub mod source;
pub mod types;

pub use config::{load_config, parse_config, CONFIG_FILE};
pub use emitter::{emitter_for, Emitter, SerializedOutput, Target, TargetKind};
pub use emitters::{render_table, JsonEmitter, TableEmitter, TABLE_HEADER};
pub use error::{EmitterError, TinyError};
pub use source::{load_source, with_sentinel, SENTINEL};
pub use types::RunOutput;

// Re-export config and core types
pub use tiny_config::{ReportFormat, ScanConfig, TinyConfig};
pub use tiny_core::{Diagnostic, DiagnosticKind, ScanOutput, Token, TokenKind};

/// Scan an in-memory source (no sentinel is added)
pub fn scan_source(source: &str) -> ScanOutput {
    tiny_core::tokenize(source)
}

/// Load and scan a file
pub fn scan_file(path: &Path, sentinel: bool) -> Result<RunOutput, TinyError> {
    let source = load_source(path, sentinel)?;
    let scan = scan_source(&source);
    Ok(RunOutput { source, scan })
}

/// Execute a scan run with explicit configuration
///
/// Diagnostics never fail the run; see [`check_strict`].
pub fn run(config: &ScanConfig, target: &Target) -> Result<RunOutput, TinyError> {
    info!(
        target: "tiny::cli",
        input = %config.input.display(),
        format = config.format.as_str(),
        "Starting scan"
    );

    let output = scan_file(&config.input, config.sentinel)?;
    emitter_for(config.format).emit(&output.scan, target)?;

    info!(
        target: "tiny::cli",
        tokens = output.token_count(),
        diagnostics = output.diagnostic_count(),
        %target,
        "Scan completed"
    );
    Ok(output)
}

/// Execute a scan run, writing the report to `config.output`
pub fn run_with_config(config: &ScanConfig) -> Result<RunOutput, TinyError> {
    run(config, &Target::file(&config.output))
}

/// Fail with [`TinyError::Diagnostics`] when strict mode is on and the scan dropped text
pub fn check_strict(output: &RunOutput, config: &ScanConfig) -> Result<(), TinyError> {
    if config.strict && !output.scan.is_clean() {
        return Err(TinyError::Diagnostics {
            count: output.diagnostic_count(),
        });
    }
    Ok(())
}
