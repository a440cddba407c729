//! TINY CLI - Command line interface
//!
//! Scans a TINY source file and writes the token report. With no arguments
//! it reads `input.txt` and writes `output.txt`.

use clap::Parser;
use std::path::PathBuf;
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::{parse_log_format, parse_log_level, parse_report_format};
use crate::platform::{print_diagnostic_with_source, print_error};
use tiny_api::{check_strict, run, Target};
use tiny_config::{LogFormat, LogLevel, ReportFormat};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "tiny-scan",
    about = "Lexical scanner for the TINY teaching language",
    version
)]
pub struct Cli {
    /// Source file to scan (default: input.txt)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Report file (default: output.txt)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Write the report to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Report format: table, json
    #[arg(long, value_name = "FORMAT", value_parser = parse_report_format)]
    pub format: Option<ReportFormat>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not append the trailing space to the source
    #[arg(long)]
    pub no_sentinel: bool,

    /// Exit with an error when any text was dropped
    #[arg(long)]
    pub strict: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// Log level for the scanner only
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    pub lexer_log_level: Option<LogLevel>,

    /// Log format: pretty, compact, json
    #[arg(long, value_name = "FORMAT", value_parser = parse_log_format)]
    pub log_format: Option<LogFormat>,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Do not print diagnostics (also lowers the default log level to error)
    #[arg(short, long)]
    pub quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match config::resolve(&cli) {
        Ok(c) => c,
        Err(e) => {
            print_error(&e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config.log) {
        eprintln!("Error: Cannot initialize logging: {}", e);
        process::exit(1);
    }
    debug!(target: "tiny::cli", ?config, "Resolved configuration");

    let target = if cli.stdout {
        Target::stdout()
    } else {
        Target::file(&config.scan.output)
    };

    let output = match run(&config.scan, &target) {
        Ok(output) => output,
        Err(e) => {
            print_error(&e);
            process::exit(1);
        }
    };

    if !cli.quiet {
        for diagnostic in &output.scan.diagnostics {
            print_diagnostic_with_source(diagnostic, &output.source);
        }
    }

    if let Err(e) = check_strict(&output, &config.scan) {
        print_error(&e);
        process::exit(1);
    }
}
