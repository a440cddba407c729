//! CLI 配置
//!
//! 把配置文件与命令行参数合并为一份 `TinyConfig`：显式给出的参数优先。

use tiny_api::{load_config, TinyError};
use tiny_config::{LogFormat, LogLevel, ReportFormat, TinyConfig};

use crate::Cli;

/// 解析报告格式参数
pub fn parse_report_format(s: &str) -> Result<ReportFormat, String> {
    match s.to_lowercase().as_str() {
        "table" => Ok(ReportFormat::Table),
        "json" => Ok(ReportFormat::Json),
        other => Err(format!("unknown report format '{}' (expected table or json)", other)),
    }
}

/// 解析日志级别参数
pub fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    match s.to_lowercase().as_str() {
        "silent" => Ok(LogLevel::Error), // silent = only errors
        "error" => Ok(LogLevel::Error),
        "warn" => Ok(LogLevel::Warn),
        "info" => Ok(LogLevel::Info),
        "debug" => Ok(LogLevel::Debug),
        "trace" => Ok(LogLevel::Trace),
        other => Err(format!("unknown log level '{}'", other)),
    }
}

/// 解析日志格式参数
pub fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    match s.to_lowercase().as_str() {
        "pretty" => Ok(LogFormat::Pretty),
        "compact" => Ok(LogFormat::Compact),
        "json" => Ok(LogFormat::Json),
        other => Err(format!("unknown log format '{}' (expected pretty, compact or json)", other)),
    }
}

/// 读取配置文件（如有）并应用命令行覆盖
pub fn resolve(cli: &Cli) -> Result<TinyConfig, TinyError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => TinyConfig::default(),
    };
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut TinyConfig, cli: &Cli) {
    let scan = &mut config.scan;
    if let Some(input) = &cli.input {
        scan.input = input.clone();
    }
    if let Some(output) = &cli.output {
        scan.output = output.clone();
    }
    if let Some(format) = cli.format {
        scan.format = format;
    }
    if cli.no_sentinel {
        scan.sentinel = false;
    }
    if cli.strict {
        scan.strict = true;
    }

    let log = &mut config.log;
    if let Some(level) = cli.log_level {
        log.level = level;
    }
    if let Some(level) = cli.lexer_log_level {
        log.lexer = Some(level);
    }
    if let Some(format) = cli.log_format {
        log.format = format;
    }
    if let Some(file) = &cli.log_file {
        log.file = Some(file.clone());
    }

    // -q 同时关掉诊断的 WARN 日志，除非显式给了级别
    if cli.quiet {
        if cli.log_level.is_none() {
            log.level = LogLevel::Error;
        }
        if cli.lexer_log_level.is_none() {
            log.lexer = None;
        }
    }
}
