//! API 错误类型
//!
//! 扫描本身从不失败；这里的错误只来自 IO、配置和严格模式。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 报告输出错误
#[derive(Error, Debug)]
pub enum EmitterError {
    /// 写入文件失败
    #[error("Failed to write report to '{}': {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 写入标准输出失败
    #[error("Failed to write report to stdout: {0}")]
    Stdout(#[source] io::Error),

    /// 目标缺少必要信息（如文件路径）
    #[error("Target not found: {0}")]
    TargetNotFound(String),

    /// 序列化失败
    #[error("Failed to serialize report: {0}")]
    Serialize(String),
}

/// tiny-scan 错误类型
#[derive(Error, Debug)]
pub enum TinyError {
    /// 源文件无法读取
    #[error("Cannot read source '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 配置文件无法读取或解析
    #[error("Invalid configuration '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// 报告输出失败
    #[error(transparent)]
    Emit(#[from] EmitterError),

    /// 严格模式下扫描产生了诊断
    #[error("Scan dropped text in {count} place(s)")]
    Diagnostics { count: usize },
}

impl TinyError {
    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            TinyError::Io { .. } => "loader",
            TinyError::Config { .. } => "config",
            TinyError::Emit(_) => "report",
            TinyError::Diagnostics { .. } => "lexer",
        }
    }
}
