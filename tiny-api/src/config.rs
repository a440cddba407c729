//! 配置文件加载
//!
//! 项目配置是一个 JSON 文件（默认 `tiny.json`），所有字段均可省略。

use std::path::Path;

use tiny_config::TinyConfig;
use tracing::debug;

use crate::error::TinyError;

/// 默认配置文件名
pub const CONFIG_FILE: &str = "tiny.json";

/// 解析 JSON 配置文本
pub fn parse_config(text: &str) -> Result<TinyConfig, serde_json::Error> {
    serde_json::from_str(text)
}

/// 读取并解析配置文件
pub fn load_config(path: &Path) -> Result<TinyConfig, TinyError> {
    let text = std::fs::read_to_string(path).map_err(|e| TinyError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let config = parse_config(&text).map_err(|e| TinyError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(target: "tiny::cli", path = %path.display(), "Loaded config");
    Ok(config)
}
