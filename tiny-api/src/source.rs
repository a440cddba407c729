//! 源文件加载
//!
//! 整个文件一次性读入内存；非法 UTF-8 字节按替换字符处理，
//! 扫描器会把它们当作无法识别的文本。

use std::path::Path;

use tracing::{debug, warn};

use crate::error::TinyError;

/// 追加在源文本末尾的哨兵字符
pub const SENTINEL: char = ' ';

/// 返回末尾带哨兵空格的副本
pub fn with_sentinel(source: &str) -> String {
    let mut text = String::with_capacity(source.len() + 1);
    text.push_str(source);
    text.push(SENTINEL);
    text
}

/// 读取源文件
pub fn load_source(path: &Path, sentinel: bool) -> Result<String, TinyError> {
    let bytes = std::fs::read(path).map_err(|source| TinyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let byte_count = bytes.len();

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                target: "tiny::loader",
                path = %path.display(),
                offset = e.utf8_error().valid_up_to(),
                "Source is not valid UTF-8, invalid bytes replaced"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    debug!(
        target: "tiny::loader",
        path = %path.display(),
        bytes = byte_count,
        sentinel,
        "Loaded source"
    );

    Ok(if sentinel { with_sentinel(&text) } else { text })
}
