//! Table Emitter - 两列 `Type` / `Token` 报告
//!
//! 格式与旧版工具逐字节一致：固定表头，每个 token 一行，
//! 类别与 lexeme 之间三个空格。

use tiny_config::ReportFormat;
use tiny_core::{ScanOutput, Token};

use crate::emitter::{Emitter, SerializedOutput};
use crate::error::EmitterError;

/// 表头与下划线行
pub const TABLE_HEADER: &str = "Type          Token\n====          =====\n";

/// 渲染表格报告
pub fn render_table(tokens: &[Token]) -> String {
    let mut out = String::from(TABLE_HEADER);
    for token in tokens {
        out.push_str(token.kind.label());
        out.push_str("   ");
        out.push_str(&token.lexeme);
        out.push('\n');
    }
    out
}

/// 表格发射器
#[derive(Debug, Default)]
pub struct TableEmitter;

impl TableEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Emitter for TableEmitter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }

    fn serialize(&self, output: &ScanOutput) -> Result<SerializedOutput, EmitterError> {
        let text = render_table(&output.tokens);
        Ok(SerializedOutput::new(ReportFormat::Table, text.into_bytes()))
    }
}
