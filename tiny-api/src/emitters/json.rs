//! JSON Emitter - 输出 token 数组（工具集成）

use serde_json::json;
use tiny_config::ReportFormat;
use tiny_core::{ScanOutput, Token};

use crate::emitter::{Emitter, SerializedOutput};
use crate::error::EmitterError;

/// JSON 发射器
#[derive(Debug, Default)]
pub struct JsonEmitter;

impl JsonEmitter {
    pub fn new() -> Self {
        Self
    }
}

fn token_json(token: &Token) -> serde_json::Value {
    json!({
        "type": token.kind.label(),
        "token": token.lexeme,
        "line": token.position.line,
        "column": token.position.column,
    })
}

impl Emitter for JsonEmitter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn serialize(&self, output: &ScanOutput) -> Result<SerializedOutput, EmitterError> {
        let tokens: Vec<serde_json::Value> = output.tokens.iter().map(token_json).collect();
        let mut text = serde_json::to_string_pretty(&tokens)
            .map_err(|e| EmitterError::Serialize(e.to_string()))?;
        text.push('\n');
        Ok(SerializedOutput::new(ReportFormat::Json, text.into_bytes()))
    }
}
