//! API 类型定义

use tiny_core::ScanOutput;

/// 一次扫描运行的结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOutput {
    /// 实际扫描的文本（含哨兵）
    pub source: String,
    /// token 与诊断
    pub scan: ScanOutput,
}

impl RunOutput {
    pub fn token_count(&self) -> usize {
        self.scan.tokens.len()
    }

    pub fn diagnostic_count(&self) -> usize {
        self.scan.diagnostics.len()
    }
}
