//! 扫描诊断
//!
//! 扫描器从不失败：无法分类的文本不会出现在 token 流里，
//! 而是记录为一条诊断，交给调用方决定如何展示。

use super::core::SourcePosition;
use std::fmt;

/// 诊断类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// 无法开始任何 token 的文本
    Unrecognized,
    /// 输入在注释内部结束
    UnterminatedComment,
    /// `:` 之后不是 `=`
    UnterminatedAssignment,
}

impl DiagnosticKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Unrecognized => "unrecognized",
            DiagnosticKind::UnterminatedComment => "unterminated-comment",
            DiagnosticKind::UnterminatedAssignment => "unterminated-assignment",
        }
    }
}

/// 一条被丢弃的 lexeme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 被丢弃的原始文本
    pub lexeme: String,
    /// 文本起始位置
    pub position: SourcePosition,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, lexeme: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// 不带位置的消息
    pub fn message(&self) -> String {
        match self.kind {
            DiagnosticKind::Unrecognized => {
                format!("Unrecognized text {:?} dropped", self.lexeme)
            }
            DiagnosticKind::UnterminatedComment => "Unterminated comment dropped".to_string(),
            DiagnosticKind::UnterminatedAssignment => {
                "Expected '=' after ':', assignment dropped".to_string()
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.position, self.message())
    }
}
