//! TINY 词法分析器
//!
//! 单遍、逐字符的有限状态机：
//! - 状态是单一枚举值（`ScanState`），任一时刻只有一个状态生效
//! - 通过 `Cursor` 预读一个字符，终止字符不会被吞进前一个 token
//! - 无法分类的文本不产生 token，只进入诊断通道

pub mod core;
pub mod diagnostic;
pub mod scanner;
pub mod state;
pub mod tables;
pub mod token;

pub use core::{Cursor, SourcePosition};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use scanner::{tokenize, ScanOutput, Scanner};
pub use state::ScanState;
pub use tables::classify;
pub use token::{Token, TokenKind};
