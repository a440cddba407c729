//! CLI 格式化输出
//!
//! 提供命令行友好的诊断显示和源码上下文打印。

use std::fmt::Write;

use tiny_api::{Diagnostic, TinyError};

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 2;

/// 打印运行错误
pub fn print_error(e: &TinyError) {
    eprintln!("❌ [{}] {}", e.phase(), e);
}

/// 打印诊断并显示源代码上下文
pub fn print_diagnostic_with_source(diagnostic: &Diagnostic, source: &str) {
    eprintln!("⚠️  {}", diagnostic);
    eprint!(
        "{}",
        render_source_context(source, diagnostic.line(), diagnostic.column())
    );
}

/// 渲染源代码上下文（诊断行前后几行，并用 `^` 标出列）
///
/// 行号越界时返回空字符串。
pub fn render_source_context(source: &str, line: usize, column: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    if line == 0 || line > total_lines {
        return String::new();
    }

    let start_line = line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (line + CONTEXT_LINES).min(total_lines);

    // 行号宽度用于对齐
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    let mut out = String::new();
    let _ = writeln!(out, "{}|--", separator);
    for line_idx in start_line..=end_line {
        let _ = writeln!(out, "{:>width$} | {}", line_idx, lines[line_idx - 1]);
        if line_idx == line {
            let marker = " ".repeat(column.saturating_sub(1));
            let _ = writeln!(out, "{:width$} | {}^", "", marker);
        }
    }
    let _ = writeln!(out, "{}|--", separator);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_marks_column() {
        let source = "read x;\nx := y ! 1\nwrite x";
        let rendered = render_source_context(source, 2, 8);
        assert_eq!(
            rendered,
            "--|--\n\
             1 | read x;\n\
             2 | x := y ! 1\n  |        ^\n\
             3 | write x\n\
             --|--\n"
        );
    }

    #[test]
    fn test_render_limits_context() {
        let source = (1..=10).map(|i| format!("x{}", i)).collect::<Vec<_>>().join("\n");
        let rendered = render_source_context(&source, 6, 1);
        assert!(rendered.contains("\n4 | x4\n"));
        assert!(rendered.contains("\n8 | x8\n"));
        assert!(!rendered.contains("x3\n"));
        assert!(!rendered.contains("x9\n"));
    }

    #[test]
    fn test_render_out_of_range() {
        assert_eq!(render_source_context("x", 0, 1), "");
        assert_eq!(render_source_context("x", 2, 1), "");
    }
}
