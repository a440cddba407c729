//! 扫描状态与转移表

use super::tables::{is_digit, is_letter, is_symbol};
use std::fmt;

/// 扫描状态
///
/// `Other` 与 `Done` 只作为一次转移的结果出现，扫描器处理完后立即回到 `Start`：
/// - `Done`：当前字符属于正在识别的 token，且 token 已完整
/// - `Other`：token 在当前字符之前结束，当前字符留给下一个 token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Start,
    InComment,
    InIdentifier,
    InNumber,
    InAssignment,
    Other,
    Done,
}

impl ScanState {
    /// 转移函数：当前状态 × 当前字符 → 下一状态
    ///
    /// `Start` 遇到无法开始任何 token 的字符时不发生转移（仍为 `Start`），
    /// 空白与无法识别的字符由扫描器区分处理。
    pub fn transition(self, c: char) -> ScanState {
        match self {
            ScanState::Start => match c {
                c if is_symbol(c) => ScanState::Done,
                '{' => ScanState::InComment,
                ':' => ScanState::InAssignment,
                c if is_digit(c) => ScanState::InNumber,
                c if is_letter(c) => ScanState::InIdentifier,
                _ => ScanState::Start,
            },
            ScanState::InComment => match c {
                '}' => ScanState::Done,
                _ => ScanState::InComment,
            },
            ScanState::InNumber => match c {
                c if is_digit(c) => ScanState::InNumber,
                ' ' => ScanState::Done,
                _ => ScanState::Other,
            },
            ScanState::InIdentifier => match c {
                c if is_letter(c) => ScanState::InIdentifier,
                ' ' => ScanState::Done,
                _ => ScanState::Other,
            },
            ScanState::InAssignment => match c {
                '=' => ScanState::Done,
                _ => ScanState::Other,
            },
            // 瞬时状态，从不跨字符保留
            ScanState::Other | ScanState::Done => ScanState::Start.transition(c),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ScanState::Start => "START",
            ScanState::InComment => "IN_COMMENT",
            ScanState::InIdentifier => "IN_IDENTIFIER",
            ScanState::InNumber => "IN_NUMBER",
            ScanState::InAssignment => "IN_ASSIGNMENT",
            ScanState::Other => "OTHER",
            ScanState::Done => "DONE",
        }
    }
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ScanState::*;
    use super::*;

    #[test]
    fn test_start_dispatch() {
        for c in "+-*/=<>();".chars() {
            assert_eq!(Start.transition(c), Done, "symbol {c:?}");
        }
        assert_eq!(Start.transition('{'), InComment);
        assert_eq!(Start.transition(':'), InAssignment);
        assert_eq!(Start.transition('7'), InNumber);
        assert_eq!(Start.transition('q'), InIdentifier);
        assert_eq!(Start.transition(' '), Start);
        assert_eq!(Start.transition('\n'), Start);
        assert_eq!(Start.transition('}'), Start);
        assert_eq!(Start.transition('_'), Start);
    }

    #[test]
    fn test_comment_transitions() {
        assert_eq!(InComment.transition('}'), Done);
        assert_eq!(InComment.transition('{'), InComment);
        assert_eq!(InComment.transition(' '), InComment);
        assert_eq!(InComment.transition('\n'), InComment);
    }

    #[test]
    fn test_number_transitions() {
        assert_eq!(InNumber.transition('0'), InNumber);
        assert_eq!(InNumber.transition(' '), Done);
        assert_eq!(InNumber.transition('a'), Other);
        assert_eq!(InNumber.transition(';'), Other);
        assert_eq!(InNumber.transition('\n'), Other);
    }

    #[test]
    fn test_identifier_transitions() {
        assert_eq!(InIdentifier.transition('Z'), InIdentifier);
        assert_eq!(InIdentifier.transition(' '), Done);
        assert_eq!(InIdentifier.transition('1'), Other);
        assert_eq!(InIdentifier.transition(':'), Other);
    }

    #[test]
    fn test_assignment_transitions() {
        assert_eq!(InAssignment.transition('='), Done);
        assert_eq!(InAssignment.transition(' '), Other);
        assert_eq!(InAssignment.transition('x'), Other);
    }

    #[test]
    fn test_transient_states_behave_like_start() {
        assert_eq!(Other.transition('a'), InIdentifier);
        assert_eq!(Done.transition('+'), Done);
    }

    #[test]
    fn test_state_names() {
        assert_eq!(ScanState::default(), Start);
        assert_eq!(InAssignment.to_string(), "IN_ASSIGNMENT");
        assert_eq!(Other.as_str(), "OTHER");
    }
}
