//! TINY 扫描器
//!
//! 单遍扫描整个源文本：每一步预读一个字符，由 `ScanState::transition`
//! 决定下一状态，再根据结果决定是否消费该字符、是否结束当前 token。

use super::core::{Cursor, SourcePosition};
use super::diagnostic::{Diagnostic, DiagnosticKind};
use super::state::ScanState;
use super::tables::{classify, is_blank, trim_terminator};
use super::token::{Token, TokenKind};

use tracing::{debug, trace, warn};

/// 一次扫描的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// 按源码顺序排列的 token
    pub tokens: Vec<Token>,
    /// 没有产生 token 的文本
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanOutput {
    /// 是否没有任何文本被丢弃
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// (lexeme, kind) 序列
    pub fn pairs(&self) -> Vec<(&str, TokenKind)> {
        self.tokens.iter().map(Token::as_pair).collect()
    }
}

/// 状态机扫描器
///
/// 状态与缓冲区只在一次 `scan` 调用内有效，每次调用开始时重置，
/// 因此同一个实例可以顺序复用。
#[derive(Debug, Default)]
pub struct Scanner {
    state: ScanState,
    /// 当前 token 已累积的字符
    buffer: String,
    /// 当前 token 的起始位置
    lexeme_start: SourcePosition,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前状态（两次扫描之间总是 `Start`）
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// 扫描完整的源文本
    pub fn scan(&mut self, source: &str) -> ScanOutput {
        self.reset();
        debug!(target: "tiny::lexer", bytes = source.len(), "Starting scan");

        let mut cursor = Cursor::new(source);
        while let Some(c) = cursor.peek() {
            self.step(&mut cursor, c);
        }
        self.finish_input();

        let output = ScanOutput {
            tokens: std::mem::take(&mut self.tokens),
            diagnostics: std::mem::take(&mut self.diagnostics),
        };
        debug!(
            target: "tiny::lexer",
            tokens = output.tokens.len(),
            diagnostics = output.diagnostics.len(),
            "Scan finished"
        );
        output
    }

    fn reset(&mut self) {
        self.state = ScanState::Start;
        self.buffer.clear();
        self.lexeme_start = SourcePosition::start();
        self.tokens.clear();
        self.diagnostics.clear();
    }

    /// 处理游标下的一个字符
    fn step(&mut self, cursor: &mut Cursor<'_>, c: char) {
        let from = self.state;
        match from.transition(c) {
            ScanState::Other => {
                // 不消费 c：回到 Start 后由下一轮重新分发
                self.complete(from, true);
            }
            ScanState::Done => {
                self.begin_lexeme(from, cursor.position());
                self.buffer.push(c);
                cursor.advance();
                self.complete(from, false);
            }
            ScanState::Start => {
                let position = cursor.position();
                cursor.advance();
                if is_blank(c) {
                    self.flush_unrecognized();
                } else {
                    if self.buffer.is_empty() {
                        self.lexeme_start = position;
                    }
                    self.buffer.push(c);
                }
            }
            next => {
                self.begin_lexeme(from, cursor.position());
                self.buffer.push(c);
                cursor.advance();
                self.state = next;
            }
        }
    }

    /// 从 Start 进入新 token 前，先清掉累积的无法识别文本
    fn begin_lexeme(&mut self, from: ScanState, position: SourcePosition) {
        if from == ScanState::Start {
            self.flush_unrecognized();
            self.lexeme_start = position;
        }
    }

    /// 结束当前 token，回到 Start
    ///
    /// `lookahead` 为真表示 token 在当前字符之前结束（经由 `Other`）。
    fn complete(&mut self, from: ScanState, lookahead: bool) {
        let lexeme = std::mem::take(&mut self.buffer);
        let position = self.lexeme_start;
        self.state = ScanState::Start;

        trace!(
            target: "tiny::lexer",
            state = %from,
            lexeme = %lexeme,
            lookahead,
            "Lexeme completed"
        );

        if lexeme.is_empty() {
            return;
        }
        if lookahead && from == ScanState::InAssignment {
            self.report(DiagnosticKind::UnterminatedAssignment, lexeme, position);
            return;
        }

        match classify(&lexeme) {
            Some(kind) => {
                let text = trim_terminator(&lexeme);
                trace!(
                    target: "tiny::lexer",
                    kind = %kind,
                    lexeme = text,
                    line = position.line,
                    column = position.column,
                    "Produced token"
                );
                self.tokens.push(Token::new(text, kind, position));
            }
            None => self.report(DiagnosticKind::Unrecognized, lexeme, position),
        }
    }

    fn flush_unrecognized(&mut self) {
        if self.state == ScanState::Start && !self.buffer.is_empty() {
            let lexeme = std::mem::take(&mut self.buffer);
            self.report(DiagnosticKind::Unrecognized, lexeme, self.lexeme_start);
        }
    }

    /// 输入结束：把未完成的 token 当作在此处终止
    fn finish_input(&mut self) {
        let state = self.state;
        match state {
            ScanState::Start => self.flush_unrecognized(),
            ScanState::InComment => {
                let lexeme = std::mem::take(&mut self.buffer);
                let text = trim_terminator(&lexeme).to_string();
                self.state = ScanState::Start;
                self.report(DiagnosticKind::UnterminatedComment, text, self.lexeme_start);
            }
            pending => self.complete(pending, true),
        }
    }

    fn report(&mut self, kind: DiagnosticKind, lexeme: String, position: SourcePosition) {
        let diagnostic = Diagnostic::new(kind, lexeme, position);
        warn!(
            target: "tiny::lexer",
            kind = kind.as_str(),
            line = position.line,
            column = position.column,
            "{}",
            diagnostic.message()
        );
        self.diagnostics.push(diagnostic);
    }
}

/// 用一个新扫描器扫描源文本
pub fn tokenize(source: &str) -> ScanOutput {
    Scanner::new().scan(source)
}
