//! TINY Token 类型定义

use super::core::SourcePosition;
use std::fmt;

/// Token 类别
///
/// 关键字的标签就是关键字本身（`if` 的类别标签为 `"if"`），
/// 其余类别使用大写名称（`IDENTIFIER`、`ASSIGNMENT` 等）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum TokenKind {
    // 关键字
    Else,
    End,
    If,
    Repeat,
    Then,
    Until,
    Read,
    Write,

    Identifier,
    Number,
    Comment,

    // 运算符与标点
    Plus,
    Minus,
    Mult,
    DivFloat,
    Colon,
    Equals,
    Assignment,
    Greater,
    Less,
    Semicolon,
    OpenParenthesis,
    CloseParenthesis,
}

impl TokenKind {
    /// 报告中使用的类别标签
    pub const fn label(&self) -> &'static str {
        match self {
            TokenKind::Else => "else",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Repeat => "repeat",
            TokenKind::Then => "then",
            TokenKind::Until => "until",
            TokenKind::Read => "read",
            TokenKind::Write => "write",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Comment => "COMMENT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::DivFloat => "DIV_FLOAT",
            TokenKind::Colon => "COLON",
            TokenKind::Equals => "EQUALS",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Greater => "GREATER",
            TokenKind::Less => "LESS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::OpenParenthesis => "OPEN_PARENTHESIS",
            TokenKind::CloseParenthesis => "CLOSE_PARENTHESIS",
        }
    }

    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Else
                | TokenKind::End
                | TokenKind::If
                | TokenKind::Repeat
                | TokenKind::Then
                | TokenKind::Until
                | TokenKind::Read
                | TokenKind::Write
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Token 结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 源文本中的原始片段
    pub lexeme: String,
    pub kind: TokenKind,
    /// 首字符所在位置
    pub position: SourcePosition,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, position: SourcePosition) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
            position,
        }
    }

    /// (lexeme, kind) 二元组视图
    pub fn as_pair(&self) -> (&str, TokenKind) {
        (self.lexeme.as_str(), self.kind)
    }
}
