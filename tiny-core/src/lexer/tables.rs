//! 关键字表、运算符表与 lexeme 分类
//!
//! 两张表在进程内只构建一次，所有扫描器共享只读访问。

use super::token::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 关键字查找表
pub static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("else", TokenKind::Else),
        ("end", TokenKind::End),
        ("if", TokenKind::If),
        ("repeat", TokenKind::Repeat),
        ("then", TokenKind::Then),
        ("until", TokenKind::Until),
        ("read", TokenKind::Read),
        ("write", TokenKind::Write),
    ])
});

/// 运算符/标点查找表
pub static OPERATORS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Mult),
        ("/", TokenKind::DivFloat),
        (":", TokenKind::Colon),
        ("=", TokenKind::Equals),
        (":=", TokenKind::Assignment),
        (">", TokenKind::Greater),
        ("<", TokenKind::Less),
        (";", TokenKind::Semicolon),
        ("(", TokenKind::OpenParenthesis),
        (")", TokenKind::CloseParenthesis),
    ])
});

/// START 状态下直接构成完整 token 的单字符
const SYMBOLS: &str = "+-*/=<>();";

pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// 字母（仅 ASCII）
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// START 状态下被丢弃的空白字符
pub fn is_blank(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// 去掉至多一个结尾空格（空格终止的 token 会把空格带进缓冲区）
pub fn trim_terminator(lexeme: &str) -> &str {
    lexeme.strip_suffix(' ').unwrap_or(lexeme)
}

fn is_comment(lexeme: &str) -> bool {
    lexeme.len() > 1 && lexeme.starts_with('{') && lexeme.ends_with('}')
}

/// 对一个完整 lexeme 分类
///
/// 依次尝试：字母串（关键字或标识符）、数字串、运算符表、注释。
/// 都不匹配时返回 `None`，调用方不产生 token。
pub fn classify(lexeme: &str) -> Option<TokenKind> {
    let text = trim_terminator(lexeme);
    if text.is_empty() {
        return None;
    }

    if text.chars().all(is_letter) {
        return Some(KEYWORDS.get(text).copied().unwrap_or(TokenKind::Identifier));
    }
    if text.chars().all(is_digit) {
        return Some(TokenKind::Number);
    }
    if let Some(kind) = OPERATORS.get(text) {
        return Some(*kind);
    }
    if is_comment(text) {
        return Some(TokenKind::Comment);
    }
    None
}
