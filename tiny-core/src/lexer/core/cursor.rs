//! 字符游标
//!
//! 在完整的源文本上逐字符前进，支持预读当前字符而不消费。
//! 扫描器依赖这一点实现"一字符前瞻"：终止 token 的字符留在游标下，
//! 由下一轮 START 分发重新处理。

use super::position::SourcePosition;

/// 源文本上的只进游标
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    position: SourcePosition,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: SourcePosition::start(),
        }
    }

    /// 当前位置（下一个将被读取的字符）
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 预读当前字符（不消费）
    pub fn peek(&self) -> Option<char> {
        self.source[self.position.byte_offset..].chars().next()
    }

    /// 读取并消费一个字符
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position.advance(c);
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_ascii() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), Some('c'));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_cursor_peek_does_not_consume() {
        let cursor = Cursor::new("x:=");
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.position(), SourcePosition::start());
    }

    #[test]
    fn test_cursor_position_tracking() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        cursor.advance();
        let pos = cursor.position();
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
        assert_eq!(cursor.peek(), Some('b'));
    }

    #[test]
    fn test_cursor_multibyte_char() {
        let mut cursor = Cursor::new("é;");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position().byte_offset, 2);
        assert_eq!(cursor.peek(), Some(';'));
    }

    #[test]
    fn test_cursor_empty() {
        let mut cursor = Cursor::new("");
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.advance(), None);
    }
}
