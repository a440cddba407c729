//! 扫描器底层设施：位置追踪与字符游标

pub mod cursor;
pub mod position;

pub use cursor::Cursor;
pub use position::SourcePosition;
