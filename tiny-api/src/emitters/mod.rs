//! Built-in report emitters

mod json;
mod table;

pub use json::JsonEmitter;
pub use table::{render_table, TableEmitter, TABLE_HEADER};
