//! 平台相关输出

mod cli;

pub use cli::{print_diagnostic_with_source, print_error};
