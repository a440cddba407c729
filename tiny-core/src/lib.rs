//! TINY Core - scanner for the TINY teaching language (pure logic, no IO)
//!
//! Turns an in-memory source string into an ordered list of classified tokens.
//! Loading files and writing reports live in `tiny-api`.

pub mod lexer;

// Re-export common types
pub use lexer::{
    classify, tokenize, Diagnostic, DiagnosticKind, ScanOutput, ScanState, Scanner,
    SourcePosition, Token, TokenKind,
};
