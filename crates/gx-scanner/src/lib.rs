//! Galaxy scanner/tokenizer for the gx compiler.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types and the keyword/punctuation tables
//! - `ScannerState` - Tokenizer state machine with save/restore checkpoints
//! - `TokenFlags` - Per-token facts recorded while scanning literals

pub mod syntax_kind;
pub use syntax_kind::{
    SyntaxKind, compound_assignment_operator, string_to_token, text_to_keyword,
    token_is_assignment_operator, token_is_complex_type_keyword, token_is_keyword,
    token_is_modifier, token_is_primitive_type_keyword, token_is_punctuation,
    token_is_reference_keyword, token_is_type_keyword, token_to_string,
};

pub mod scanner_impl;
pub use scanner_impl::{ScannerDiagnostic, ScannerSnapshot, ScannerState, TokenFlags};

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod scanner_tests;

#[cfg(test)]
#[path = "tests/syntax_kind_tests.rs"]
mod syntax_kind_tests;
