//! Galaxy parser and AST types for the gx compiler.
//!
//! This crate provides:
//! - `NodeArena` - Thin 16-byte nodes with typed side pools
//! - `ParserState` - Speculative recursive-descent parser with full-state checkpoints
//! - `SourceFile` - The parsed document with its diagnostic buckets
//! - `syntax_kind_ext` - Node kinds that extend the scanner's `SyntaxKind`

pub mod parser;

pub use parser::{
    NodeArena, NodeIndex, NodeList, ParserState, SourceFile, SyntaxToken, node_flags, parse_file,
    syntax_kind_ext,
};
