//! Parser module: AST storage, parser state and the parsed `SourceFile`.

pub mod base;
pub use base::{NodeIndex, NodeList, NodeSpan, SyntaxToken};

pub mod node;
pub use node::*;

mod node_access;
mod node_arena;

pub mod syntax_kind_ext;

pub mod node_flags {
    //! Flags packed into `Node::flags`.
    pub const STATIC: u16 = 1 << 0;
    pub const CONST: u16 = 1 << 1;
    pub const NATIVE: u16 = 1 << 2;
    pub const MODIFIER_MASK: u16 = STATIC | CONST | NATIVE;
    /// Zero-width node synthesized by error recovery.
    pub const MISSING: u16 = 1 << 3;
}

pub mod state;
pub use state::{ParseDiagnostic, ParserSnapshot, ParserState, ParsingContext};

mod state_expressions;
mod state_statements;
mod state_types;

pub mod source_file;
pub use source_file::{SourceFile, parse_file};

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod state_tests;

#[cfg(test)]
#[path = "tests/node_arena_tests.rs"]
mod node_arena_tests;
