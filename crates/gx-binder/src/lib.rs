//! Galaxy binder for the gx compiler.
//!
//! This crate provides:
//! - `Symbol`, `SymbolTable`, `SymbolArena` - Named declarations and their storage
//! - `WorkspaceSymbolTable` - The symbol graph shared by every open document
//! - `bind_source_file` / `unbind_source_file` - Incremental per-document binding

mod symbols;
pub use symbols::{Declaration, Symbol, SymbolArena, SymbolTable, symbol_flags};

mod workspace;
pub use workspace::WorkspaceSymbolTable;

pub mod state;
pub use state::{BinderState, bind_source_file, unbind_source_file};

#[cfg(test)]
#[path = "tests/symbols_tests.rs"]
mod symbols_tests;
