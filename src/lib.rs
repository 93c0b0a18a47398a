//! gx: compiler front end for the Galaxy trigger-script language.
//!
//! The pipeline is split across workspace crates and re-exported here:
//!
//! - `scanner` - tokens, keywords and the lexer
//! - `parser` - arena AST and the recursive-descent parser
//! - `binder` - workspace symbol table, bind and unbind
//! - `solver` - interned types and the assignability and operator rules
//! - `checker` - semantic diagnostics for one document
//! - `printer` - source snippets for single nodes
//!
//! `Project` ties them together for hosts that keep many documents open.

pub use gx_binder as binder;
pub use gx_checker as checker;
pub use gx_common as common;
pub use gx_parser as parser;
pub use gx_printer as printer;
pub use gx_scanner as scanner;
pub use gx_solver as solver;

pub use gx_checker::CheckerOptions;
pub use gx_common::{Diagnostic, DiagnosticCategory};
pub use gx_parser::{SourceFile, parse_file};

pub mod config;
pub use config::{CompilerOptions, GxConfig, load_config, parse_config};

pub mod project;
pub use project::Project;

pub mod tracing_config;

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;

#[cfg(test)]
#[path = "tests/project_tests.rs"]
mod project_tests;
