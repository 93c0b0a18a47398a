//! Galaxy type checker.
//!
//! This crate is organized into several modules:
//! - `context` - `CheckerContext`, options and per-node caches
//! - `state` - `CheckerState` entry point
//! - `dispatch` - expression type computation dispatcher
//! - `expr`, `assignment_checker`, `call_checker`, `property_checker` - expressions
//! - `statements`, `declarations` - statement and declaration checks
//! - `type_resolution` - type nodes and declared symbol types
//! - `scope_finder` - identifier lookup
//! - `error_reporter` - diagnostic reporting

pub mod assignment_checker;
pub mod call_checker;
pub mod context;
pub mod declarations;
pub mod dispatch;
pub mod error_reporter;
pub mod expr;
pub mod property_checker;
pub mod scope_finder;
pub mod state;
pub mod statements;
pub mod type_resolution;

pub use context::{CheckerContext, CheckerOptions, NodeLinks};
pub use dispatch::ExpressionDispatcher;
pub use state::{CheckerState, check_source_file};

#[cfg(test)]
#[path = "tests/test_utils.rs"]
mod test_utils;

#[cfg(test)]
#[path = "tests/expr_tests.rs"]
mod expr_tests;

#[cfg(test)]
#[path = "tests/statement_tests.rs"]
mod statement_tests;
