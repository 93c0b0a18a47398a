//! Galaxy printer: renders parsed nodes back to source text.
//!
//! Covers declarations, types and expressions, which is what diagnostics
//! and hover snippets need. Statements and whole files are not printed.

mod printer;
pub use printer::{PrintError, Printer};

#[cfg(test)]
#[path = "tests/printer_tests.rs"]
mod printer_tests;
