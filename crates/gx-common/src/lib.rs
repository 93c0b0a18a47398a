//! Common types and utilities for the gx Galaxy compiler.
//!
//! This crate provides foundational types used across all gx crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, the message table)
//! - Shared identifiers (`FileId`, `SymbolId`)
//! - Line maps for offset <-> line/column conversion
//! - Compiler limits and thresholds

// Diagnostic records and the code/message table
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticMessage, format_message};

// Shared ids - live here to break circular dependencies between parser and binder
pub mod ids;
pub use ids::{FileId, SymbolId};

// Centralized limits and thresholds
pub mod limits;

// Line map for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod position_tests;

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
