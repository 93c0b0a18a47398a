//! Diagnostic types and message lookup shared by every compiler phase.
//!
//! Message data lives in `data.rs`. Scanner, parser, binder and checker all
//! report through the same `Diagnostic` record so hosts can merge and filter
//! the buckets without caring which phase produced an entry.

use serde::Serialize;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

use crate::position::LineMap;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Message = 2,
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// A positional diagnostic produced by any phase of the pipeline.
///
/// `start`/`length` are byte offsets into the document text; `line`/`col` are
/// zero-based and derived from the document's line map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    pub line: u32,
    pub col: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic. Line and column start at zero until
    /// [`Diagnostic::with_line_map`] is applied.
    #[must_use]
    pub const fn error(file: String, start: u32, length: u32, message: String, code: u32) -> Self {
        Self {
            file,
            start,
            length,
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
            line: 0,
            col: 0,
        }
    }

    /// Create a diagnostic from a message definition, formatting `{0}`, `{1}`...
    #[must_use]
    pub fn from_message(
        file: String,
        start: u32,
        length: u32,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file,
            start,
            length,
            message_text: format_message(message.message, args),
            category: message.category,
            code: message.code,
            line: 0,
            col: 0,
        }
    }

    /// Override the category (e.g. downgrade to a warning).
    #[must_use]
    pub const fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }

    /// Fill `line`/`col` from the start offset.
    #[must_use]
    pub fn with_line_map(mut self, line_map: &LineMap) -> Self {
        let position = line_map.offset_to_position(self.start);
        self.line = position.line;
        self.col = position.character;
        self
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Look up a diagnostic message definition by code.
///
/// Returns the `DiagnosticMessage` with template string containing `{0}`, `{1}`, etc. placeholders.
/// Use `format_message()` to fill in the placeholders.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Get the message template for a diagnostic code.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

/// Get the category for a diagnostic code.
#[must_use]
pub fn get_diagnostic_category(code: u32) -> Option<DiagnosticCategory> {
    get_diagnostic_message(code).map(|m| m.category)
}
