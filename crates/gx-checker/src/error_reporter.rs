//! Diagnostic reporting for the checker.

use crate::state::CheckerState;
use gx_common::DiagnosticMessage;
use gx_parser::NodeIndex;
use gx_solver::{TypeFormatter, TypeId};

impl<'a> CheckerState<'a> {
    /// Report an error spanning `idx` in the checked document.
    ///
    /// At most one diagnostic per (start, code) pair is kept, so re-checking
    /// a cached expression never duplicates output.
    pub fn error_at_node(&mut self, idx: NodeIndex, message: &DiagnosticMessage, args: &[&str]) {
        let file = self.ctx.file;
        let Some(node) = file.arena.get(idx) else {
            return;
        };
        if !self.ctx.emitted.insert((node.pos, message.code)) {
            return;
        }
        let diagnostic = file.diagnostic_at(idx, message, args);
        tracing::trace!(code = diagnostic.code, start = diagnostic.start, "checker diagnostic");
        self.ctx.diagnostics.push(diagnostic);
    }

    /// Display form of a type for messages.
    pub fn type_to_string(&self, id: TypeId) -> String {
        TypeFormatter::new(&self.ctx.types).format(id)
    }
}
