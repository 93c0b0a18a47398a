//! Checker entry point.
//!
//! `CheckerState` checks one document against the workspace symbol graph.
//! Every call to `check_source_file` starts from an empty cache, so an edit
//! to any open document is reflected on the next check.

use crate::context::{CheckerContext, CheckerOptions, NodeLinks};
use gx_binder::WorkspaceSymbolTable;
use gx_common::{Diagnostic, SymbolId};
use gx_parser::{NodeIndex, SourceFile};
use gx_solver::TypeId;
use tracing::debug;

pub struct CheckerState<'a> {
    pub ctx: CheckerContext<'a>,
}

impl<'a> CheckerState<'a> {
    /// `documents` are all open documents; their bound declarations are
    /// visible through `workspace`. `file` must be bound.
    pub fn new(
        workspace: &'a WorkspaceSymbolTable,
        documents: impl IntoIterator<Item = &'a SourceFile>,
        file: &'a SourceFile,
        options: CheckerOptions,
    ) -> Self {
        CheckerState {
            ctx: CheckerContext::new(workspace, documents, file, options),
        }
    }

    /// Check every declaration and statement of the document and return the
    /// semantic diagnostics sorted by position.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %self.ctx.file.file_name))]
    pub fn check_source_file(&mut self) -> Vec<Diagnostic> {
        self.ctx.reset();
        let file = self.ctx.file;
        for &stmt in file.statements() {
            self.check_top_level_declaration(stmt);
        }
        if self.ctx.options.report_duplicate_declarations {
            self.check_duplicate_declarations();
        }

        let mut diagnostics = std::mem::take(&mut self.ctx.diagnostics);
        diagnostics.sort_by_key(|diag| (diag.start, diag.code));
        debug!(
            diagnostics = diagnostics.len(),
            types = self.ctx.types.len(),
            cached_nodes = self.ctx.node_links.len(),
            "checked source file"
        );
        diagnostics
    }

    /// Cached type of an expression or declaration checked by the last run.
    pub fn resolved_type(&self, idx: NodeIndex) -> Option<TypeId> {
        self.ctx.node_links.get(&idx).and_then(|links| links.resolved_type)
    }

    /// Symbol an identifier or property name resolved to in the last run.
    pub fn resolved_symbol(&self, idx: NodeIndex) -> Option<SymbolId> {
        self.ctx.node_links.get(&idx).and_then(|links| links.resolved_symbol)
    }

    pub(crate) fn links_mut(&mut self, idx: NodeIndex) -> &mut NodeLinks {
        self.ctx.node_links.entry(idx).or_default()
    }
}

/// Check `file` with default bookkeeping and return its semantic diagnostics.
pub fn check_source_file<'a>(
    workspace: &'a WorkspaceSymbolTable,
    documents: impl IntoIterator<Item = &'a SourceFile>,
    file: &'a SourceFile,
    options: CheckerOptions,
) -> Vec<Diagnostic> {
    CheckerState::new(workspace, documents, file, options).check_source_file()
}
