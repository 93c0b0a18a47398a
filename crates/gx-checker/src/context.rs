//! Checker context: inputs, options and per-check side tables.

use gx_binder::WorkspaceSymbolTable;
use gx_common::{Diagnostic, FileId, SymbolId};
use gx_parser::{NodeIndex, SourceFile};
use gx_solver::{TypeId, TypeInterner};
use rustc_hash::{FxHashMap, FxHashSet};

/// Options that change what the checker accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckerOptions {
    /// Conditions must be `bool`. When off, `int` conditions are accepted.
    pub strict_conditions: bool,
    /// Report non-function names declared more than once in one document.
    pub report_duplicate_declarations: bool,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        CheckerOptions {
            strict_conditions: true,
            report_duplicate_declarations: true,
        }
    }
}

/// Per-node results cached during a check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeLinks {
    pub resolved_type: Option<TypeId>,
    pub resolved_symbol: Option<SymbolId>,
}

pub struct CheckerContext<'a> {
    pub workspace: &'a WorkspaceSymbolTable,
    /// Document being checked.
    pub file: &'a SourceFile,
    pub file_id: Option<FileId>,
    /// Every open document in host order, the checked one included.
    pub documents: Vec<&'a SourceFile>,
    documents_by_id: FxHashMap<FileId, &'a SourceFile>,
    pub options: CheckerOptions,

    pub types: TypeInterner,
    pub node_links: FxHashMap<NodeIndex, NodeLinks>,
    pub symbol_types: FxHashMap<SymbolId, TypeId>,

    pub diagnostics: Vec<Diagnostic>,
    /// (start, code) pairs already reported.
    pub(crate) emitted: FxHashSet<(u32, u32)>,

    /// Enclosing loops of the statement being checked.
    pub(crate) loop_depth: u32,
    /// Declared return type of the enclosing function body.
    pub(crate) return_type: Option<TypeId>,
    pub(crate) expr_depth: u32,
}

impl<'a> CheckerContext<'a> {
    pub fn new(
        workspace: &'a WorkspaceSymbolTable,
        documents: impl IntoIterator<Item = &'a SourceFile>,
        file: &'a SourceFile,
        options: CheckerOptions,
    ) -> Self {
        let mut documents: Vec<&'a SourceFile> = documents.into_iter().collect();
        if !documents.iter().any(|doc| std::ptr::eq(*doc, file)) {
            documents.push(file);
        }
        let documents_by_id = documents
            .iter()
            .filter_map(|&doc| workspace.file_id(&doc.file_name).map(|id| (id, doc)))
            .collect();

        CheckerContext {
            workspace,
            file,
            file_id: workspace.file_id(&file.file_name),
            documents,
            documents_by_id,
            options,
            types: TypeInterner::new(),
            node_links: FxHashMap::default(),
            symbol_types: FxHashMap::default(),
            diagnostics: Vec::new(),
            emitted: FxHashSet::default(),
            loop_depth: 0,
            return_type: None,
            expr_depth: 0,
        }
    }

    /// Open document registered under `file`.
    pub fn document(&self, file: FileId) -> Option<&'a SourceFile> {
        self.documents_by_id.get(&file).copied()
    }

    /// Forget everything computed by a previous check.
    pub(crate) fn reset(&mut self) {
        self.types = TypeInterner::new();
        self.node_links.clear();
        self.symbol_types.clear();
        self.diagnostics.clear();
        self.emitted.clear();
        self.loop_depth = 0;
        self.return_type = None;
        self.expr_depth = 0;
    }
}
