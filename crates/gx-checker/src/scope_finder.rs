//! Name lookup for identifiers in expressions.

use crate::state::CheckerState;
use gx_binder::symbol_flags;
use gx_common::SymbolId;
use gx_parser::{NodeIndex, node_flags, syntax_kind_ext};

impl<'a> CheckerState<'a> {
    /// Resolve `name` as seen from `location`.
    ///
    /// Order: members of the enclosing function (parameters and locals), the
    /// document's file-level names, then non-static globals of every other
    /// open document.
    pub fn resolve_name(&self, name: &str, location: NodeIndex) -> Option<SymbolId> {
        let workspace = self.ctx.workspace;
        let file = self.ctx.file;

        let function = self.enclosing_function(location);
        if let Some(found) = function
            .and_then(|idx| file.arena.symbol(idx))
            .and_then(|symbol| workspace.lookup_member(symbol, name))
        {
            return Some(found);
        }
        if let Some(found) = file.symbol.and_then(|root| workspace.lookup_member(root, name)) {
            return Some(found);
        }
        let file_id = self.ctx.file_id?;
        workspace.resolve_global(name, file_id)
    }

    /// Nearest `FUNCTION_DECLARATION` ancestor of `idx`.
    pub(crate) fn enclosing_function(&self, mut idx: NodeIndex) -> Option<NodeIndex> {
        let arena = &self.ctx.file.arena;
        while idx.is_some() {
            if arena.kind(idx) == Some(syntax_kind_ext::FUNCTION_DECLARATION) {
                return Some(idx);
            }
            idx = arena.parent(idx);
        }
        None
    }

    /// Is any declaration of `symbol_id` marked `const`?
    pub(crate) fn is_constant_symbol(&self, symbol_id: SymbolId) -> bool {
        let Some(symbol) = self.ctx.workspace.get_symbol(symbol_id) else {
            return false;
        };
        if !symbol.has_any_flags(symbol_flags::VARIABLE) {
            return false;
        }
        symbol.declarations.iter().any(|declaration| {
            self.ctx.document(declaration.file).is_some_and(|doc| {
                doc.arena
                    .get(declaration.node)
                    .is_some_and(|node| node.has_flag(node_flags::CONST))
            })
        })
    }
}
