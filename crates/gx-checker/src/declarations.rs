//! Declarations: variables, functions, structs and typedefs.

use crate::state::CheckerState;
use gx_binder::symbol_flags;
use gx_common::SymbolId;
use gx_common::diagnostics::diagnostic_messages;
use gx_parser::{NodeIndex, node_flags, syntax_kind_ext};
use gx_solver::TypeId;
use rustc_hash::FxHashMap;

impl<'a> CheckerState<'a> {
    pub(crate) fn check_top_level_declaration(&mut self, idx: NodeIndex) {
        let file = self.ctx.file;
        let arena = &file.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };

        match node.kind {
            syntax_kind_ext::VARIABLE_DECLARATION => self.check_variable_declaration(idx),
            syntax_kind_ext::FUNCTION_DECLARATION => self.check_function_declaration(idx),
            syntax_kind_ext::STRUCT_DECLARATION => {
                if let Some(data) = arena.get_struct(node) {
                    for &member in &data.members.nodes {
                        let type_node = arena.get_declared_type(member);
                        let ty = self.resolve_type_node(file, type_node);
                        self.links_mut(member).resolved_type = Some(ty);
                        self.check_type_node(type_node);
                    }
                }
            }
            syntax_kind_ext::TYPEDEF_DECLARATION => {
                let type_node = arena.get_declared_type(idx);
                let ty = self.resolve_type_node(file, type_node);
                self.links_mut(idx).resolved_type = Some(ty);
                self.check_type_node(type_node);
            }
            // include
            _ => {}
        }
    }

    /// Global or local variable: `const` needs an initializer and the
    /// initializer must be assignable to the declared type.
    pub(crate) fn check_variable_declaration(&mut self, idx: NodeIndex) {
        let file = self.ctx.file;
        let arena = &file.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };
        let Some(variable) = arena.get_variable(node) else {
            return;
        };

        let declared = self.resolve_type_node(file, variable.type_node);
        self.links_mut(idx).resolved_type = Some(declared);
        self.check_type_node(variable.type_node);

        if variable.initializer.is_none() {
            if node.has_flag(node_flags::CONST) && !arena.is_missing(variable.name) {
                let name = arena.get_identifier_text(variable.name).unwrap_or("");
                self.error_at_node(
                    variable.name,
                    &diagnostic_messages::CONST_MUST_BE_INITIALIZED,
                    &[name],
                );
            }
            return;
        }
        let initializer = self.get_type_of_expression(variable.initializer);
        self.check_type_assignable(initializer, declared, variable.initializer);
    }

    fn check_function_declaration(&mut self, idx: NodeIndex) {
        let file = self.ctx.file;
        let arena = &file.arena;
        let Some(function) = arena.get(idx).and_then(|node| arena.get_function(node)) else {
            return;
        };

        let return_type = self.resolve_type_node(file, function.type_node);
        self.links_mut(idx).resolved_type = Some(return_type);
        self.check_type_node(function.type_node);
        for &param in &function.parameters.nodes {
            let type_node = arena.get_declared_type(param);
            let ty = self.resolve_type_node(file, type_node);
            self.links_mut(param).resolved_type = Some(ty);
            self.check_type_node(type_node);
        }
        if function.body.is_none() {
            return;
        }

        let saved_return = self.ctx.return_type.replace(return_type);
        let saved_depth = std::mem::replace(&mut self.ctx.loop_depth, 0);
        self.check_statement(function.body);
        self.ctx.return_type = saved_return;
        self.ctx.loop_depth = saved_depth;
    }

    /// Array sizes inside a type node are integer expressions.
    pub(crate) fn check_type_node(&mut self, idx: NodeIndex) {
        let file = self.ctx.file;
        let arena = &file.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };

        match node.kind {
            syntax_kind_ext::ARRAY_TYPE => {
                let Some(data) = arena.get_array_type(node) else {
                    return;
                };
                self.check_type_node(data.element_type);
                if data.size.is_some() {
                    let size = self.get_type_of_expression(data.size);
                    self.check_type_assignable(size, TypeId::INTEGER, data.size);
                }
            }
            syntax_kind_ext::MAPPED_TYPE => {
                if let Some(data) = arena.get_mapped_type(node) {
                    for &argument in &data.type_arguments.nodes {
                        self.check_type_node(argument);
                    }
                }
            }
            _ => {}
        }
    }

    /// Report every non-function name declared more than once in the same
    /// scope of this document. Function prototypes followed by their
    /// definition are not duplicates.
    ///
    /// Only symbols reachable from this document's root and detached symbols
    /// are visited.
    pub(crate) fn check_duplicate_declarations(&mut self) {
        let Some(file_id) = self.ctx.file_id else {
            return;
        };
        let file = self.ctx.file;
        let workspace = self.ctx.workspace;
        let mut pending: Vec<SymbolId> = workspace.file_symbols(file_id);
        pending.extend_from_slice(workspace.detached_symbols(file_id));
        let mut duplicates: Vec<(NodeIndex, &'a str)> = Vec::new();

        while let Some(id) = pending.pop() {
            let Some(symbol) = workspace.get_symbol(id) else {
                continue;
            };
            pending.extend(symbol.members.iter().map(|(_, &member)| member));
            if symbol.has_any_flags(symbol_flags::FUNCTION | symbol_flags::SOURCE_FILE) {
                continue;
            }
            let mut seen: FxHashMap<NodeIndex, usize> = FxHashMap::default();
            for declaration in symbol.declarations_in(file_id) {
                let scope = self.declaration_scope(declaration.node);
                let count = seen.entry(scope).or_insert(0);
                *count += 1;
                if *count > 1 {
                    duplicates.push((declaration.node, symbol.escaped_name.as_str()));
                }
            }
        }

        for (declaration, name) in duplicates {
            let name_idx = file.arena.get_declaration_name(declaration);
            self.error_at_node(name_idx, &diagnostic_messages::DUPLICATE_IDENTIFIER, &[name]);
        }
    }

    /// Nearest enclosing function, struct or source file node.
    fn declaration_scope(&self, idx: NodeIndex) -> NodeIndex {
        let arena = &self.ctx.file.arena;
        let mut current = arena.parent(idx);
        while current.is_some() {
            match arena.kind(current) {
                Some(syntax_kind_ext::FUNCTION_DECLARATION)
                | Some(syntax_kind_ext::STRUCT_DECLARATION)
                | Some(syntax_kind_ext::SOURCE_FILE) => return current,
                _ => current = arena.parent(current),
            }
        }
        NodeIndex::NONE
    }

    /// Declared type recorded for a declaration node in the last run.
    pub fn declared_type(&self, idx: NodeIndex) -> TypeId {
        self.resolved_type(idx).unwrap_or(TypeId::UNKNOWN)
    }
}
