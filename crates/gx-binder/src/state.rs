//! Binder: one depth-first pass over a parsed document that creates or
//! merges symbols and links declaration nodes to them.

use crate::symbols::{Declaration, symbol_flags};
use crate::workspace::WorkspaceSymbolTable;
use gx_common::diagnostics::{Diagnostic, diagnostic_messages};
use gx_common::{FileId, SymbolId};
use gx_parser::parser::node::Node;
use gx_parser::parser::node_flags;
use gx_parser::{NodeIndex, SourceFile, syntax_kind_ext};
use tracing::{debug, trace};

/// Walk state for binding one document.
pub struct BinderState<'a> {
    workspace: &'a mut WorkspaceSymbolTable,
    source_file: &'a SourceFile,
    file: FileId,
    file_root: SymbolId,
    /// Nearest enclosing declaration node; the root while at file level.
    current_scope: NodeIndex,
    /// Symbol whose members receive new declarations.
    current_container: SymbolId,
    /// Declaration node -> symbol links, applied to the arena afterwards.
    node_symbols: Vec<(NodeIndex, SymbolId)>,
    detached: Vec<SymbolId>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> BinderState<'a> {
    pub fn new(
        workspace: &'a mut WorkspaceSymbolTable,
        source_file: &'a SourceFile,
        file: FileId,
        file_root: SymbolId,
    ) -> BinderState<'a> {
        BinderState {
            workspace,
            source_file,
            file,
            file_root,
            current_scope: source_file.root,
            current_container: file_root,
            node_symbols: Vec::new(),
            detached: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Bind every top-level statement.
    pub fn bind_statements(&mut self) {
        let source_file = self.source_file;
        for &stmt in source_file.statements() {
            self.bind_node(stmt);
        }
    }

    fn bind_node(&mut self, idx: NodeIndex) {
        let source_file = self.source_file;
        let arena = &source_file.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };

        match node.kind {
            syntax_kind_ext::STRUCT_DECLARATION => {
                let Some(symbol) = self.declare_symbol(idx, node, symbol_flags::STRUCT) else {
                    return;
                };
                if let Some(data) = arena.get_struct(node) {
                    self.with_container(idx, symbol, |binder| {
                        for &member in &data.members.nodes {
                            binder.bind_node(member);
                        }
                    });
                }
            }
            syntax_kind_ext::PROPERTY_DECLARATION => {
                self.declare_symbol(idx, node, symbol_flags::PROPERTY);
            }
            syntax_kind_ext::TYPEDEF_DECLARATION => {
                self.declare_symbol(idx, node, symbol_flags::TYPEDEF);
            }
            syntax_kind_ext::PARAMETER_DECLARATION => {
                self.declare_symbol(idx, node, symbol_flags::FUNCTION_PARAMETER);
            }
            syntax_kind_ext::FUNCTION_DECLARATION => {
                let flags = symbol_flags::FUNCTION | static_flag(node);
                let Some(symbol) = self.declare_symbol(idx, node, flags) else {
                    return;
                };
                if let Some(data) = arena.get_function(node) {
                    self.with_container(idx, symbol, |binder| {
                        for &param in &data.parameters.nodes {
                            binder.bind_node(param);
                        }
                        binder.bind_node(data.body);
                    });
                }
            }
            syntax_kind_ext::VARIABLE_DECLARATION => {
                let category = if self.current_scope == source_file.root {
                    symbol_flags::GLOBAL_VARIABLE
                } else {
                    symbol_flags::LOCAL_VARIABLE
                };
                self.declare_symbol(idx, node, category | static_flag(node));
            }
            syntax_kind_ext::BLOCK => {
                if let Some(block) = arena.get_block(node) {
                    for &stmt in &block.statements.nodes {
                        self.bind_node(stmt);
                    }
                }
            }
            syntax_kind_ext::IF_STATEMENT => {
                if let Some(data) = arena.get_if_statement(node) {
                    self.bind_node(data.then_statement);
                    self.bind_node(data.else_statement);
                }
            }
            syntax_kind_ext::WHILE_STATEMENT
            | syntax_kind_ext::DO_STATEMENT
            | syntax_kind_ext::FOR_STATEMENT => {
                if let Some(data) = arena.get_loop(node) {
                    self.bind_node(data.statement);
                }
            }
            // Expressions (including calls and property accesses), includes
            // and jump statements declare nothing.
            _ => {}
        }
    }

    fn with_container(&mut self, scope: NodeIndex, container: SymbolId, f: impl FnOnce(&mut Self)) {
        let saved_scope = std::mem::replace(&mut self.current_scope, scope);
        let saved_container = std::mem::replace(&mut self.current_container, container);
        f(self);
        self.current_scope = saved_scope;
        self.current_container = saved_container;
    }

    /// Find or create the symbol for a declaration node.
    ///
    /// Lookup order: an existing member of the current container, then (at
    /// file level, for non-static declarations) a global from another open
    /// document, then a fresh symbol. A declaration whose category differs
    /// from the symbol it would join gets a detached symbol and a
    /// `Duplicate identifier` diagnostic.
    fn declare_symbol(&mut self, idx: NodeIndex, node: &Node, flags: u32) -> Option<SymbolId> {
        let source_file = self.source_file;
        let arena = &source_file.arena;
        let name_idx = arena.get_declaration_name(idx);
        let name = arena.get_identifier_text(name_idx)?;
        if name.is_empty() {
            return None;
        }

        let declaration = Declaration {
            file: self.file,
            node: idx,
            has_value: has_value(source_file, node),
        };
        let container = self.current_container;
        let existing = self.workspace.lookup_member(container, name).or_else(|| {
            if container == self.file_root && flags & symbol_flags::STATIC == 0 {
                self.workspace.resolve_global(name, self.file)
            } else {
                None
            }
        });

        let symbol_id = match existing {
            Some(existing_id) => {
                let Some(symbol) = self.workspace.symbols.get_mut(existing_id) else {
                    return None;
                };
                if symbol.category() != flags & symbol_flags::CATEGORY_MASK {
                    self.diagnostics.push(source_file.diagnostic_at(
                        name_idx,
                        &diagnostic_messages::DUPLICATE_IDENTIFIER,
                        &[name],
                    ));
                    let detached = self.alloc_symbol(name, flags, declaration, container);
                    self.detached.push(detached);
                    self.node_symbols.push((idx, detached));
                    return Some(detached);
                }
                symbol.add_declaration(declaration);
                trace!(
                    name,
                    symbol = existing_id.0,
                    declarations = symbol.declarations.len(),
                    "merged declaration"
                );
                self.workspace.add_member(container, name, existing_id);
                existing_id
            }
            None => {
                let id = self.alloc_symbol(name, flags, declaration, container);
                self.workspace.add_member(container, name, id);
                id
            }
        };
        self.node_symbols.push((idx, symbol_id));
        Some(symbol_id)
    }

    fn alloc_symbol(
        &mut self,
        name: &str,
        flags: u32,
        declaration: Declaration,
        parent: SymbolId,
    ) -> SymbolId {
        let id = self.workspace.symbols.alloc(flags, name.to_string());
        if let Some(symbol) = self.workspace.symbols.get_mut(id) {
            symbol.add_declaration(declaration);
            symbol.parent = Some(parent);
        }
        id
    }
}

fn static_flag(node: &Node) -> u32 {
    if node.has_flag(node_flags::STATIC) {
        symbol_flags::STATIC
    } else {
        symbol_flags::NONE
    }
}

fn has_value(source_file: &SourceFile, node: &Node) -> bool {
    let arena = &source_file.arena;
    if let Some(func) = arena.get_function(node) {
        func.body.is_some()
    } else if let Some(var) = arena.get_variable(node) {
        var.initializer.is_some()
    } else {
        false
    }
}

/// Bind a parsed document into the workspace: register the file, create its
/// root symbol and declare everything it contains. A document that is
/// already bound is unbound first.
#[tracing::instrument(level = "debug", skip_all, fields(file = %source_file.file_name))]
pub fn bind_source_file(workspace: &mut WorkspaceSymbolTable, source_file: &mut SourceFile) {
    let file = workspace.register_file(&source_file.file_name);
    if workspace.is_bound(file) {
        workspace.unbind_file(file);
    }

    let root_symbol = workspace
        .symbols
        .alloc(symbol_flags::SOURCE_FILE, source_file.file_name.clone());
    if let Some(symbol) = workspace.symbols.get_mut(root_symbol) {
        symbol.add_declaration(Declaration {
            file,
            node: source_file.root,
            has_value: false,
        });
    }
    workspace.set_root_symbol(file, root_symbol);

    let (node_symbols, detached, diagnostics) = {
        let mut binder = BinderState::new(workspace, source_file, file, root_symbol);
        binder.bind_statements();
        (binder.node_symbols, binder.detached, binder.diagnostics)
    };
    workspace.add_detached(file, detached);

    let arena = &mut source_file.arena;
    for (node, symbol) in &node_symbols {
        arena.set_symbol(*node, Some(*symbol));
    }
    arena.set_symbol(source_file.root, Some(root_symbol));
    source_file.symbol = Some(root_symbol);
    source_file.bind_diagnostics = diagnostics;

    debug!(
        declarations = node_symbols.len(),
        file_symbols = workspace.file_symbols(file).len(),
        diagnostics = source_file.bind_diagnostics.len(),
        "bound source file"
    );
}

/// Remove a document's declarations from the workspace and clear its symbol
/// links. Symbols still declared by other documents survive.
#[tracing::instrument(level = "debug", skip_all, fields(file = %source_file.file_name))]
pub fn unbind_source_file(workspace: &mut WorkspaceSymbolTable, source_file: &mut SourceFile) {
    if let Some(file) = workspace.file_id(&source_file.file_name) {
        workspace.unbind_file(file);
    }
    for info in &mut source_file.arena.extended_info {
        info.symbol = None;
    }
    source_file.symbol = None;
    source_file.bind_diagnostics.clear();
}
