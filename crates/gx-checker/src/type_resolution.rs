//! Type nodes and declared symbol types.
//!
//! Type nodes are resolved in the arena of the document that owns them, so a
//! symbol declared in another open document gets the same type it would get
//! when that document is checked.

use crate::state::CheckerState;
use gx_binder::symbol_flags;
use gx_common::SymbolId;
use gx_parser::{NodeIndex, SourceFile, syntax_kind_ext};
use gx_scanner::{SyntaxKind, token_is_complex_type_keyword};
use gx_solver::{IntrinsicKind, ReferenceKind, SignatureMeta, TypeId};
use smallvec::SmallVec;

impl<'a> CheckerState<'a> {
    /// Resolve a type node of `doc`. Missing or malformed nodes are `Unknown`.
    pub fn resolve_type_node(&mut self, doc: &'a SourceFile, idx: NodeIndex) -> TypeId {
        let arena = &doc.arena;
        let Some(node) = arena.get(idx) else {
            return TypeId::UNKNOWN;
        };

        match node.kind {
            syntax_kind_ext::TYPE_REFERENCE => match arena.get_type_ref(node) {
                Some(data) => self.resolve_type_name(doc, data.type_name),
                None => TypeId::UNKNOWN,
            },
            syntax_kind_ext::MAPPED_TYPE => {
                let Some(data) = arena.get_mapped_type(node) else {
                    return TypeId::UNKNOWN;
                };
                let Some(kind) = arena
                    .kind(data.type_name)
                    .and_then(SyntaxKind::try_from_u16)
                    .and_then(ReferenceKind::from_keyword)
                else {
                    return TypeId::UNKNOWN;
                };
                let inner = match data.type_arguments.nodes.first() {
                    Some(&argument) => self.resolve_type_node(doc, argument),
                    None => TypeId::UNKNOWN,
                };
                self.ctx.types.reference(kind, inner)
            }
            syntax_kind_ext::ARRAY_TYPE => match arena.get_array_type(node) {
                Some(data) => {
                    let element = self.resolve_type_node(doc, data.element_type);
                    self.ctx.types.array(element)
                }
                None => TypeId::UNKNOWN,
            },
            _ => self.resolve_type_name(doc, idx),
        }
    }

    /// A bare type name: a type keyword token or an identifier naming a
    /// struct. Other names (typedefs, functions) are `Unknown` in type
    /// position.
    fn resolve_type_name(&mut self, doc: &'a SourceFile, idx: NodeIndex) -> TypeId {
        let arena = &doc.arena;
        let Some(kind) = arena.kind(idx) else {
            return TypeId::UNKNOWN;
        };
        if kind == SyntaxKind::Identifier as u16 {
            let Some(name) = arena.get_identifier_text(idx) else {
                return TypeId::UNKNOWN;
            };
            return match self.resolve_struct_symbol(doc, name) {
                Some(symbol) => self.get_type_of_symbol(symbol),
                None => TypeId::UNKNOWN,
            };
        }

        let Some(keyword) = SyntaxKind::try_from_u16(kind) else {
            return TypeId::UNKNOWN;
        };
        if let Some(intrinsic) = IntrinsicKind::from_keyword(keyword) {
            intrinsic.type_id()
        } else if token_is_complex_type_keyword(keyword) {
            self.ctx.types.complex(keyword)
        } else if let Some(reference) = ReferenceKind::from_keyword(keyword) {
            // Bare `funcref` without a type argument.
            self.ctx.types.reference(reference, TypeId::UNKNOWN)
        } else {
            TypeId::UNKNOWN
        }
    }

    /// Struct named `name`, seen from `doc`.
    fn resolve_struct_symbol(&self, doc: &SourceFile, name: &str) -> Option<SymbolId> {
        let workspace = self.ctx.workspace;
        let is_struct = |id: SymbolId| {
            workspace
                .get_symbol(id)
                .is_some_and(|symbol| symbol.has_any_flags(symbol_flags::STRUCT))
        };

        if let Some(found) = doc
            .symbol
            .and_then(|root| workspace.lookup_member(root, name))
            .filter(|&id| is_struct(id))
        {
            return Some(found);
        }
        let file = workspace.file_id(&doc.file_name)?;
        workspace.resolve_global(name, file).filter(|&id| is_struct(id))
    }

    /// Declared type of a symbol, computed once per check.
    pub fn get_type_of_symbol(&mut self, symbol_id: SymbolId) -> TypeId {
        if let Some(&cached) = self.ctx.symbol_types.get(&symbol_id) {
            return cached;
        }
        // Placeholder breaks cycles such as `typedef T T;`.
        self.ctx.symbol_types.insert(symbol_id, TypeId::UNKNOWN);
        let ty = self.compute_type_of_symbol(symbol_id);
        self.ctx.symbol_types.insert(symbol_id, ty);
        ty
    }

    fn compute_type_of_symbol(&mut self, symbol_id: SymbolId) -> TypeId {
        let workspace = self.ctx.workspace;
        let Some(symbol) = workspace.get_symbol(symbol_id) else {
            return TypeId::UNKNOWN;
        };
        let name = symbol.escaped_name.as_str();
        if symbol.has_any_flags(symbol_flags::STRUCT) {
            return self.ctx.types.struct_type(symbol_id, name);
        }

        let Some(declaration) = symbol.value_declaration.or_else(|| symbol.declarations.first().copied())
        else {
            return TypeId::UNKNOWN;
        };
        let Some(doc) = self.ctx.document(declaration.file) else {
            return TypeId::UNKNOWN;
        };
        if symbol.has_any_flags(symbol_flags::TYPEDEF) {
            let referenced = self.resolve_type_node(doc, doc.arena.get_declared_type(declaration.node));
            return self.ctx.types.typedef(name, referenced);
        }
        if symbol.has_any_flags(symbol_flags::FUNCTION) {
            let signature = self.signature_of_declaration(doc, declaration.node);
            return self.ctx.types.function(symbol_id, name, signature);
        }
        if symbol.has_any_flags(symbol_flags::VALUE) {
            return self.resolve_type_node(doc, doc.arena.get_declared_type(declaration.node));
        }
        TypeId::UNKNOWN
    }

    fn signature_of_declaration(&mut self, doc: &'a SourceFile, idx: NodeIndex) -> SignatureMeta {
        let arena = &doc.arena;
        let Some(function) = arena.get(idx).and_then(|node| arena.get_function(node)) else {
            return SignatureMeta::new(TypeId::UNKNOWN, []);
        };
        let return_type = self.resolve_type_node(doc, function.type_node);
        let parameters: SmallVec<[TypeId; 4]> = function
            .parameters
            .nodes
            .iter()
            .map(|&param| self.resolve_type_node(doc, arena.get_declared_type(param)))
            .collect();
        SignatureMeta::new(return_type, parameters)
    }
}
