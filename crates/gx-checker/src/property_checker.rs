//! Property and element access.

use crate::state::CheckerState;
use gx_common::diagnostics::diagnostic_messages;
use gx_parser::NodeIndex;
use gx_solver::{ReferenceKind, TypeData, TypeId};

impl<'a> CheckerState<'a> {
    /// `object.name` on a struct (or `structref`) value.
    pub(crate) fn get_type_of_property_access(&mut self, idx: NodeIndex) -> TypeId {
        let file = self.ctx.file;
        let Some(access) = file.arena.get(idx).and_then(|node| file.arena.get_access_expr(node))
        else {
            return TypeId::UNKNOWN;
        };

        let object = self.get_type_of_expression(access.expression);
        if object.is_unknown() || file.arena.is_missing(access.name_or_argument) {
            return TypeId::UNKNOWN;
        }
        let Some(name) = file.arena.get_identifier_text(access.name_or_argument) else {
            return TypeId::UNKNOWN;
        };

        let member = self
            .struct_symbol_of(object)
            .and_then(|symbol| self.ctx.workspace.lookup_member(symbol, name));
        let Some(member) = member else {
            let object_text = self.type_to_string(object);
            self.error_at_node(
                access.name_or_argument,
                &diagnostic_messages::UNDECLARED_PROPERTY,
                &[name, &object_text],
            );
            return TypeId::UNKNOWN;
        };

        self.links_mut(access.name_or_argument).resolved_symbol = Some(member);
        self.get_type_of_symbol(member)
    }

    /// `object[index]` yields the element type of an array; anything else is
    /// `Unknown`.
    pub(crate) fn get_type_of_element_access(&mut self, idx: NodeIndex) -> TypeId {
        let file = self.ctx.file;
        let Some(access) = file.arena.get(idx).and_then(|node| file.arena.get_access_expr(node))
        else {
            return TypeId::UNKNOWN;
        };

        let object = self.get_type_of_expression(access.expression);
        self.get_type_of_expression(access.name_or_argument);

        let types = &self.ctx.types;
        let array = match types.lookup(types.resolve_typedef(object)) {
            Some(TypeData::Reference(ReferenceKind::Arrayref, inner)) => *inner,
            _ => object,
        };
        types.array_element(array).unwrap_or(TypeId::UNKNOWN)
    }

    fn struct_symbol_of(&self, ty: TypeId) -> Option<gx_common::SymbolId> {
        let types = &self.ctx.types;
        match types.lookup(types.resolve_typedef(ty))? {
            TypeData::Reference(ReferenceKind::Structref, inner) => types.struct_symbol(*inner),
            _ => types.struct_symbol(ty),
        }
    }
}
