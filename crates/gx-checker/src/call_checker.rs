//! Call expressions.

use crate::state::CheckerState;
use gx_common::diagnostics::diagnostic_messages;
use gx_parser::NodeIndex;
use gx_solver::{ReferenceKind, TypeData, TypeId};

impl<'a> CheckerState<'a> {
    /// The callee must have a function type and the argument count must match
    /// its parameter count. Arguments are checked as expressions but their
    /// types are not compared with the parameter types.
    pub(crate) fn get_type_of_call_expression(&mut self, idx: NodeIndex) -> TypeId {
        let file = self.ctx.file;
        let Some(call) = file.arena.get(idx).and_then(|node| file.arena.get_call_expr(node)) else {
            return TypeId::UNKNOWN;
        };

        let callee = self.get_type_of_expression(call.expression);
        for &argument in &call.arguments.nodes {
            self.get_type_of_expression(argument);
        }

        if callee.is_unknown() {
            return TypeId::UNKNOWN;
        }
        let types = &self.ctx.types;
        let callee = match types.lookup(types.resolve_typedef(callee)) {
            // Calling through a `funcref` whose target is not known.
            Some(TypeData::Reference(ReferenceKind::Funcref, inner)) if inner.is_unknown() => {
                return TypeId::UNKNOWN;
            }
            Some(TypeData::Reference(ReferenceKind::Funcref, inner)) => *inner,
            _ => callee,
        };
        let Some(signature) = self.ctx.types.signature(callee).cloned() else {
            let callee_text = self.type_to_string(callee);
            self.error_at_node(call.expression, &diagnostic_messages::NOT_CALLABLE, &[&callee_text]);
            return TypeId::UNKNOWN;
        };

        let argument_count = call.arguments.nodes.len();
        if argument_count != signature.arity() {
            let expected = signature.arity().to_string();
            let got = argument_count.to_string();
            self.error_at_node(
                idx,
                &diagnostic_messages::ARGUMENT_COUNT_MISMATCH,
                &[&expected, &got],
            );
        }
        signature.return_type
    }
}
