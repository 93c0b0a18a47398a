//! Assignment and update targets.

use crate::expr::operator_text;
use crate::state::CheckerState;
use gx_binder::symbol_flags;
use gx_common::diagnostics::diagnostic_messages;
use gx_parser::{NodeIndex, syntax_kind_ext};
use gx_scanner::{SyntaxKind, compound_assignment_operator};
use gx_solver::{TypeId, binary_operation_type, is_assignable_to};

impl<'a> CheckerState<'a> {
    /// `left op right` where `op` is `=` or a compound assignment. The result
    /// has the type of the target.
    pub(crate) fn check_assignment_expression(
        &mut self,
        idx: NodeIndex,
        left: NodeIndex,
        operator: SyntaxKind,
        right: NodeIndex,
    ) -> TypeId {
        let target = self.get_type_of_expression(left);
        let value = self.get_type_of_expression(right);
        self.check_update_target(left);

        let Some(binary_operator) = compound_assignment_operator(operator) else {
            self.check_type_assignable(value, target, right);
            return target;
        };

        let strict = self.ctx.options.strict_conditions;
        match binary_operation_type(&self.ctx.types, binary_operator, target, value, strict) {
            Some(result) => self.check_type_assignable(result, target, right),
            None => {
                let target_text = self.type_to_string(target);
                let value_text = self.type_to_string(value);
                self.error_at_node(
                    idx,
                    &diagnostic_messages::OPERATOR_CANNOT_BE_APPLIED_TO_TYPES,
                    &[operator_text(operator), &target_text, &value_text],
                );
            }
        }
        target
    }

    /// The operand of an assignment, `++` or `--` must be a writable
    /// variable, property or element.
    pub(crate) fn check_update_target(&mut self, target: NodeIndex) {
        let file = self.ctx.file;
        let Some(kind) = file.arena.kind(target) else {
            return;
        };
        if file.arena.is_missing(target) {
            return;
        }

        match kind {
            k if k == SyntaxKind::Identifier as u16 => {
                let Some(symbol_id) = self.resolved_symbol(target) else {
                    // Unresolved names were already reported.
                    return;
                };
                let writable = self
                    .ctx
                    .workspace
                    .get_symbol(symbol_id)
                    .is_some_and(|symbol| {
                        symbol.has_any_flags(symbol_flags::VARIABLE | symbol_flags::FUNCTION_PARAMETER)
                    });
                if !writable {
                    self.error_at_node(target, &diagnostic_messages::INVALID_ASSIGNMENT_TARGET, &[]);
                } else if self.is_constant_symbol(symbol_id) {
                    let name = file.arena.get_identifier_text(target).unwrap_or("");
                    self.error_at_node(
                        target,
                        &diagnostic_messages::CANNOT_ASSIGN_TO_CONSTANT,
                        &[name],
                    );
                }
            }
            syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION
            | syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION => {}
            syntax_kind_ext::PARENTHESIZED_EXPRESSION => {
                if let Some(inner) = file
                    .arena
                    .get(target)
                    .and_then(|node| file.arena.get_parenthesized(node))
                {
                    self.check_update_target(inner.expression);
                }
            }
            _ => {
                self.error_at_node(target, &diagnostic_messages::INVALID_ASSIGNMENT_TARGET, &[]);
            }
        }
    }

    /// Report `Type 'source' is not assignable to type 'target'` at `node`
    /// unless the relation holds.
    pub(crate) fn check_type_assignable(&mut self, source: TypeId, target: TypeId, node: NodeIndex) {
        if is_assignable_to(&self.ctx.types, source, target) {
            return;
        }
        let source_text = self.type_to_string(source);
        let target_text = self.type_to_string(target);
        self.error_at_node(
            node,
            &diagnostic_messages::TYPE_NOT_ASSIGNABLE,
            &[&source_text, &target_text],
        );
    }
}
