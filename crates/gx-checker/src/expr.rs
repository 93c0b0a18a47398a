//! Identifiers and operator expressions.

use crate::state::CheckerState;
use gx_common::diagnostics::diagnostic_messages;
use gx_parser::NodeIndex;
use gx_scanner::{SyntaxKind, token_is_assignment_operator, token_to_string};
use gx_solver::{TypeId, binary_operation_type, is_valid_postfix_operation, prefix_operation_type};

impl<'a> CheckerState<'a> {
    pub(crate) fn get_type_of_identifier(&mut self, idx: NodeIndex) -> TypeId {
        let file = self.ctx.file;
        if file.arena.is_missing(idx) {
            return TypeId::UNKNOWN;
        }
        let Some(name) = file.arena.get_identifier_text(idx) else {
            return TypeId::UNKNOWN;
        };
        let Some(symbol) = self.resolve_name(name, idx) else {
            self.error_at_node(idx, &diagnostic_messages::CANNOT_FIND_NAME, &[name]);
            return TypeId::UNKNOWN;
        };
        self.links_mut(idx).resolved_symbol = Some(symbol);
        self.get_type_of_symbol(symbol)
    }

    pub(crate) fn get_type_of_binary_expression(&mut self, idx: NodeIndex) -> TypeId {
        let file = self.ctx.file;
        let Some(binary) = file.arena.get(idx).and_then(|node| file.arena.get_binary_expr(node))
        else {
            return TypeId::UNKNOWN;
        };
        let Some(operator) = SyntaxKind::try_from_u16(binary.operator_token) else {
            return TypeId::UNKNOWN;
        };
        if token_is_assignment_operator(operator) {
            return self.check_assignment_expression(idx, binary.left, operator, binary.right);
        }

        let left = self.get_type_of_expression(binary.left);
        let right = self.get_type_of_expression(binary.right);
        let strict = self.ctx.options.strict_conditions;
        match binary_operation_type(&self.ctx.types, operator, left, right, strict) {
            Some(result) => result,
            None => {
                let left_text = self.type_to_string(left);
                let right_text = self.type_to_string(right);
                self.error_at_node(
                    idx,
                    &diagnostic_messages::OPERATOR_CANNOT_BE_APPLIED_TO_TYPES,
                    &[operator_text(operator), &left_text, &right_text],
                );
                TypeId::UNKNOWN
            }
        }
    }

    pub(crate) fn get_type_of_prefix_expression(&mut self, idx: NodeIndex) -> TypeId {
        let file = self.ctx.file;
        let Some(unary) = file.arena.get(idx).and_then(|node| file.arena.get_unary_expr(node))
        else {
            return TypeId::UNKNOWN;
        };
        let Some(operator) = SyntaxKind::try_from_u16(unary.operator) else {
            return TypeId::UNKNOWN;
        };
        let operand = self.get_type_of_expression(unary.operand);
        if matches!(operator, SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken) {
            self.check_update_target(unary.operand);
        }

        let strict = self.ctx.options.strict_conditions;
        match prefix_operation_type(&self.ctx.types, operator, operand, strict) {
            Some(result) => result,
            None => {
                self.report_unary_operator_error(idx, operator, operand);
                TypeId::UNKNOWN
            }
        }
    }

    pub(crate) fn get_type_of_postfix_expression(&mut self, idx: NodeIndex) -> TypeId {
        let file = self.ctx.file;
        let Some(unary) = file.arena.get(idx).and_then(|node| file.arena.get_unary_expr(node))
        else {
            return TypeId::UNKNOWN;
        };
        let Some(operator) = SyntaxKind::try_from_u16(unary.operator) else {
            return TypeId::UNKNOWN;
        };
        let operand = self.get_type_of_expression(unary.operand);
        self.check_update_target(unary.operand);

        if is_valid_postfix_operation(&self.ctx.types, operator, operand) {
            self.ctx.types.apparent_type(operand)
        } else {
            self.report_unary_operator_error(idx, operator, operand);
            TypeId::UNKNOWN
        }
    }

    fn report_unary_operator_error(&mut self, idx: NodeIndex, operator: SyntaxKind, operand: TypeId) {
        let operand_text = self.type_to_string(operand);
        self.error_at_node(
            idx,
            &diagnostic_messages::OPERATOR_CANNOT_BE_APPLIED_TO_TYPE,
            &[operator_text(operator), &operand_text],
        );
    }
}

pub(crate) fn operator_text(operator: SyntaxKind) -> &'static str {
    token_to_string(operator).unwrap_or("?")
}
