//! Statements inside function bodies.

use crate::state::CheckerState;
use gx_common::diagnostics::diagnostic_messages;
use gx_parser::{NodeIndex, syntax_kind_ext};
use gx_solver::{TypeId, is_bool_expression};

impl<'a> CheckerState<'a> {
    pub fn check_statement(&mut self, idx: NodeIndex) {
        let file = self.ctx.file;
        let arena = &file.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };

        match node.kind {
            syntax_kind_ext::BLOCK => {
                if let Some(block) = arena.get_block(node) {
                    for &stmt in &block.statements.nodes {
                        self.check_statement(stmt);
                    }
                }
            }
            syntax_kind_ext::VARIABLE_DECLARATION => self.check_variable_declaration(idx),
            syntax_kind_ext::EXPRESSION_STATEMENT => {
                if let Some(data) = arena.get_expression_statement(node) {
                    self.get_type_of_expression(data.expression);
                }
            }
            syntax_kind_ext::IF_STATEMENT => {
                if let Some(data) = arena.get_if_statement(node) {
                    self.check_condition(data.expression);
                    self.check_statement(data.then_statement);
                    self.check_statement(data.else_statement);
                }
            }
            syntax_kind_ext::WHILE_STATEMENT => {
                if let Some(data) = arena.get_loop(node) {
                    self.check_condition(data.condition);
                    self.check_loop_body(data.statement);
                }
            }
            syntax_kind_ext::DO_STATEMENT => {
                if let Some(data) = arena.get_loop(node) {
                    self.check_loop_body(data.statement);
                    self.check_condition(data.condition);
                }
            }
            syntax_kind_ext::FOR_STATEMENT => {
                if let Some(data) = arena.get_loop(node) {
                    self.get_type_of_expression(data.initializer);
                    self.check_condition(data.condition);
                    self.get_type_of_expression(data.incrementor);
                    self.check_loop_body(data.statement);
                }
            }
            syntax_kind_ext::RETURN_STATEMENT => {
                let expression = arena
                    .get_return_statement(node)
                    .map_or(NodeIndex::NONE, |data| data.expression);
                self.check_return_statement(idx, expression);
            }
            syntax_kind_ext::BREAK_STATEMENT => {
                if self.ctx.loop_depth == 0 {
                    self.error_at_node(idx, &diagnostic_messages::BREAK_OUTSIDE_LOOP, &[]);
                }
            }
            syntax_kind_ext::CONTINUE_STATEMENT => {
                if self.ctx.loop_depth == 0 {
                    self.error_at_node(idx, &diagnostic_messages::CONTINUE_OUTSIDE_LOOP, &[]);
                }
            }
            // breakpoint; and empty statements
            _ => {}
        }
    }

    fn check_loop_body(&mut self, body: NodeIndex) {
        self.ctx.loop_depth += 1;
        self.check_statement(body);
        self.ctx.loop_depth -= 1;
    }

    /// Conditions must be `bool` (or `int` when conditions are not strict).
    /// An absent `for` condition is always true.
    fn check_condition(&mut self, expression: NodeIndex) {
        if expression.is_none() {
            return;
        }
        let ty = self.get_type_of_expression(expression);
        if !is_bool_expression(&self.ctx.types, ty, self.ctx.options.strict_conditions) {
            let type_text = self.type_to_string(ty);
            self.error_at_node(
                expression,
                &diagnostic_messages::CONDITION_NOT_BOOLEAN,
                &[&type_text],
            );
        }
    }

    fn check_return_statement(&mut self, idx: NodeIndex, expression: NodeIndex) {
        let Some(return_type) = self.ctx.return_type else {
            return;
        };

        if expression.is_some() {
            let ty = self.get_type_of_expression(expression);
            if return_type == TypeId::VOID {
                self.error_at_node(expression, &diagnostic_messages::VOID_FUNCTION_RETURNS_VALUE, &[]);
            } else {
                self.check_type_assignable(ty, return_type, expression);
            }
        } else if return_type != TypeId::VOID && !return_type.is_unknown() {
            let type_text = self.type_to_string(return_type);
            self.error_at_node(idx, &diagnostic_messages::MISSING_RETURN_VALUE, &[&type_text]);
        }
    }
}
