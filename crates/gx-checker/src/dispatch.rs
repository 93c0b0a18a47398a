//! Expression type computation dispatcher.

use crate::state::CheckerState;
use gx_common::limits::MAX_EXPR_CHECK_DEPTH;
use gx_parser::{NodeIndex, syntax_kind_ext};
use gx_scanner::SyntaxKind;
use gx_solver::{IntrinsicKind, TypeId};

/// Routes an expression node to the method that computes its type.
pub struct ExpressionDispatcher<'a, 'b> {
    pub checker: &'a mut CheckerState<'b>,
}

impl<'a, 'b> ExpressionDispatcher<'a, 'b> {
    pub fn new(checker: &'a mut CheckerState<'b>) -> Self {
        Self { checker }
    }

    pub fn dispatch_type_computation(&mut self, idx: NodeIndex) -> TypeId {
        let file = self.checker.ctx.file;
        let arena = &file.arena;
        let Some(node) = arena.get(idx) else {
            return TypeId::UNKNOWN;
        };

        match node.kind {
            k if k == SyntaxKind::Identifier as u16 => self.checker.get_type_of_identifier(idx),
            k if k == SyntaxKind::NumericLiteral as u16 => {
                let Some(literal) = arena.get_literal(node) else {
                    return TypeId::INTEGER;
                };
                let kind = if literal.is_fixed {
                    IntrinsicKind::Fixed
                } else {
                    IntrinsicKind::Integer
                };
                self.checker.ctx.types.literal(kind, literal.text.as_str())
            }
            k if k == SyntaxKind::StringLiteral as u16 => {
                let text = arena.get_literal(node).map_or("", |literal| literal.text.as_str());
                self.checker.ctx.types.literal(IntrinsicKind::String, text)
            }
            k if k == SyntaxKind::TrueKeyword as u16 => {
                self.checker.ctx.types.literal(IntrinsicKind::Bool, "true")
            }
            k if k == SyntaxKind::FalseKeyword as u16 => {
                self.checker.ctx.types.literal(IntrinsicKind::Bool, "false")
            }
            k if k == SyntaxKind::NullKeyword as u16 => TypeId::NULL,

            syntax_kind_ext::PARENTHESIZED_EXPRESSION => match arena.get_parenthesized(node) {
                Some(data) => self.checker.get_type_of_expression(data.expression),
                None => TypeId::UNKNOWN,
            },
            syntax_kind_ext::BINARY_EXPRESSION => self.checker.get_type_of_binary_expression(idx),
            syntax_kind_ext::PREFIX_UNARY_EXPRESSION => {
                self.checker.get_type_of_prefix_expression(idx)
            }
            syntax_kind_ext::POSTFIX_UNARY_EXPRESSION => {
                self.checker.get_type_of_postfix_expression(idx)
            }
            syntax_kind_ext::CALL_EXPRESSION => self.checker.get_type_of_call_expression(idx),
            syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION => {
                self.checker.get_type_of_property_access(idx)
            }
            syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION => {
                self.checker.get_type_of_element_access(idx)
            }
            _ => TypeId::UNKNOWN,
        }
    }
}

impl<'a> CheckerState<'a> {
    /// Type of an expression, cached per node for the current check.
    pub fn get_type_of_expression(&mut self, idx: NodeIndex) -> TypeId {
        if idx.is_none() {
            return TypeId::UNKNOWN;
        }
        if let Some(cached) = self.resolved_type(idx) {
            return cached;
        }
        if self.ctx.expr_depth >= MAX_EXPR_CHECK_DEPTH {
            return TypeId::UNKNOWN;
        }

        self.ctx.expr_depth += 1;
        let ty = ExpressionDispatcher::new(self).dispatch_type_computation(idx);
        self.ctx.expr_depth -= 1;

        self.links_mut(idx).resolved_type = Some(ty);
        ty
    }
}
