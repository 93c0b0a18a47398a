//! Expressions.

use super::{Printer, Result, unsupported};
use gx_parser::parser::node::Node;
use gx_parser::syntax_kind_ext;
use gx_scanner::{SyntaxKind, token_to_string};

impl<'a> Printer<'a> {
    pub(super) fn emit_expression(&mut self, node: &Node) -> Result<()> {
        let arena = self.arena;
        match node.kind {
            syntax_kind_ext::PARENTHESIZED_EXPRESSION => {
                let Some(data) = arena.get_parenthesized(node) else {
                    return Err(unsupported(node));
                };
                self.write("(");
                self.emit(data.expression)?;
                self.write(")");
                Ok(())
            }
            syntax_kind_ext::BINARY_EXPRESSION => {
                let Some(data) = arena.get_binary_expr(node) else {
                    return Err(unsupported(node));
                };
                self.emit(data.left)?;
                self.write(" ");
                self.write(operator_text(data.operator_token));
                self.write(" ");
                self.emit(data.right)
            }
            syntax_kind_ext::PREFIX_UNARY_EXPRESSION => {
                let Some(data) = arena.get_unary_expr(node) else {
                    return Err(unsupported(node));
                };
                self.write(operator_text(data.operator));
                self.emit(data.operand)
            }
            syntax_kind_ext::POSTFIX_UNARY_EXPRESSION => {
                let Some(data) = arena.get_unary_expr(node) else {
                    return Err(unsupported(node));
                };
                self.emit(data.operand)?;
                self.write(operator_text(data.operator));
                Ok(())
            }
            syntax_kind_ext::CALL_EXPRESSION => {
                let Some(data) = arena.get_call_expr(node) else {
                    return Err(unsupported(node));
                };
                self.emit(data.expression)?;
                self.write("(");
                self.emit_list(&data.arguments, ", ")?;
                self.write(")");
                Ok(())
            }
            syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION => {
                let Some(data) = arena.get_access_expr(node) else {
                    return Err(unsupported(node));
                };
                self.emit(data.expression)?;
                self.write(".");
                self.emit(data.name_or_argument)
            }
            syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION => {
                let Some(data) = arena.get_access_expr(node) else {
                    return Err(unsupported(node));
                };
                self.emit(data.expression)?;
                self.write("[");
                self.emit(data.name_or_argument)?;
                self.write("]");
                Ok(())
            }
            _ => Err(unsupported(node)),
        }
    }
}

fn operator_text(kind: u16) -> &'static str {
    SyntaxKind::try_from_u16(kind)
        .and_then(token_to_string)
        .unwrap_or("")
}
