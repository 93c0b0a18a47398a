//! Type productions.
//!
//! ```text
//! Type := (TypeKeyword | Identifier) ('<' Type (',' Type)* '>')? ('[' Expression ']')*
//! ```

use super::base::NodeIndex;
use super::node::{ArrayTypeData, MappedTypeData, TypeRefData};
use super::state::{ParserState, ParsingContext};
use gx_common::diagnostics::diagnostic_messages;
use gx_scanner::{SyntaxKind, token_is_type_keyword};

impl ParserState {
    pub(crate) fn is_start_of_type(&self) -> bool {
        let token = self.token();
        token == SyntaxKind::Identifier || token_is_type_keyword(token)
    }

    /// Parse a type, or report `Type expected.` and return a zero-width
    /// missing type reference.
    pub(crate) fn parse_type(&mut self) -> NodeIndex {
        if !self.is_start_of_type() {
            self.parse_error_at_current_token(&diagnostic_messages::TYPE_EXPECTED, &[]);
            return self.create_missing_type();
        }
        if !self.enter_recursion() {
            return self.create_missing_type();
        }

        let start = self.start_node();
        let type_name = self.parse_type_name();
        let mut ty = if self.is_token(SyntaxKind::LessThanToken) {
            let type_arguments = self.parse_bracketed_list(
                ParsingContext::TypeArguments,
                SyntaxKind::LessThanToken,
                SyntaxKind::GreaterThanToken,
                Self::parse_type,
            );
            let span = self.finish_node(start);
            self.arena.add_mapped_type(
                span,
                MappedTypeData {
                    type_name,
                    type_arguments,
                },
            )
        } else {
            let span = self.finish_node(start);
            self.arena.add_type_ref(span, TypeRefData { type_name })
        };

        while self.is_token(SyntaxKind::OpenBracketToken) {
            let start = self.start_node_from(ty);
            self.next_token();
            let size = self.parse_expression();
            self.parse_expected(SyntaxKind::CloseBracketToken);
            let span = self.finish_node(start);
            ty = self.arena.add_array_type(
                span,
                ArrayTypeData {
                    element_type: ty,
                    size,
                },
            );
        }

        self.exit_recursion();
        ty
    }

    /// Keyword types become token nodes, user types identifiers.
    fn parse_type_name(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::Identifier) {
            return self.parse_identifier();
        }
        let kind = self.token();
        let start = self.start_node();
        self.next_token();
        let span = self.finish_node(start);
        self.arena.add_token(kind as u16, span)
    }

    fn create_missing_type(&mut self) -> NodeIndex {
        let start = self.start_node();
        let type_name = self.create_missing_identifier();
        let mut span = self.finish_node(start);
        span.end = span.pos;
        let node = self.arena.add_type_ref(span, TypeRefData { type_name });
        self.arena.add_flags(node, super::node_flags::MISSING);
        node
    }
}
