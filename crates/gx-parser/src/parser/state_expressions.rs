//! Expression productions: assignment, binary precedence climbing, unary,
//! postfix chains and primaries.

use super::base::NodeIndex;
use super::node::{AccessExprData, BinaryExprData, CallExprData, ParenthesizedData, UnaryExprData};
use super::state::{ParserState, ParsingContext};
use super::syntax_kind_ext;
use gx_common::diagnostics::diagnostic_messages;
use gx_scanner::{SyntaxKind, token_is_assignment_operator};

/// Binary operator precedence; 0 for tokens that are not binary operators.
pub(crate) fn binary_operator_precedence(kind: SyntaxKind) -> u8 {
    match kind {
        SyntaxKind::BarBarToken => 1,
        SyntaxKind::AmpersandAmpersandToken => 2,
        SyntaxKind::BarToken => 3,
        SyntaxKind::CaretToken => 4,
        SyntaxKind::AmpersandToken => 5,
        SyntaxKind::EqualsEqualsToken | SyntaxKind::ExclamationEqualsToken => 6,
        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken => 7,
        SyntaxKind::LessThanLessThanToken | SyntaxKind::GreaterThanGreaterThanToken => 8,
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => 9,
        SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => 10,
        _ => 0,
    }
}

fn is_prefix_operator(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::TildeToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
    )
}

impl ParserState {
    pub(crate) fn is_start_of_expression(&self) -> bool {
        match self.token() {
            SyntaxKind::Identifier
            | SyntaxKind::NumericLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::OpenParenToken => true,
            token => is_prefix_operator(token),
        }
    }

    pub(crate) fn parse_expression(&mut self) -> NodeIndex {
        self.parse_assignment_expression()
    }

    /// Right-associative; only identifiers, property/element access and
    /// calls are accepted as the left operand.
    fn parse_assignment_expression(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return self.create_missing_identifier();
        }
        let mut expr = self.parse_binary_expression(0);
        if token_is_assignment_operator(self.token()) && self.is_left_hand_side(expr) {
            let start = self.start_node_from(expr);
            let operator_token = self.token() as u16;
            self.next_token();
            let right = self.parse_assignment_expression();
            let span = self.finish_node(start);
            expr = self.arena.add_binary_expr(
                span,
                BinaryExprData {
                    left: expr,
                    operator_token,
                    right,
                },
            );
        }
        self.exit_recursion();
        expr
    }

    fn is_left_hand_side(&self, expr: NodeIndex) -> bool {
        matches!(
            self.arena.kind(expr),
            Some(kind) if kind == SyntaxKind::Identifier as u16
                || kind == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION
                || kind == syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION
                || kind == syntax_kind_ext::CALL_EXPRESSION
        )
    }

    /// Precedence climbing. Operators at or below `min_precedence` are left
    /// to the caller, which makes every level left-associative.
    fn parse_binary_expression(&mut self, min_precedence: u8) -> NodeIndex {
        let mut left = self.parse_unary_expression();
        loop {
            let precedence = binary_operator_precedence(self.token());
            if precedence == 0 || precedence <= min_precedence {
                break;
            }
            let start = self.start_node_from(left);
            let operator_token = self.token() as u16;
            self.next_token();
            let right = self.parse_binary_expression(precedence);
            let span = self.finish_node(start);
            left = self.arena.add_binary_expr(
                span,
                BinaryExprData {
                    left,
                    operator_token,
                    right,
                },
            );
        }
        left
    }

    fn parse_unary_expression(&mut self) -> NodeIndex {
        if !is_prefix_operator(self.token()) {
            return self.parse_postfix_expression();
        }
        if !self.enter_recursion() {
            return self.create_missing_identifier();
        }
        let start = self.start_node();
        let operator = self.token() as u16;
        self.next_token();
        let operand = self.parse_unary_expression();
        let span = self.finish_node(start);
        self.exit_recursion();
        self.arena.add_unary_expr(
            syntax_kind_ext::PREFIX_UNARY_EXPRESSION,
            span,
            UnaryExprData { operator, operand },
        )
    }

    /// `.name`, `[expr]`, `(args)` and postfix `++`/`--`, looped.
    fn parse_postfix_expression(&mut self) -> NodeIndex {
        let mut expr = self.parse_primary_expression();
        loop {
            expr = match self.token() {
                SyntaxKind::DotToken => {
                    let start = self.start_node_from(expr);
                    self.next_token();
                    let name = self.parse_identifier();
                    let span = self.finish_node(start);
                    self.arena.add_access_expr(
                        syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION,
                        span,
                        AccessExprData {
                            expression: expr,
                            name_or_argument: name,
                        },
                    )
                }
                SyntaxKind::OpenBracketToken => {
                    let start = self.start_node_from(expr);
                    self.next_token();
                    let argument = self.parse_expression();
                    self.parse_expected(SyntaxKind::CloseBracketToken);
                    let span = self.finish_node(start);
                    self.arena.add_access_expr(
                        syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION,
                        span,
                        AccessExprData {
                            expression: expr,
                            name_or_argument: argument,
                        },
                    )
                }
                SyntaxKind::OpenParenToken => {
                    let start = self.start_node_from(expr);
                    let arguments = self.parse_bracketed_list(
                        ParsingContext::ArgumentExpressions,
                        SyntaxKind::OpenParenToken,
                        SyntaxKind::CloseParenToken,
                        Self::parse_expression,
                    );
                    let span = self.finish_node(start);
                    self.arena.add_call_expr(
                        span,
                        CallExprData {
                            expression: expr,
                            arguments,
                        },
                    )
                }
                SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken => {
                    let start = self.start_node_from(expr);
                    let operator = self.token() as u16;
                    self.next_token();
                    let span = self.finish_node(start);
                    self.arena.add_unary_expr(
                        syntax_kind_ext::POSTFIX_UNARY_EXPRESSION,
                        span,
                        UnaryExprData {
                            operator,
                            operand: expr,
                        },
                    )
                }
                _ => break,
            };
        }
        expr
    }

    fn parse_primary_expression(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::Identifier => self.parse_identifier(),
            SyntaxKind::NumericLiteral | SyntaxKind::StringLiteral => self.parse_literal(),
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword | SyntaxKind::NullKeyword => {
                let kind = self.token();
                let start = self.start_node();
                self.next_token();
                let span = self.finish_node(start);
                self.arena.add_token(kind as u16, span)
            }
            SyntaxKind::OpenParenToken => self.parse_parenthesized_expression(),
            _ => {
                self.parse_error_at_current_token(&diagnostic_messages::EXPRESSION_EXPECTED, &[]);
                self.create_missing_identifier()
            }
        }
    }

    fn parse_parenthesized_expression(&mut self) -> NodeIndex {
        let start = self.start_node();
        self.next_token();
        let expression = self.parse_expression();
        self.parse_expected(SyntaxKind::CloseParenToken);
        let span = self.finish_node(start);
        self.arena
            .add_parenthesized(span, ParenthesizedData { expression })
    }
}
