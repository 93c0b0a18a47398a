//! Source file, top-level declaration and statement productions.

use super::base::{NodeIndex, NodeList};
use super::node::{
    BlockData, ExprStatementData, FunctionData, IfStatementData, IncludeData, LiteralData,
    LoopData, NamedTypeData, ReturnData, SourceFileData, StructData, VariableData,
};
use super::state::{NodeStart, ParserState, ParsingContext};
use super::syntax_kind_ext;
use gx_common::diagnostics::diagnostic_messages;
use gx_scanner::{SyntaxKind, token_is_modifier, token_is_type_keyword};

impl ParserState {
    /// Parse the whole document into a `SOURCE_FILE` node and fill parent
    /// links.
    pub fn parse_source_file(&mut self) -> NodeIndex {
        let start = self.start_node();
        self.next_token();

        let statements = self.parse_list(
            ParsingContext::SourceElements,
            Self::parse_top_level_declaration,
        );

        let eof_start = self.start_node();
        let mut eof_span = self.finish_node(eof_start);
        eof_span.end = eof_span.pos;
        let end_of_file_token = self
            .arena
            .add_token(SyntaxKind::EndOfFileToken as u16, eof_span);

        self.collect_scanner_diagnostics();

        let mut span = self.finish_node(start);
        span.pos = 0;
        span.end = self.scanner.source_text().len() as u32;
        let root = self.arena.add_source_file(
            span,
            SourceFileData {
                statements,
                end_of_file_token,
                file_name: self.file_name.clone(),
            },
        );
        self.arena.set_parents(root);
        tracing::debug!(
            file = %self.file_name,
            nodes = self.arena.len(),
            diagnostics = self.parse_diagnostics.len(),
            "parsed source file"
        );
        root
    }

    // =========================================================================
    // Top level
    // =========================================================================

    pub(crate) fn is_start_of_top_level_declaration(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::IncludeKeyword | SyntaxKind::StructKeyword | SyntaxKind::TypedefKeyword
        ) || token_is_modifier(self.token())
            || self.is_start_of_type()
    }

    fn parse_top_level_declaration(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::IncludeKeyword => self.parse_include(),
            SyntaxKind::StructKeyword => self.parse_struct_declaration(),
            SyntaxKind::TypedefKeyword => self.parse_typedef_declaration(),
            _ => self.parse_declaration(true),
        }
    }

    fn parse_include(&mut self) -> NodeIndex {
        let start = self.start_node();
        self.next_token();
        let path = if self.is_token(SyntaxKind::StringLiteral) {
            self.parse_literal()
        } else {
            self.parse_error_at_current_token(
                &diagnostic_messages::TOKEN_EXPECTED,
                &["string literal"],
            );
            self.create_missing_node(SyntaxKind::StringLiteral)
        };
        self.parse_optional(SyntaxKind::SemicolonToken);
        let span = self.finish_node(start);
        self.arena.add_include(span, IncludeData { path })
    }

    fn parse_struct_declaration(&mut self) -> NodeIndex {
        let start = self.start_node();
        self.next_token();
        let name = self.parse_identifier();
        let members = if self.parse_expected(SyntaxKind::OpenBraceToken) {
            let members = self.parse_list(ParsingContext::StructMembers, Self::parse_property);
            self.parse_expected(SyntaxKind::CloseBraceToken);
            members
        } else {
            NodeList::default()
        };
        self.parse_optional(SyntaxKind::SemicolonToken);
        let span = self.finish_node(start);
        self.arena.add_struct(span, StructData { name, members })
    }

    fn parse_property(&mut self) -> NodeIndex {
        let start = self.start_node();
        let type_node = self.parse_type();
        let name = self.parse_identifier();
        self.parse_expected(SyntaxKind::SemicolonToken);
        let span = self.finish_node(start);
        self.arena.add_named_type(
            syntax_kind_ext::PROPERTY_DECLARATION,
            span,
            NamedTypeData { type_node, name },
        )
    }

    fn parse_typedef_declaration(&mut self) -> NodeIndex {
        let start = self.start_node();
        self.next_token();
        let type_node = self.parse_type();
        let name = self.parse_identifier();
        self.parse_expected(SyntaxKind::SemicolonToken);
        let span = self.finish_node(start);
        self.arena.add_named_type(
            syntax_kind_ext::TYPEDEF_DECLARATION,
            span,
            NamedTypeData { type_node, name },
        )
    }

    /// `Modifiers? Type Identifier` followed by a function or variable tail.
    /// Functions are only recognized at the top level.
    fn parse_declaration(&mut self, top_level: bool) -> NodeIndex {
        let start = self.start_node();
        let (modifiers, flags) = self.parse_modifiers();
        let type_node = self.parse_type();
        let name = self.parse_identifier();

        let node = if top_level && self.is_token(SyntaxKind::OpenParenToken) {
            self.parse_function_tail(start, modifiers, type_node, name)
        } else {
            self.parse_variable_tail(start, modifiers, type_node, name)
        };
        self.arena.add_flags(node, flags);
        node
    }

    fn parse_function_tail(
        &mut self,
        start: NodeStart,
        modifiers: Option<NodeList>,
        type_node: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        let parameters = self.parse_bracketed_list(
            ParsingContext::Parameters,
            SyntaxKind::OpenParenToken,
            SyntaxKind::CloseParenToken,
            Self::parse_parameter,
        );
        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_block()
        } else {
            self.parse_expected(SyntaxKind::SemicolonToken);
            NodeIndex::NONE
        };
        let span = self.finish_node(start);
        self.arena.add_function(
            span,
            FunctionData {
                modifiers,
                type_node,
                name,
                parameters,
                body,
            },
        )
    }

    fn parse_parameter(&mut self) -> NodeIndex {
        let start = self.start_node();
        let type_node = self.parse_type();
        let name = self.parse_identifier();
        let span = self.finish_node(start);
        self.arena.add_named_type(
            syntax_kind_ext::PARAMETER_DECLARATION,
            span,
            NamedTypeData { type_node, name },
        )
    }

    fn parse_variable_tail(
        &mut self,
        start: NodeStart,
        modifiers: Option<NodeList>,
        type_node: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_expression()
        } else {
            NodeIndex::NONE
        };
        self.parse_expected(SyntaxKind::SemicolonToken);
        let span = self.finish_node(start);
        self.arena.add_variable(
            span,
            VariableData {
                modifiers,
                type_node,
                name,
                initializer,
            },
        )
    }

    /// String or numeric literal at the current token.
    pub(crate) fn parse_literal(&mut self) -> NodeIndex {
        let kind = self.token();
        let start = self.start_node();
        let flags = self.scanner.get_token_flags();
        let data = LiteralData {
            text: self.token_value().to_string(),
            is_fixed: kind == SyntaxKind::NumericLiteral && flags.is_fixed(),
            is_unterminated: self.scanner.is_unterminated(),
        };
        self.next_token();
        let span = self.finish_node(start);
        self.arena.add_literal(kind as u16, span, data)
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub(crate) fn is_start_of_statement(&mut self) -> bool {
        match self.token() {
            SyntaxKind::OpenBraceToken
            | SyntaxKind::IfKeyword
            | SyntaxKind::WhileKeyword
            | SyntaxKind::DoKeyword
            | SyntaxKind::ForKeyword
            | SyntaxKind::ReturnKeyword
            | SyntaxKind::BreakKeyword
            | SyntaxKind::ContinueKeyword
            | SyntaxKind::BreakpointKeyword
            | SyntaxKind::SemicolonToken => true,
            token => {
                token_is_modifier(token) || self.is_start_of_type() || self.is_start_of_expression()
            }
        }
    }

    pub(crate) fn parse_statement(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let statement = match self.token() {
            SyntaxKind::OpenBraceToken => self.parse_block(),
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::DoKeyword => self.parse_do_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::BreakKeyword => {
                self.parse_keyword_statement(syntax_kind_ext::BREAK_STATEMENT)
            }
            SyntaxKind::ContinueKeyword => {
                self.parse_keyword_statement(syntax_kind_ext::CONTINUE_STATEMENT)
            }
            SyntaxKind::BreakpointKeyword => {
                self.parse_keyword_statement(syntax_kind_ext::BREAKPOINT_STATEMENT)
            }
            SyntaxKind::SemicolonToken => {
                let start = self.start_node();
                self.next_token();
                let span = self.finish_node(start);
                self.arena.add_token(syntax_kind_ext::EMPTY_STATEMENT, span)
            }
            token if token_is_modifier(token) || token_is_type_keyword(token) => {
                self.parse_declaration(false)
            }
            SyntaxKind::Identifier if self.is_local_declaration_ahead() => {
                self.parse_declaration(false)
            }
            _ => self.parse_expression_statement(),
        };
        self.exit_recursion();
        statement
    }

    /// `Type Identifier` followed by `;`, `=`, `,` or `[`. Always rolls back.
    fn is_local_declaration_ahead(&mut self) -> bool {
        self.look_ahead(|p| {
            p.parse_type();
            if !p.is_token(SyntaxKind::Identifier) {
                return false;
            }
            p.next_token();
            matches!(
                p.token(),
                SyntaxKind::SemicolonToken
                    | SyntaxKind::EqualsToken
                    | SyntaxKind::CommaToken
                    | SyntaxKind::OpenBracketToken
            )
        })
    }

    pub(crate) fn parse_block(&mut self) -> NodeIndex {
        let start = self.start_node();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let statements = self.parse_list(ParsingContext::BlockStatements, Self::parse_statement);
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let span = self.finish_node(start);
        self.arena.add_block(span, BlockData { statements })
    }

    /// `'(' Expression ')'`
    fn parse_condition(&mut self) -> NodeIndex {
        self.parse_expected(SyntaxKind::OpenParenToken);
        let condition = self.parse_expression();
        self.parse_expected(SyntaxKind::CloseParenToken);
        condition
    }

    fn parse_if_statement(&mut self) -> NodeIndex {
        let start = self.start_node();
        self.next_token();
        let expression = self.parse_condition();
        let then_statement = self.parse_statement();
        let else_statement = if self.parse_optional(SyntaxKind::ElseKeyword) {
            self.parse_statement()
        } else {
            NodeIndex::NONE
        };
        let span = self.finish_node(start);
        self.arena.add_if_statement(
            span,
            IfStatementData {
                expression,
                then_statement,
                else_statement,
            },
        )
    }

    fn parse_while_statement(&mut self) -> NodeIndex {
        let start = self.start_node();
        self.next_token();
        let condition = self.parse_condition();
        let statement = self.parse_statement();
        let span = self.finish_node(start);
        self.arena.add_loop(
            syntax_kind_ext::WHILE_STATEMENT,
            span,
            LoopData {
                initializer: NodeIndex::NONE,
                condition,
                incrementor: NodeIndex::NONE,
                statement,
            },
        )
    }

    fn parse_do_statement(&mut self) -> NodeIndex {
        let start = self.start_node();
        self.next_token();
        let statement = self.parse_statement();
        self.parse_expected(SyntaxKind::WhileKeyword);
        let condition = self.parse_condition();
        self.parse_expected(SyntaxKind::SemicolonToken);
        let span = self.finish_node(start);
        self.arena.add_loop(
            syntax_kind_ext::DO_STATEMENT,
            span,
            LoopData {
                initializer: NodeIndex::NONE,
                condition,
                incrementor: NodeIndex::NONE,
                statement,
            },
        )
    }

    fn parse_for_statement(&mut self) -> NodeIndex {
        let start = self.start_node();
        self.next_token();
        self.parse_expected(SyntaxKind::OpenParenToken);
        let initializer = self.parse_optional_expression(SyntaxKind::SemicolonToken);
        self.parse_expected(SyntaxKind::SemicolonToken);
        let condition = self.parse_optional_expression(SyntaxKind::SemicolonToken);
        self.parse_expected(SyntaxKind::SemicolonToken);
        let incrementor = self.parse_optional_expression(SyntaxKind::CloseParenToken);
        self.parse_expected(SyntaxKind::CloseParenToken);
        let statement = self.parse_statement();
        let span = self.finish_node(start);
        self.arena.add_loop(
            syntax_kind_ext::FOR_STATEMENT,
            span,
            LoopData {
                initializer,
                condition,
                incrementor,
                statement,
            },
        )
    }

    /// Expression unless the next token is `terminator`.
    fn parse_optional_expression(&mut self, terminator: SyntaxKind) -> NodeIndex {
        if self.is_token(terminator) {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        }
    }

    fn parse_return_statement(&mut self) -> NodeIndex {
        let start = self.start_node();
        self.next_token();
        let expression = if self.is_start_of_expression() {
            self.parse_expression()
        } else {
            NodeIndex::NONE
        };
        self.parse_expected(SyntaxKind::SemicolonToken);
        let span = self.finish_node(start);
        self.arena.add_return(span, ReturnData { expression })
    }

    /// `break;`, `continue;` and `breakpoint;`
    fn parse_keyword_statement(&mut self, kind: u16) -> NodeIndex {
        let start = self.start_node();
        self.next_token();
        self.parse_expected(SyntaxKind::SemicolonToken);
        let span = self.finish_node(start);
        self.arena.add_token(kind, span)
    }

    fn parse_expression_statement(&mut self) -> NodeIndex {
        let start = self.start_node();
        let expression = self.parse_expression();
        if self.arena.is_missing(expression) {
            // Nothing consumed: leave the token to list recovery.
            self.abandon_node(start);
            return NodeIndex::NONE;
        }
        self.parse_expected(SyntaxKind::SemicolonToken);
        let span = self.finish_node(start);
        self.arena
            .add_expr_statement(span, ExprStatementData { expression })
    }
}
