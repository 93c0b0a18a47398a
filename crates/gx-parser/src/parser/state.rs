//! Parser state: token handling, node frames, diagnostics, speculation and
//! list parsing. Grammar productions live in `state_statements.rs`,
//! `state_expressions.rs` and `state_types.rs`.

use super::base::{NodeIndex, NodeList, NodeSpan, SyntaxToken};
use super::node::{ArenaCheckpoint, IdentifierData, NodeArena};
use super::node_flags;
use gx_common::diagnostics::{DiagnosticCategory, DiagnosticMessage, diagnostic_messages};
use gx_common::format_message;
use gx_common::limits::MAX_PARSER_RECURSION_DEPTH;
use gx_scanner::{ScannerSnapshot, ScannerState, SyntaxKind, token_to_string};

/// A syntactic problem found while parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub start: u32,
    pub length: u32,
    pub message: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

/// Value-type checkpoint of the whole parser.
#[derive(Clone, Debug)]
pub struct ParserSnapshot {
    scanner: ScannerSnapshot,
    current_token: SyntaxKind,
    prev_token_end: u32,
    frame_depth: usize,
    token_stack_len: usize,
    arena: ArenaCheckpoint,
    diagnostics_len: usize,
    recursion_depth: u32,
}

/// List kinds, each with its own element and terminator rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsingContext {
    SourceElements,
    BlockStatements,
    StructMembers,
    Parameters,
    ArgumentExpressions,
    TypeArguments,
}

/// Start marker returned by `start_node`.
#[derive(Clone, Copy, Debug)]
#[must_use]
pub(crate) struct NodeStart {
    pub pos: u32,
    pub line: u32,
    pub character: u32,
}

/// Recursive-descent parser over a single document.
pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub(crate) arena: NodeArena,
    pub(crate) file_name: String,
    pub(crate) current_token: SyntaxKind,
    /// End offset of the last consumed token.
    pub(crate) prev_token_end: u32,
    pub(crate) parse_diagnostics: Vec<ParseDiagnostic>,
    /// Consumed tokens not yet claimed by a finished node.
    token_stack: Vec<SyntaxToken>,
    /// `token_stack` length at each open node.
    frames: Vec<usize>,
    pub(crate) recursion_depth: u32,
}

impl ParserState {
    pub fn new(file_name: String, source_text: String) -> ParserState {
        let arena = NodeArena::for_source_len(source_text.len());
        ParserState {
            scanner: ScannerState::new(source_text),
            arena,
            file_name,
            current_token: SyntaxKind::Unknown,
            prev_token_end: 0,
            parse_diagnostics: Vec::new(),
            token_stack: Vec::new(),
            frames: Vec::new(),
            recursion_depth: 0,
        }
    }

    pub fn get_arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    pub fn get_diagnostics(&self) -> &[ParseDiagnostic] {
        &self.parse_diagnostics
    }

    pub fn get_file_name(&self) -> &str {
        &self.file_name
    }

    pub fn get_source_text(&self) -> &str {
        self.scanner.source_text()
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.current_token
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    #[inline]
    pub(crate) fn token_pos(&self) -> u32 {
        self.scanner.get_token_pos() as u32
    }

    #[inline]
    pub(crate) fn token_end(&self) -> u32 {
        self.scanner.get_text_pos() as u32
    }

    pub(crate) fn token_value(&self) -> &str {
        self.scanner.get_token_value()
    }

    /// Consume the current token and scan the next one.
    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        if self.current_token != SyntaxKind::Unknown || self.token_end() > self.token_pos() {
            self.token_stack.push(SyntaxToken {
                kind: self.current_token,
                pos: self.token_pos(),
                end: self.token_end(),
            });
            self.prev_token_end = self.token_end();
        }
        self.current_token = self.scanner.scan();
        self.current_token
    }

    /// Consume the current token if it matches.
    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or report `'{0}' expected.` without advancing.
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.parse_optional(kind) {
            return true;
        }
        let text = token_to_string(kind).unwrap_or("token");
        self.parse_error_at_current_token(&diagnostic_messages::TOKEN_EXPECTED, &[text]);
        false
    }

    // =========================================================================
    // Node frames
    // =========================================================================

    /// Open a node at the current token.
    pub(crate) fn start_node(&mut self) -> NodeStart {
        self.frames.push(self.token_stack.len());
        NodeStart {
            pos: self.token_pos(),
            line: self.scanner.get_line(),
            character: self.scanner.get_char(),
        }
    }

    /// Open a node that begins where an already-built node begins (binary
    /// operands, postfix chains).
    pub(crate) fn start_node_from(&mut self, first_child: NodeIndex) -> NodeStart {
        self.frames.push(self.token_stack.len());
        let (pos, line, character) = match (
            self.arena.get(first_child),
            self.arena.get_extended(first_child),
        ) {
            (Some(node), Some(info)) => (node.pos, info.line, info.character),
            _ => (
                self.token_pos(),
                self.scanner.get_line(),
                self.scanner.get_char(),
            ),
        };
        NodeStart {
            pos,
            line,
            character,
        }
    }

    /// Close the innermost node: claim the tokens consumed since it opened
    /// and end it at the last consumed token.
    pub(crate) fn finish_node(&mut self, start: NodeStart) -> NodeSpan {
        let frame = self.frames.pop().unwrap_or(self.token_stack.len());
        let syntax_tokens = self.token_stack.split_off(frame.min(self.token_stack.len()));
        let end = if syntax_tokens.is_empty() && self.prev_token_end < start.pos {
            start.pos
        } else {
            self.prev_token_end.max(start.pos)
        };
        NodeSpan {
            pos: start.pos,
            end,
            line: start.line,
            character: start.character,
            syntax_tokens,
        }
    }

    /// Close the innermost frame without building a node. Its tokens stay
    /// with the enclosing frame.
    pub(crate) fn abandon_node(&mut self, _start: NodeStart) {
        self.frames.pop();
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Report a diagnostic unless an identical one already exists at `start`.
    pub(crate) fn parse_error_at(
        &mut self,
        start: u32,
        length: u32,
        message: &DiagnosticMessage,
        args: &[&str],
    ) {
        let text = format_message(message.message, args);
        if self
            .parse_diagnostics
            .iter()
            .rev()
            .any(|d| d.start == start && d.code == message.code && d.message == text)
        {
            return;
        }
        tracing::trace!(start, code = message.code, %text, "parse error");
        self.parse_diagnostics.push(ParseDiagnostic {
            start,
            length,
            message: text,
            code: message.code,
            category: message.category,
        });
    }

    pub(crate) fn parse_error_at_current_token(&mut self, message: &DiagnosticMessage, args: &[&str]) {
        let start = self.token_pos();
        let length = self.token_end().saturating_sub(start);
        self.parse_error_at(start, length, message, args);
    }

    /// Report at a node's range.
    pub(crate) fn parse_error_at_node(
        &mut self,
        node: NodeIndex,
        message: &DiagnosticMessage,
        args: &[&str],
    ) {
        if let Some(n) = self.arena.get(node) {
            let (start, length) = (n.pos, n.end.saturating_sub(n.pos));
            self.parse_error_at(start, length, message, args);
        }
    }

    /// Diagnostic for an unexpected token: keyword and punctuation text is
    /// echoed back, anything else uses the generic message.
    pub(crate) fn report_unexpected_token(&mut self) {
        let text = self.scanner.get_token_text().to_string();
        if text.is_empty() {
            self.parse_error_at_current_token(&diagnostic_messages::DECLARATION_OR_STATEMENT_EXPECTED, &[]);
        } else {
            self.parse_error_at_current_token(&diagnostic_messages::UNEXPECTED_TOKEN, &[&text]);
        }
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    /// Returns false (after reporting once) when nesting is too deep.
    pub(crate) fn enter_recursion(&mut self) -> bool {
        if self.recursion_depth >= MAX_PARSER_RECURSION_DEPTH {
            self.parse_error_at_current_token(&diagnostic_messages::MAXIMUM_NESTING_DEPTH_EXCEEDED, &[]);
            return false;
        }
        self.recursion_depth += 1;
        true
    }

    pub(crate) fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }

    // =========================================================================
    // Speculation
    // =========================================================================

    pub(crate) fn save_state(&self) -> ParserSnapshot {
        ParserSnapshot {
            scanner: self.scanner.save_state(),
            current_token: self.current_token,
            prev_token_end: self.prev_token_end,
            frame_depth: self.frames.len(),
            token_stack_len: self.token_stack.len(),
            arena: self.arena.checkpoint(),
            diagnostics_len: self.parse_diagnostics.len(),
            recursion_depth: self.recursion_depth,
        }
    }

    pub(crate) fn restore_state(&mut self, snapshot: ParserSnapshot) {
        self.scanner.restore_state(snapshot.scanner);
        self.current_token = snapshot.current_token;
        self.prev_token_end = snapshot.prev_token_end;
        self.frames.truncate(snapshot.frame_depth);
        self.token_stack.truncate(snapshot.token_stack_len);
        self.arena.rollback(&snapshot.arena);
        self.parse_diagnostics.truncate(snapshot.diagnostics_len);
        self.recursion_depth = snapshot.recursion_depth;
    }

    /// Run `f` and always roll back every effect.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.save_state();
        let result = f(self);
        self.restore_state(snapshot);
        result
    }

    /// Run `f`, rolling back when it returns `None`.
    pub(crate) fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.save_state();
        let result = f(self);
        if result.is_none() {
            self.restore_state(snapshot);
        }
        result
    }

    // =========================================================================
    // Identifiers and missing nodes
    // =========================================================================

    /// Parse an identifier, or create a zero-width missing one after
    /// reporting `Identifier expected.`.
    pub(crate) fn parse_identifier(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::Identifier) {
            let start = self.start_node();
            let escaped_text = self.token_value().to_string();
            self.next_token();
            let span = self.finish_node(start);
            return self.arena.add_identifier(span, IdentifierData { escaped_text });
        }
        self.parse_error_at_current_token(&diagnostic_messages::IDENTIFIER_EXPECTED, &[]);
        self.create_missing_identifier()
    }

    pub(crate) fn create_missing_identifier(&mut self) -> NodeIndex {
        let start = self.start_node();
        let span = self.finish_node(start);
        let zero_width = NodeSpan {
            end: span.pos,
            ..span
        };
        let node = self.arena.add_identifier(
            zero_width,
            IdentifierData {
                escaped_text: String::new(),
            },
        );
        self.arena.add_flags(node, node_flags::MISSING);
        node
    }

    /// Zero-width placeholder of `kind` (missing expression or type).
    pub(crate) fn create_missing_node(&mut self, kind: SyntaxKind) -> NodeIndex {
        let start = self.start_node();
        let span = self.finish_node(start);
        let zero_width = NodeSpan {
            end: span.pos,
            ..span
        };
        let node = self.arena.add_token(kind as u16, zero_width);
        self.arena.add_flags(node, node_flags::MISSING);
        node
    }

    // =========================================================================
    // Lists
    // =========================================================================

    fn is_list_terminator(&self, context: ParsingContext) -> bool {
        if self.is_token(SyntaxKind::EndOfFileToken) {
            return true;
        }
        match context {
            ParsingContext::SourceElements => false,
            ParsingContext::BlockStatements | ParsingContext::StructMembers => {
                self.is_token(SyntaxKind::CloseBraceToken)
            }
            ParsingContext::Parameters | ParsingContext::ArgumentExpressions => {
                self.is_token(SyntaxKind::CloseParenToken)
            }
            ParsingContext::TypeArguments => self.is_token(SyntaxKind::GreaterThanToken),
        }
    }

    fn is_list_element(&mut self, context: ParsingContext) -> bool {
        match context {
            ParsingContext::SourceElements => self.is_start_of_top_level_declaration(),
            ParsingContext::BlockStatements => self.is_start_of_statement(),
            ParsingContext::StructMembers
            | ParsingContext::Parameters
            | ParsingContext::TypeArguments => self.is_start_of_type(),
            ParsingContext::ArgumentExpressions => self.is_start_of_expression(),
        }
    }

    fn list_element_error(&mut self, context: ParsingContext) {
        let message = match context {
            ParsingContext::SourceElements => &diagnostic_messages::DECLARATION_OR_STATEMENT_EXPECTED,
            ParsingContext::BlockStatements => &diagnostic_messages::STATEMENT_EXPECTED,
            ParsingContext::StructMembers => &diagnostic_messages::PROPERTY_DECLARATION_EXPECTED,
            ParsingContext::Parameters => &diagnostic_messages::PARAMETER_DECLARATION_EXPECTED,
            ParsingContext::ArgumentExpressions => &diagnostic_messages::EXPRESSION_EXPECTED,
            ParsingContext::TypeArguments => &diagnostic_messages::TYPE_EXPECTED,
        };
        self.parse_error_at_current_token(message, &[]);
    }

    /// Skip one token that cannot start a list element.
    fn skip_unexpected(&mut self, context: ParsingContext) {
        self.list_element_error(context);
        self.next_token();
    }

    /// Parse `element` until the context's terminator. Unrecognized tokens
    /// are reported and skipped.
    pub(crate) fn parse_list(
        &mut self,
        context: ParsingContext,
        element: fn(&mut Self) -> NodeIndex,
    ) -> NodeList {
        let pos = self.token_pos();
        let mut nodes = Vec::new();
        while !self.is_list_terminator(context) {
            if self.is_list_element(context) {
                let before = self.token_pos();
                let node = element(self);
                if node.is_some() {
                    nodes.push(node);
                }
                if self.token_pos() == before && !self.is_list_terminator(context) {
                    self.skip_unexpected(context);
                }
            } else {
                self.skip_unexpected(context);
            }
        }
        NodeList {
            nodes,
            pos,
            end: self.prev_token_end.max(pos),
            has_trailing_comma: false,
        }
    }

    /// Parse comma-separated `element`s up to the terminator. A missing
    /// comma is reported and tolerated when another element follows.
    pub(crate) fn parse_delimited_list(
        &mut self,
        context: ParsingContext,
        element: fn(&mut Self) -> NodeIndex,
    ) -> NodeList {
        let pos = self.token_pos();
        let mut nodes = Vec::new();
        let mut has_trailing_comma = false;
        while !self.is_list_terminator(context) {
            if !self.is_list_element(context) {
                if self.is_token(SyntaxKind::CommaToken) {
                    self.list_element_error(context);
                    self.next_token();
                    continue;
                }
                // Not ours: let the caller's parse_expected report the closer.
                if self.is_token(SyntaxKind::SemicolonToken)
                    || self.is_token(SyntaxKind::CloseBraceToken)
                {
                    break;
                }
                self.skip_unexpected(context);
                continue;
            }
            let before = self.token_pos();
            let node = element(self);
            if node.is_some() {
                nodes.push(node);
            }
            has_trailing_comma = false;
            if self.parse_optional(SyntaxKind::CommaToken) {
                has_trailing_comma = true;
                continue;
            }
            if self.is_list_terminator(context) {
                break;
            }
            if self.token_pos() == before {
                self.skip_unexpected(context);
                continue;
            }
            if self.is_list_element(context) {
                self.parse_expected(SyntaxKind::CommaToken);
                continue;
            }
            break;
        }
        if has_trailing_comma {
            self.parse_error_at(
                self.prev_token_end.saturating_sub(1),
                1,
                &diagnostic_messages::UNEXPECTED_TOKEN,
                &[","],
            );
        }
        NodeList {
            nodes,
            pos,
            end: self.prev_token_end.max(pos),
            has_trailing_comma,
        }
    }

    /// `open` delimited-list `close`.
    pub(crate) fn parse_bracketed_list(
        &mut self,
        context: ParsingContext,
        open: SyntaxKind,
        close: SyntaxKind,
        element: fn(&mut Self) -> NodeIndex,
    ) -> NodeList {
        if !self.parse_expected(open) {
            return NodeList {
                pos: self.token_pos(),
                end: self.token_pos(),
                ..NodeList::default()
            };
        }
        let list = self.parse_delimited_list(context, element);
        self.parse_expected(close);
        list
    }

    /// Collect modifier keyword tokens as nodes, returning the list and
    /// packed `node_flags`.
    pub(crate) fn parse_modifiers(&mut self) -> (Option<NodeList>, u16) {
        if !gx_scanner::token_is_modifier(self.token()) {
            return (None, 0);
        }
        let pos = self.token_pos();
        let mut nodes = Vec::new();
        let mut flags = 0u16;
        while gx_scanner::token_is_modifier(self.token()) {
            let kind = self.token();
            let flag = match kind {
                SyntaxKind::StaticKeyword => node_flags::STATIC,
                SyntaxKind::ConstKeyword => node_flags::CONST,
                SyntaxKind::NativeKeyword => node_flags::NATIVE,
                _ => unreachable!("token_is_modifier admitted {kind:?}"),
            };
            if flags & flag != 0 {
                let text = self.scanner.get_token_text().to_string();
                self.parse_error_at_current_token(&diagnostic_messages::MODIFIER_NOT_ALLOWED, &[&text]);
            }
            flags |= flag;
            let start = self.start_node();
            self.next_token();
            let span = self.finish_node(start);
            nodes.push(self.arena.add_token(kind as u16, span));
        }
        let list = NodeList {
            nodes,
            pos,
            end: self.prev_token_end,
            has_trailing_comma: false,
        };
        (Some(list), flags)
    }

    /// Drain the scanner's diagnostics into the parse diagnostics and order
    /// everything by position.
    pub(crate) fn collect_scanner_diagnostics(&mut self) {
        let scanner_diagnostics: Vec<_> = self.scanner.get_scanner_diagnostics().to_vec();
        for diag in scanner_diagnostics {
            self.parse_diagnostics.push(ParseDiagnostic {
                start: diag.pos as u32,
                length: diag.length as u32,
                message: diag.message,
                code: diag.code,
                category: diag.category,
            });
        }
        self.parse_diagnostics.sort_by_key(|d| d.start);
    }
}
