//! A parsed document: arena, root node, text, line map and the three
//! diagnostic buckets filled by the parser, binder and checker.

use std::sync::Arc;

use super::base::NodeIndex;
use super::node::NodeArena;
use super::state::ParserState;
use gx_common::diagnostics::{Diagnostic, DiagnosticMessage};
use gx_common::{LineMap, Position, SymbolId};

/// Result of parsing one document. Replaced wholesale on every edit.
#[derive(Debug)]
pub struct SourceFile {
    pub file_name: String,
    pub text: Arc<str>,
    pub arena: NodeArena,
    /// The `SOURCE_FILE` node.
    pub root: NodeIndex,
    pub line_map: LineMap,
    pub parse_diagnostics: Vec<Diagnostic>,
    pub bind_diagnostics: Vec<Diagnostic>,
    pub check_diagnostics: Vec<Diagnostic>,
    /// File root symbol, set while the file is bound.
    pub symbol: Option<SymbolId>,
}

impl SourceFile {
    /// Top-level declarations in source order.
    pub fn statements(&self) -> &[NodeIndex] {
        self.arena
            .get_source_file_at(self.root)
            .map_or(&[], |data| data.statements.nodes.as_slice())
    }

    /// Source text covered by a node.
    pub fn node_text(&self, index: NodeIndex) -> &str {
        self.arena
            .get(index)
            .and_then(|node| self.text.get(node.pos as usize..node.end as usize))
            .unwrap_or("")
    }

    /// Zero-based line and byte column of a node's start.
    pub fn node_position(&self, index: NodeIndex) -> Position {
        self.arena.get_extended(index).map_or_else(
            || Position::new(0, 0),
            |info| Position::new(info.line, info.character),
        )
    }

    /// Build a diagnostic covering `index`, with line and column filled.
    pub fn diagnostic_at(
        &self,
        index: NodeIndex,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Diagnostic {
        let (start, length) = self
            .arena
            .get(index)
            .map_or((0, 0), |node| (node.pos, node.end.saturating_sub(node.pos)));
        Diagnostic::from_message(self.file_name.clone(), start, length, message, args)
            .with_line_map(&self.line_map)
    }

    /// Parse, bind and check diagnostics, in that order.
    pub fn all_diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.parse_diagnostics
            .iter()
            .chain(&self.bind_diagnostics)
            .chain(&self.check_diagnostics)
    }
}

/// Parse `text` into a `SourceFile`. Always succeeds; syntax problems end up
/// in `parse_diagnostics`.
#[tracing::instrument(level = "debug", skip(text), fields(len = text.len()))]
pub fn parse_file(file_name: &str, text: &str) -> SourceFile {
    let mut parser = ParserState::new(file_name.to_string(), text.to_string());
    let root = parser.parse_source_file();

    let line_map = parser.scanner.line_map();
    let parse_diagnostics = parser
        .parse_diagnostics
        .iter()
        .map(|d| {
            Diagnostic::error(
                file_name.to_string(),
                d.start,
                d.length,
                d.message.clone(),
                d.code,
            )
            .with_category(d.category)
            .with_line_map(&line_map)
        })
        .collect();

    SourceFile {
        file_name: file_name.to_string(),
        text: parser.scanner.source_text_arc(),
        arena: parser.arena,
        root,
        line_map,
        parse_diagnostics,
        bind_diagnostics: Vec::new(),
        check_diagnostics: Vec::new(),
        symbol: None,
    }
}
