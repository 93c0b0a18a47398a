use gx_parser::parser::node::Node;
use gx_parser::{NodeArena, NodeIndex, NodeList, SourceFile, syntax_kind_ext};
use gx_scanner::{SyntaxKind, token_to_string};
use thiserror::Error;

mod declarations;
mod expressions;

/// Errors produced while printing a node.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrintError {
    /// The node kind has no printed form (statements, blocks, files).
    #[error("cannot print {kind} at offset {pos}")]
    UnsupportedKind { kind: String, pos: u32 },

    /// The index does not refer to a node of the arena.
    #[error("no node at {0:?}")]
    MissingNode(NodeIndex),
}

pub type Result<T> = std::result::Result<T, PrintError>;

/// Prints nodes of one arena.
pub struct Printer<'a> {
    arena: &'a NodeArena,
    output: String,
}

impl<'a> Printer<'a> {
    pub fn new(arena: &'a NodeArena) -> Self {
        Printer {
            arena,
            output: String::new(),
        }
    }

    pub fn for_source_file(source_file: &'a SourceFile) -> Self {
        Self::new(&source_file.arena)
    }

    /// Render `idx` and everything below it.
    pub fn print_node(&mut self, idx: NodeIndex) -> Result<String> {
        self.output.clear();
        self.emit(idx)?;
        Ok(std::mem::take(&mut self.output))
    }

    fn emit(&mut self, idx: NodeIndex) -> Result<()> {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return Err(PrintError::MissingNode(idx));
        };

        match node.kind {
            k if k == SyntaxKind::Identifier as u16 => {
                if let Some(identifier) = arena.get_identifier(node) {
                    self.write(&identifier.escaped_text);
                }
                Ok(())
            }
            k if k == SyntaxKind::NumericLiteral as u16 => {
                if let Some(literal) = arena.get_literal(node) {
                    self.write(&literal.text);
                }
                Ok(())
            }
            k if k == SyntaxKind::StringLiteral as u16 => {
                if let Some(literal) = arena.get_literal(node) {
                    self.write_string_literal(&literal.text);
                }
                Ok(())
            }

            syntax_kind_ext::TYPE_REFERENCE
            | syntax_kind_ext::MAPPED_TYPE
            | syntax_kind_ext::ARRAY_TYPE => self.emit_type(node),

            syntax_kind_ext::INCLUDE_STATEMENT
            | syntax_kind_ext::STRUCT_DECLARATION
            | syntax_kind_ext::PROPERTY_DECLARATION
            | syntax_kind_ext::FUNCTION_DECLARATION
            | syntax_kind_ext::PARAMETER_DECLARATION
            | syntax_kind_ext::VARIABLE_DECLARATION
            | syntax_kind_ext::TYPEDEF_DECLARATION => self.emit_declaration(node),

            syntax_kind_ext::PARENTHESIZED_EXPRESSION
            | syntax_kind_ext::BINARY_EXPRESSION
            | syntax_kind_ext::PREFIX_UNARY_EXPRESSION
            | syntax_kind_ext::POSTFIX_UNARY_EXPRESSION
            | syntax_kind_ext::CALL_EXPRESSION
            | syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION
            | syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION => self.emit_expression(node),

            kind => match SyntaxKind::try_from_u16(kind).and_then(token_to_string) {
                Some(text) => {
                    self.write(text);
                    Ok(())
                }
                None => Err(unsupported(node)),
            },
        }
    }

    fn emit_list(&mut self, list: &NodeList, separator: &str) -> Result<()> {
        for (i, &item) in list.nodes.iter().enumerate() {
            if i > 0 {
                self.write(separator);
            }
            self.emit(item)?;
        }
        Ok(())
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_string_literal(&mut self, value: &str) {
        self.output.push('"');
        for ch in value.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{8}' => self.output.push_str("\\b"),
                '\u{c}' => self.output.push_str("\\f"),
                '\u{b}' => self.output.push_str("\\v"),
                '\0' => self.output.push_str("\\0"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }
}

fn unsupported(node: &Node) -> PrintError {
    tracing::debug!(kind = node.kind, pos = node.pos, "unsupported print kind");
    PrintError::UnsupportedKind {
        kind: syntax_kind_ext::kind_name(node.kind),
        pos: node.pos,
    }
}
