//! Base index types for the AST.

use gx_scanner::SyntaxKind;
use serde::Serialize;

/// Index of a node in its `NodeArena`. The arena index is the node id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

/// Ordered child list with its own source range.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
    pub pos: u32,
    pub end: u32,
    pub has_trailing_comma: bool,
}

impl NodeList {
    pub fn new() -> NodeList {
        NodeList::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A consumed token retained on the node that consumed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SyntaxToken {
    pub kind: SyntaxKind,
    pub pos: u32,
    pub end: u32,
}

/// Position data for a node about to be added to the arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeSpan {
    pub pos: u32,
    pub end: u32,
    pub line: u32,
    pub character: u32,
    pub syntax_tokens: Vec<SyntaxToken>,
}

impl NodeSpan {
    /// Span without line info or tokens, for nodes built outside the parser.
    pub fn new(pos: u32, end: u32) -> NodeSpan {
        NodeSpan {
            pos,
            end,
            ..NodeSpan::default()
        }
    }
}
