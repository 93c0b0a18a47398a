//! NodeArena creation methods (add_* methods).

use super::base::{NodeIndex, NodeSpan};
use super::node::*;
use super::syntax_kind_ext;
use gx_common::limits::SOURCE_BYTES_PER_NODE_ESTIMATE;
use gx_scanner::SyntaxKind;

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow in huge files.
    const MAX_NODE_PREALLOC: usize = 5_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena sized for a source text of `text_len` bytes.
    pub fn for_source_len(text_len: usize) -> NodeArena {
        let capacity = (text_len / SOURCE_BYTES_PER_NODE_ESTIMATE + 16).min(Self::MAX_NODE_PREALLOC);
        let mut arena = NodeArena::default();
        arena.nodes = Vec::with_capacity(capacity);
        arena.extended_info = Vec::with_capacity(capacity);
        arena.identifiers = Vec::with_capacity(capacity / 4); // ~25% identifiers
        arena.literals = Vec::with_capacity(capacity / 8);
        arena.binary_exprs = Vec::with_capacity(capacity / 8);
        arena
    }

    /// Get the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push_node(&mut self, kind: u16, span: NodeSpan, data_index: u32) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes
            .push(Node::with_data(kind, span.pos, span.end, data_index));
        self.extended_info.push(ExtendedNodeInfo {
            line: span.line,
            character: span.character,
            syntax_tokens: span.syntax_tokens,
            ..ExtendedNodeInfo::default()
        });
        NodeIndex(index)
    }

    /// Set `node_flags` bits on an existing node.
    pub fn add_flags(&mut self, index: NodeIndex, flags: u16) {
        if let Some(node) = self.get_mut(index) {
            node.flags |= flags;
        }
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add a node with no data (keywords, modifiers, jump statements).
    pub fn add_token(&mut self, kind: u16, span: NodeSpan) -> NodeIndex {
        self.push_node(kind, span, Node::NO_DATA)
    }

    pub fn add_identifier(&mut self, span: NodeSpan, data: IdentifierData) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(data);
        self.push_node(SyntaxKind::Identifier as u16, span, data_index)
    }

    pub fn add_literal(&mut self, kind: u16, span: NodeSpan, data: LiteralData) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(kind, span, data_index)
    }

    pub fn add_source_file(&mut self, span: NodeSpan, data: SourceFileData) -> NodeIndex {
        let data_index = self.source_files.len() as u32;
        self.source_files.push(data);
        self.push_node(syntax_kind_ext::SOURCE_FILE, span, data_index)
    }

    pub fn add_include(&mut self, span: NodeSpan, data: IncludeData) -> NodeIndex {
        let data_index = self.includes.len() as u32;
        self.includes.push(data);
        self.push_node(syntax_kind_ext::INCLUDE_STATEMENT, span, data_index)
    }

    pub fn add_struct(&mut self, span: NodeSpan, data: StructData) -> NodeIndex {
        let data_index = self.structs.len() as u32;
        self.structs.push(data);
        self.push_node(syntax_kind_ext::STRUCT_DECLARATION, span, data_index)
    }

    /// Add a property, parameter or typedef declaration.
    pub fn add_named_type(&mut self, kind: u16, span: NodeSpan, data: NamedTypeData) -> NodeIndex {
        let data_index = self.named_types.len() as u32;
        self.named_types.push(data);
        self.push_node(kind, span, data_index)
    }

    pub fn add_function(&mut self, span: NodeSpan, data: FunctionData) -> NodeIndex {
        let data_index = self.functions.len() as u32;
        self.functions.push(data);
        self.push_node(syntax_kind_ext::FUNCTION_DECLARATION, span, data_index)
    }

    pub fn add_variable(&mut self, span: NodeSpan, data: VariableData) -> NodeIndex {
        let data_index = self.variables.len() as u32;
        self.variables.push(data);
        self.push_node(syntax_kind_ext::VARIABLE_DECLARATION, span, data_index)
    }

    pub fn add_block(&mut self, span: NodeSpan, data: BlockData) -> NodeIndex {
        let data_index = self.blocks.len() as u32;
        self.blocks.push(data);
        self.push_node(syntax_kind_ext::BLOCK, span, data_index)
    }

    pub fn add_if_statement(&mut self, span: NodeSpan, data: IfStatementData) -> NodeIndex {
        let data_index = self.if_statements.len() as u32;
        self.if_statements.push(data);
        self.push_node(syntax_kind_ext::IF_STATEMENT, span, data_index)
    }

    pub fn add_loop(&mut self, kind: u16, span: NodeSpan, data: LoopData) -> NodeIndex {
        let data_index = self.loops.len() as u32;
        self.loops.push(data);
        self.push_node(kind, span, data_index)
    }

    pub fn add_return(&mut self, span: NodeSpan, data: ReturnData) -> NodeIndex {
        let data_index = self.return_data.len() as u32;
        self.return_data.push(data);
        self.push_node(syntax_kind_ext::RETURN_STATEMENT, span, data_index)
    }

    pub fn add_expr_statement(&mut self, span: NodeSpan, data: ExprStatementData) -> NodeIndex {
        let data_index = self.expr_statements.len() as u32;
        self.expr_statements.push(data);
        self.push_node(syntax_kind_ext::EXPRESSION_STATEMENT, span, data_index)
    }

    pub fn add_type_ref(&mut self, span: NodeSpan, data: TypeRefData) -> NodeIndex {
        let data_index = self.type_refs.len() as u32;
        self.type_refs.push(data);
        self.push_node(syntax_kind_ext::TYPE_REFERENCE, span, data_index)
    }

    pub fn add_mapped_type(&mut self, span: NodeSpan, data: MappedTypeData) -> NodeIndex {
        let data_index = self.mapped_types.len() as u32;
        self.mapped_types.push(data);
        self.push_node(syntax_kind_ext::MAPPED_TYPE, span, data_index)
    }

    pub fn add_array_type(&mut self, span: NodeSpan, data: ArrayTypeData) -> NodeIndex {
        let data_index = self.array_types.len() as u32;
        self.array_types.push(data);
        self.push_node(syntax_kind_ext::ARRAY_TYPE, span, data_index)
    }

    pub fn add_parenthesized(&mut self, span: NodeSpan, data: ParenthesizedData) -> NodeIndex {
        let data_index = self.parenthesized.len() as u32;
        self.parenthesized.push(data);
        self.push_node(syntax_kind_ext::PARENTHESIZED_EXPRESSION, span, data_index)
    }

    pub fn add_binary_expr(&mut self, span: NodeSpan, data: BinaryExprData) -> NodeIndex {
        let data_index = self.binary_exprs.len() as u32;
        self.binary_exprs.push(data);
        self.push_node(syntax_kind_ext::BINARY_EXPRESSION, span, data_index)
    }

    /// Add a prefix or postfix unary expression.
    pub fn add_unary_expr(&mut self, kind: u16, span: NodeSpan, data: UnaryExprData) -> NodeIndex {
        let data_index = self.unary_exprs.len() as u32;
        self.unary_exprs.push(data);
        self.push_node(kind, span, data_index)
    }

    pub fn add_call_expr(&mut self, span: NodeSpan, data: CallExprData) -> NodeIndex {
        let data_index = self.call_exprs.len() as u32;
        self.call_exprs.push(data);
        self.push_node(syntax_kind_ext::CALL_EXPRESSION, span, data_index)
    }

    /// Add a property or element access expression.
    pub fn add_access_expr(&mut self, kind: u16, span: NodeSpan, data: AccessExprData) -> NodeIndex {
        let data_index = self.access_exprs.len() as u32;
        self.access_exprs.push(data);
        self.push_node(kind, span, data_index)
    }

    // ============================================================================
    // Parent Mapping
    // ============================================================================

    /// Fill `parent` for every node reachable from `root`.
    pub fn set_parents(&mut self, root: NodeIndex) {
        let mut stack = vec![root];
        while let Some(parent) = stack.pop() {
            for child in self.get_children(parent) {
                if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
                    info.parent = parent;
                }
                stack.push(child);
            }
        }
    }
}
