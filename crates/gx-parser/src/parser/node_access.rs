//! NodeArena access methods.

use super::base::{NodeIndex, NodeList, SyntaxToken};
use super::node::*;
use super::syntax_kind_ext::*;
use gx_common::SymbolId;
use gx_scanner::SyntaxKind;

impl NodeArena {
    /// Get a thin node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a mutable thin node by index
    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_extended_mut(&mut self, index: NodeIndex) -> Option<&mut ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get_mut(index.0 as usize)
        }
    }

    pub fn kind(&self, index: NodeIndex) -> Option<u16> {
        self.get(index).map(|n| n.kind)
    }

    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    pub fn symbol(&self, index: NodeIndex) -> Option<SymbolId> {
        self.get_extended(index).and_then(|info| info.symbol)
    }

    pub fn set_symbol(&mut self, index: NodeIndex, symbol: Option<SymbolId>) {
        if let Some(info) = self.get_extended_mut(index) {
            info.symbol = symbol;
        }
    }

    pub fn syntax_tokens(&self, index: NodeIndex) -> &[SyntaxToken] {
        self.get_extended(index)
            .map_or(&[], |info| info.syntax_tokens.as_slice())
    }

    /// Zero-width node synthesized by error recovery.
    pub fn is_missing(&self, index: NodeIndex) -> bool {
        self.get(index)
            .is_none_or(|n| n.has_flag(super::node_flags::MISSING))
    }

    /// Get identifier data for a node.
    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data() && node.kind == SyntaxKind::Identifier as u16 {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Text of an identifier node, by index.
    pub fn get_identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node).map(|d| d.escaped_text.as_str())
    }

    /// Get literal data for a string or numeric literal.
    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        if node.has_data()
            && (node.kind == SyntaxKind::StringLiteral as u16
                || node.kind == SyntaxKind::NumericLiteral as u16)
        {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_source_file(&self, node: &Node) -> Option<&SourceFileData> {
        if node.has_data() && node.kind == SOURCE_FILE {
            self.source_files.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_source_file_at(&self, index: NodeIndex) -> Option<&SourceFileData> {
        self.get_source_file(self.get(index)?)
    }

    #[inline]
    pub fn get_include(&self, node: &Node) -> Option<&IncludeData> {
        if node.has_data() && node.kind == INCLUDE_STATEMENT {
            self.includes.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_struct(&self, node: &Node) -> Option<&StructData> {
        if node.has_data() && node.kind == STRUCT_DECLARATION {
            self.structs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Property, parameter or typedef declaration data.
    #[inline]
    pub fn get_named_type(&self, node: &Node) -> Option<&NamedTypeData> {
        if node.has_data()
            && matches!(
                node.kind,
                PROPERTY_DECLARATION | PARAMETER_DECLARATION | TYPEDEF_DECLARATION
            )
        {
            self.named_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_function(&self, node: &Node) -> Option<&FunctionData> {
        if node.has_data() && node.kind == FUNCTION_DECLARATION {
            self.functions.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable(&self, node: &Node) -> Option<&VariableData> {
        if node.has_data() && node.kind == VARIABLE_DECLARATION {
            self.variables.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_block(&self, node: &Node) -> Option<&BlockData> {
        if node.has_data() && node.kind == BLOCK {
            self.blocks.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_if_statement(&self, node: &Node) -> Option<&IfStatementData> {
        if node.has_data() && node.kind == IF_STATEMENT {
            self.if_statements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_loop(&self, node: &Node) -> Option<&LoopData> {
        if node.has_data() && matches!(node.kind, WHILE_STATEMENT | DO_STATEMENT | FOR_STATEMENT) {
            self.loops.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_return_statement(&self, node: &Node) -> Option<&ReturnData> {
        if node.has_data() && node.kind == RETURN_STATEMENT {
            self.return_data.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_expression_statement(&self, node: &Node) -> Option<&ExprStatementData> {
        if node.has_data() && node.kind == EXPRESSION_STATEMENT {
            self.expr_statements.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_type_ref(&self, node: &Node) -> Option<&TypeRefData> {
        if node.has_data() && node.kind == TYPE_REFERENCE {
            self.type_refs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mapped_type(&self, node: &Node) -> Option<&MappedTypeData> {
        if node.has_data() && node.kind == MAPPED_TYPE {
            self.mapped_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_array_type(&self, node: &Node) -> Option<&ArrayTypeData> {
        if node.has_data() && node.kind == ARRAY_TYPE {
            self.array_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_parenthesized(&self, node: &Node) -> Option<&ParenthesizedData> {
        if node.has_data() && node.kind == PARENTHESIZED_EXPRESSION {
            self.parenthesized.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_binary_expr(&self, node: &Node) -> Option<&BinaryExprData> {
        if node.has_data() && node.kind == BINARY_EXPRESSION {
            self.binary_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_unary_expr(&self, node: &Node) -> Option<&UnaryExprData> {
        if node.has_data()
            && (node.kind == PREFIX_UNARY_EXPRESSION || node.kind == POSTFIX_UNARY_EXPRESSION)
        {
            self.unary_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_call_expr(&self, node: &Node) -> Option<&CallExprData> {
        if node.has_data() && node.kind == CALL_EXPRESSION {
            self.call_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_access_expr(&self, node: &Node) -> Option<&AccessExprData> {
        if node.has_data()
            && (node.kind == PROPERTY_ACCESS_EXPRESSION || node.kind == ELEMENT_ACCESS_EXPRESSION)
        {
            self.access_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Name node of a declaration (struct, property, function, parameter,
    /// variable, typedef).
    pub fn get_declaration_name(&self, index: NodeIndex) -> NodeIndex {
        let Some(node) = self.get(index) else {
            return NodeIndex::NONE;
        };
        if let Some(data) = self.get_struct(node) {
            data.name
        } else if let Some(data) = self.get_named_type(node) {
            data.name
        } else if let Some(data) = self.get_function(node) {
            data.name
        } else if let Some(data) = self.get_variable(node) {
            data.name
        } else {
            NodeIndex::NONE
        }
    }

    /// Declared type node of a property, parameter, typedef, function
    /// (return type) or variable.
    pub fn get_declared_type(&self, index: NodeIndex) -> NodeIndex {
        let Some(node) = self.get(index) else {
            return NodeIndex::NONE;
        };
        if let Some(data) = self.get_named_type(node) {
            data.type_node
        } else if let Some(data) = self.get_function(node) {
            data.type_node
        } else if let Some(data) = self.get_variable(node) {
            data.type_node
        } else {
            NodeIndex::NONE
        }
    }

    /// Children in source order.
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let Some(node) = self.get(index) else {
            return Vec::new();
        };
        let mut children = Vec::new();
        let add = |children: &mut Vec<NodeIndex>, idx: NodeIndex| {
            if idx.is_some() {
                children.push(idx);
            }
        };
        let add_list = |children: &mut Vec<NodeIndex>, list: &NodeList| {
            children.extend(list.nodes.iter().copied());
        };

        match node.kind {
            SOURCE_FILE => {
                if let Some(data) = self.get_source_file(node) {
                    add_list(&mut children, &data.statements);
                    add(&mut children, data.end_of_file_token);
                }
            }
            INCLUDE_STATEMENT => {
                if let Some(data) = self.get_include(node) {
                    add(&mut children, data.path);
                }
            }
            STRUCT_DECLARATION => {
                if let Some(data) = self.get_struct(node) {
                    add(&mut children, data.name);
                    add_list(&mut children, &data.members);
                }
            }
            PROPERTY_DECLARATION | PARAMETER_DECLARATION | TYPEDEF_DECLARATION => {
                if let Some(data) = self.get_named_type(node) {
                    add(&mut children, data.type_node);
                    add(&mut children, data.name);
                }
            }
            FUNCTION_DECLARATION => {
                if let Some(data) = self.get_function(node) {
                    if let Some(modifiers) = &data.modifiers {
                        add_list(&mut children, modifiers);
                    }
                    add(&mut children, data.type_node);
                    add(&mut children, data.name);
                    add_list(&mut children, &data.parameters);
                    add(&mut children, data.body);
                }
            }
            VARIABLE_DECLARATION => {
                if let Some(data) = self.get_variable(node) {
                    if let Some(modifiers) = &data.modifiers {
                        add_list(&mut children, modifiers);
                    }
                    add(&mut children, data.type_node);
                    add(&mut children, data.name);
                    add(&mut children, data.initializer);
                }
            }
            BLOCK => {
                if let Some(data) = self.get_block(node) {
                    add_list(&mut children, &data.statements);
                }
            }
            IF_STATEMENT => {
                if let Some(data) = self.get_if_statement(node) {
                    add(&mut children, data.expression);
                    add(&mut children, data.then_statement);
                    add(&mut children, data.else_statement);
                }
            }
            DO_STATEMENT => {
                if let Some(data) = self.get_loop(node) {
                    add(&mut children, data.statement);
                    add(&mut children, data.condition);
                }
            }
            WHILE_STATEMENT | FOR_STATEMENT => {
                if let Some(data) = self.get_loop(node) {
                    add(&mut children, data.initializer);
                    add(&mut children, data.condition);
                    add(&mut children, data.incrementor);
                    add(&mut children, data.statement);
                }
            }
            RETURN_STATEMENT => {
                if let Some(data) = self.get_return_statement(node) {
                    add(&mut children, data.expression);
                }
            }
            EXPRESSION_STATEMENT => {
                if let Some(data) = self.get_expression_statement(node) {
                    add(&mut children, data.expression);
                }
            }
            TYPE_REFERENCE => {
                if let Some(data) = self.get_type_ref(node) {
                    add(&mut children, data.type_name);
                }
            }
            MAPPED_TYPE => {
                if let Some(data) = self.get_mapped_type(node) {
                    add(&mut children, data.type_name);
                    add_list(&mut children, &data.type_arguments);
                }
            }
            ARRAY_TYPE => {
                if let Some(data) = self.get_array_type(node) {
                    add(&mut children, data.element_type);
                    add(&mut children, data.size);
                }
            }
            PARENTHESIZED_EXPRESSION => {
                if let Some(data) = self.get_parenthesized(node) {
                    add(&mut children, data.expression);
                }
            }
            BINARY_EXPRESSION => {
                if let Some(data) = self.get_binary_expr(node) {
                    add(&mut children, data.left);
                    add(&mut children, data.right);
                }
            }
            PREFIX_UNARY_EXPRESSION | POSTFIX_UNARY_EXPRESSION => {
                if let Some(data) = self.get_unary_expr(node) {
                    add(&mut children, data.operand);
                }
            }
            CALL_EXPRESSION => {
                if let Some(data) = self.get_call_expr(node) {
                    add(&mut children, data.expression);
                    add_list(&mut children, &data.arguments);
                }
            }
            PROPERTY_ACCESS_EXPRESSION | ELEMENT_ACCESS_EXPRESSION => {
                if let Some(data) = self.get_access_expr(node) {
                    add(&mut children, data.expression);
                    add(&mut children, data.name_or_argument);
                }
            }
            _ => {}
        }
        children
    }
}
