//! Thin node architecture.
//!
//! Each `Node` is a 16-byte header (kind, flags, range, data index). The
//! `data_index` points into the typed pool selected by `kind`. Per-node data
//! that every kind shares but is rarely read (parent, line/column, symbol
//! link, consumed tokens) lives in the parallel `extended_info` vector.

use super::base::{NodeIndex, NodeList, SyntaxToken};
use gx_common::SymbolId;
use serde::Serialize;

/// A thin 16-byte node header.
#[repr(C)]
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Node {
    /// `SyntaxKind` value or a `syntax_kind_ext` constant
    pub kind: u16,
    /// Packed `node_flags`
    pub flags: u16,
    /// Start position in source (byte offset)
    pub pos: u32,
    /// End position in source (byte offset, exclusive)
    pub end: u32,
    /// Index into the type-specific storage pool (`u32::MAX` = no data)
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: u16, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn with_data(kind: u16, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    #[inline]
    pub fn has_flag(&self, flag: u16) -> bool {
        self.flags & flag != 0
    }
}

/// Per-node data kept outside the 16-byte header.
#[derive(Clone, Debug, Serialize)]
pub struct ExtendedNodeInfo {
    /// Filled by the parent fixup walk after parsing.
    pub parent: NodeIndex,
    pub line: u32,
    pub character: u32,
    /// Set by the binder on declaration nodes.
    pub symbol: Option<SymbolId>,
    pub syntax_tokens: Vec<SyntaxToken>,
}

impl Default for ExtendedNodeInfo {
    fn default() -> Self {
        ExtendedNodeInfo {
            parent: NodeIndex::NONE,
            line: 0,
            character: 0,
            symbol: None,
            syntax_tokens: Vec::new(),
        }
    }
}

// =============================================================================
// Typed Data Pools
// =============================================================================

/// Data for identifier nodes
#[derive(Clone, Debug, Serialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Data for string and numeric literals
#[derive(Clone, Debug, Serialize)]
pub struct LiteralData {
    /// Cooked value: unescaped string contents or normalized number text
    pub text: String,
    /// Numeric literal written with a decimal point or exponent
    pub is_fixed: bool,
    pub is_unterminated: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct SourceFileData {
    pub statements: NodeList,
    pub end_of_file_token: NodeIndex,
    pub file_name: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct IncludeData {
    pub path: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct StructData {
    pub name: NodeIndex,
    pub members: NodeList,
}

/// Data for struct members, parameters and typedefs (a type plus a name)
#[derive(Clone, Debug, Serialize)]
pub struct NamedTypeData {
    pub type_node: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct FunctionData {
    pub modifiers: Option<NodeList>,
    pub type_node: NodeIndex,
    pub name: NodeIndex,
    pub parameters: NodeList,
    /// `NONE` for a prototype (`void f();`)
    pub body: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct VariableData {
    pub modifiers: Option<NodeList>,
    pub type_node: NodeIndex,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct BlockData {
    pub statements: NodeList,
}

#[derive(Clone, Debug, Serialize)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// Data for while/do/for loops. `while` and `do` only use `condition` and
/// `statement`.
#[derive(Clone, Debug, Serialize)]
pub struct LoopData {
    pub initializer: NodeIndex,
    pub condition: NodeIndex,
    pub incrementor: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

/// Plain type: a type keyword token or an identifier.
#[derive(Clone, Debug, Serialize)]
pub struct TypeRefData {
    pub type_name: NodeIndex,
}

/// Generic type: `funcref<f>`, `structref<S>`, `arrayref<int[2]>`.
#[derive(Clone, Debug, Serialize)]
pub struct MappedTypeData {
    pub type_name: NodeIndex,
    pub type_arguments: NodeList,
}

#[derive(Clone, Debug, Serialize)]
pub struct ArrayTypeData {
    pub element_type: NodeIndex,
    pub size: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct ParenthesizedData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: u16, // SyntaxKind
    pub right: NodeIndex,
}

/// Data for prefix and postfix unary expressions
#[derive(Clone, Debug, Serialize)]
pub struct UnaryExprData {
    pub operator: u16, // SyntaxKind
    pub operand: NodeIndex,
}

#[derive(Clone, Debug, Serialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub arguments: NodeList,
}

/// Data for property access (`name_or_argument` is an identifier) and
/// element access (`name_or_argument` is the index expression)
#[derive(Clone, Debug, Serialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
}

// =============================================================================
// Arena
// =============================================================================

macro_rules! define_node_arena {
    ($($field:ident: $ty:ty),+ $(,)?) => {
        /// Arena-based storage for AST nodes. Nodes are stored contiguously
        /// and referenced by `NodeIndex`.
        #[derive(Clone, Debug, Default, Serialize)]
        pub struct NodeArena {
            pub nodes: Vec<Node>,
            pub extended_info: Vec<ExtendedNodeInfo>,
            $(pub $field: Vec<$ty>,)+
        }

        /// Lengths of every arena vector, for speculative rollback.
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct ArenaCheckpoint {
            nodes: usize,
            $($field: usize,)+
        }

        impl NodeArena {
            pub fn checkpoint(&self) -> ArenaCheckpoint {
                ArenaCheckpoint {
                    nodes: self.nodes.len(),
                    $($field: self.$field.len(),)+
                }
            }

            /// Drop everything added since `checkpoint`.
            pub fn rollback(&mut self, checkpoint: &ArenaCheckpoint) {
                self.nodes.truncate(checkpoint.nodes);
                self.extended_info.truncate(checkpoint.nodes);
                $(self.$field.truncate(checkpoint.$field);)+
            }

            pub fn clear(&mut self) {
                self.nodes.clear();
                self.extended_info.clear();
                $(self.$field.clear();)+
            }
        }
    };
}

define_node_arena! {
    identifiers: IdentifierData,
    literals: LiteralData,
    source_files: SourceFileData,
    includes: IncludeData,
    structs: StructData,
    named_types: NamedTypeData,
    functions: FunctionData,
    variables: VariableData,
    blocks: BlockData,
    if_statements: IfStatementData,
    loops: LoopData,
    return_data: ReturnData,
    expr_statements: ExprStatementData,
    type_refs: TypeRefData,
    mapped_types: MappedTypeData,
    array_types: ArrayTypeData,
    parenthesized: ParenthesizedData,
    binary_exprs: BinaryExprData,
    unary_exprs: UnaryExprData,
    call_exprs: CallExprData,
    access_exprs: AccessExprData,
}
