//! AST node kinds.
//!
//! Leaf nodes reuse the scanner's `SyntaxKind` values (`Identifier`,
//! literals, `true`/`false`/`null`, modifier keywords). Composite nodes use
//! the constants below, which start above every token kind.

pub const SOURCE_FILE: u16 = 200;

// Declarations
pub const INCLUDE_STATEMENT: u16 = 201;
pub const STRUCT_DECLARATION: u16 = 202;
pub const PROPERTY_DECLARATION: u16 = 203;
pub const FUNCTION_DECLARATION: u16 = 204;
pub const PARAMETER_DECLARATION: u16 = 205;
pub const VARIABLE_DECLARATION: u16 = 206;
pub const TYPEDEF_DECLARATION: u16 = 207;

// Statements
pub const BLOCK: u16 = 220;
pub const IF_STATEMENT: u16 = 221;
pub const WHILE_STATEMENT: u16 = 222;
pub const DO_STATEMENT: u16 = 223;
pub const FOR_STATEMENT: u16 = 224;
pub const RETURN_STATEMENT: u16 = 225;
pub const BREAK_STATEMENT: u16 = 226;
pub const CONTINUE_STATEMENT: u16 = 227;
pub const BREAKPOINT_STATEMENT: u16 = 228;
pub const EMPTY_STATEMENT: u16 = 229;
pub const EXPRESSION_STATEMENT: u16 = 230;

// Types
pub const TYPE_REFERENCE: u16 = 240;
pub const MAPPED_TYPE: u16 = 241;
pub const ARRAY_TYPE: u16 = 242;

// Expressions
pub const PARENTHESIZED_EXPRESSION: u16 = 260;
pub const BINARY_EXPRESSION: u16 = 261;
pub const PREFIX_UNARY_EXPRESSION: u16 = 262;
pub const POSTFIX_UNARY_EXPRESSION: u16 = 263;
pub const CALL_EXPRESSION: u16 = 264;
pub const PROPERTY_ACCESS_EXPRESSION: u16 = 265;
pub const ELEMENT_ACCESS_EXPRESSION: u16 = 266;

/// Human-readable kind name, for debugging and printer errors.
pub fn kind_name(kind: u16) -> String {
    let name = match kind {
        SOURCE_FILE => "SourceFile",
        INCLUDE_STATEMENT => "IncludeStatement",
        STRUCT_DECLARATION => "StructDeclaration",
        PROPERTY_DECLARATION => "PropertyDeclaration",
        FUNCTION_DECLARATION => "FunctionDeclaration",
        PARAMETER_DECLARATION => "ParameterDeclaration",
        VARIABLE_DECLARATION => "VariableDeclaration",
        TYPEDEF_DECLARATION => "TypedefDeclaration",
        BLOCK => "Block",
        IF_STATEMENT => "IfStatement",
        WHILE_STATEMENT => "WhileStatement",
        DO_STATEMENT => "DoStatement",
        FOR_STATEMENT => "ForStatement",
        RETURN_STATEMENT => "ReturnStatement",
        BREAK_STATEMENT => "BreakStatement",
        CONTINUE_STATEMENT => "ContinueStatement",
        BREAKPOINT_STATEMENT => "BreakpointStatement",
        EMPTY_STATEMENT => "EmptyStatement",
        EXPRESSION_STATEMENT => "ExpressionStatement",
        TYPE_REFERENCE => "TypeReference",
        MAPPED_TYPE => "MappedType",
        ARRAY_TYPE => "ArrayType",
        PARENTHESIZED_EXPRESSION => "ParenthesizedExpression",
        BINARY_EXPRESSION => "BinaryExpression",
        PREFIX_UNARY_EXPRESSION => "PrefixUnaryExpression",
        POSTFIX_UNARY_EXPRESSION => "PostfixUnaryExpression",
        CALL_EXPRESSION => "CallExpression",
        PROPERTY_ACCESS_EXPRESSION => "PropertyAccessExpression",
        ELEMENT_ACCESS_EXPRESSION => "ElementAccessExpression",
        other => {
            return gx_scanner::SyntaxKind::try_from_u16(other)
                .map_or_else(|| format!("Kind({other})"), |kind| format!("{kind:?}"));
        }
    };
    name.to_string()
}
