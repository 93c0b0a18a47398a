//! Centralized limits and thresholds for the gx compiler.
//!
//! The parser's recursion limit bounds how deeply the AST can nest, which in
//! turn bounds the binder and checker walks over it. Expression checking and
//! typedef unwrapping carry their own limits.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum depth for parser recursion.
///
/// The parser tracks its recursion depth and emits a
/// `MAXIMUM_NESTING_DEPTH_EXCEEDED` diagnostic when this limit is exceeded.
///
/// ```galaxy
/// int x = ((((((((((((((((((((((((((((((1))))))))))))))))))))))))))))));
/// ```
pub const MAX_PARSER_RECURSION_DEPTH: u32 = 500;

/// Maximum depth for expression type checking. The checker returns
/// `TypeId::UNKNOWN` past this depth.
pub const MAX_EXPR_CHECK_DEPTH: u32 = 500;

/// Maximum number of `Typedef` hops followed when unwrapping an alias.
pub const MAX_ALIAS_RESOLUTION_DEPTH: u32 = 64;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Average source bytes per AST node, used to pre-size the node arena.
pub const SOURCE_BYTES_PER_NODE_ESTIMATE: usize = 8;
