//! Galaxy type algebra.
//!
//! - **`TypeData`**: the closed set of Galaxy types (intrinsics, literals,
//!   structs, functions, arrays, native handles, references, typedefs)
//! - **`TypeInterner`**: structural deduplication into `TypeId` handles, with
//!   the intrinsics pre-allocated at fixed ids
//! - **Relations**: assignability, comparability, boolean context and
//!   operator validity, one rule per function
//! - **`TypeFormatter`**: type names for diagnostics
//!
//! The checker owns one interner per check and never mutates types after
//! interning, so `TypeId` equality is type equality.

mod format;
mod intern;
pub mod relations;
pub mod types;

pub use format::{TypeFormatter, format_type};
pub use intern::TypeInterner;
pub use relations::{
    binary_operation_type, is_assignable_to, is_bool_expression, is_comparable_to,
    is_valid_binary_operation, is_valid_postfix_operation, is_valid_prefix_operation,
    prefix_operation_type,
};
pub use types::{
    FunctionType, IntrinsicKind, LiteralType, ReferenceKind, SignatureMeta, StructType, TypeData,
    TypeId, TypedefType,
};

#[cfg(test)]
#[path = "tests/intern_tests.rs"]
mod intern_tests;

#[cfg(test)]
#[path = "tests/relations_tests.rs"]
mod relations_tests;
