//! Type representation.
//!
//! Types are immutable values interned into a `TypeInterner`; a `TypeId` is
//! the handle the rest of the compiler passes around, so type equality is an
//! integer comparison.

use gx_common::SymbolId;
use gx_scanner::SyntaxKind;
use smallvec::SmallVec;

/// Interned type handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Error-suppression sentinel: assignable and comparable both ways.
    pub const UNKNOWN: TypeId = TypeId(0);
    pub const STRING: TypeId = TypeId(1);
    pub const INTEGER: TypeId = TypeId(2);
    pub const FIXED: TypeId = TypeId(3);
    pub const BOOL: TypeId = TypeId(4);
    pub const VOID: TypeId = TypeId(5);
    pub const NULL: TypeId = TypeId(6);

    /// First id handed out for non-intrinsic types.
    pub const FIRST_USER: u32 = 7;

    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }

    #[inline]
    pub const fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    String,
    Integer,
    Fixed,
    Bool,
    Void,
    Null,
}

impl IntrinsicKind {
    /// Pre-allocated singleton for this kind.
    pub const fn type_id(self) -> TypeId {
        match self {
            IntrinsicKind::String => TypeId::STRING,
            IntrinsicKind::Integer => TypeId::INTEGER,
            IntrinsicKind::Fixed => TypeId::FIXED,
            IntrinsicKind::Bool => TypeId::BOOL,
            IntrinsicKind::Void => TypeId::VOID,
            IntrinsicKind::Null => TypeId::NULL,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            IntrinsicKind::String => "string",
            IntrinsicKind::Integer => "int",
            IntrinsicKind::Fixed => "fixed",
            IntrinsicKind::Bool => "bool",
            IntrinsicKind::Void => "void",
            IntrinsicKind::Null => "null",
        }
    }

    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, IntrinsicKind::Integer | IntrinsicKind::Fixed)
    }

    /// Intrinsic named by a primitive type keyword. `byte` is an integer and
    /// `char` is a string.
    pub fn from_keyword(kind: SyntaxKind) -> Option<IntrinsicKind> {
        Some(match kind {
            SyntaxKind::StringKeyword | SyntaxKind::CharKeyword => IntrinsicKind::String,
            SyntaxKind::IntKeyword | SyntaxKind::ByteKeyword => IntrinsicKind::Integer,
            SyntaxKind::FixedKeyword => IntrinsicKind::Fixed,
            SyntaxKind::BoolKeyword => IntrinsicKind::Bool,
            SyntaxKind::VoidKeyword => IntrinsicKind::Void,
            _ => return None,
        })
    }
}

/// A literal value. `kind` is the intrinsic it widens to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LiteralType {
    pub kind: IntrinsicKind,
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Funcref,
    Structref,
    Arrayref,
}

impl ReferenceKind {
    pub fn from_keyword(kind: SyntaxKind) -> Option<ReferenceKind> {
        Some(match kind {
            SyntaxKind::FuncrefKeyword => ReferenceKind::Funcref,
            SyntaxKind::StructrefKeyword => ReferenceKind::Structref,
            SyntaxKind::ArrayrefKeyword => ReferenceKind::Arrayref,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            ReferenceKind::Funcref => "funcref",
            ReferenceKind::Structref => "structref",
            ReferenceKind::Arrayref => "arrayref",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructType {
    pub symbol: SymbolId,
    pub name: String,
}

/// Return type and parameter types of a function.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignatureMeta {
    pub return_type: TypeId,
    pub parameter_types: SmallVec<[TypeId; 4]>,
}

impl SignatureMeta {
    pub fn new(return_type: TypeId, parameter_types: impl IntoIterator<Item = TypeId>) -> Self {
        SignatureMeta {
            return_type,
            parameter_types: parameter_types.into_iter().collect(),
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub symbol: SymbolId,
    pub name: String,
    pub signature: SignatureMeta,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypedefType {
    pub name: String,
    pub referenced: TypeId,
}

/// The closed set of Galaxy types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Unknown,
    Intrinsic(IntrinsicKind),
    Literal(LiteralType),
    Struct(StructType),
    Function(FunctionType),
    Array(TypeId),
    /// Native handle type (`unit`, `point`, `text`, ...), keyed by its keyword.
    Complex(SyntaxKind),
    Reference(ReferenceKind, TypeId),
    Typedef(TypedefType),
}
