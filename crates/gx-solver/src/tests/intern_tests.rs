use super::*;
use gx_common::SymbolId;
use gx_common::limits::MAX_ALIAS_RESOLUTION_DEPTH;
use gx_scanner::SyntaxKind;

#[test]
fn test_interner_intrinsics() {
    let interner = TypeInterner::new();

    assert_eq!(interner.lookup(TypeId::UNKNOWN), Some(&TypeData::Unknown));
    assert_eq!(
        interner.lookup(TypeId::INTEGER),
        Some(&TypeData::Intrinsic(IntrinsicKind::Integer))
    );
    assert_eq!(
        interner.lookup(TypeId::NULL),
        Some(&TypeData::Intrinsic(IntrinsicKind::Null))
    );
    assert_eq!(interner.len(), TypeId::FIRST_USER as usize);
    assert!(TypeId::VOID.is_intrinsic());
}

#[test]
fn test_interner_deduplication() {
    let mut interner = TypeInterner::new();

    let a = interner.literal(IntrinsicKind::Integer, "1");
    let b = interner.literal(IntrinsicKind::Integer, "1");
    let c = interner.literal(IntrinsicKind::Integer, "2");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(!a.is_intrinsic());

    let unit = interner.complex(SyntaxKind::UnitKeyword);
    let units = interner.array(unit);
    assert_eq!(interner.array(unit), units);
    assert_eq!(interner.intern(TypeData::Intrinsic(IntrinsicKind::Bool)), TypeId::BOOL);
}

#[test]
fn test_struct_types_keyed_by_symbol() {
    let mut interner = TypeInterner::new();
    let s1 = interner.struct_type(SymbolId(1), "S");
    let s2 = interner.struct_type(SymbolId(2), "S");
    assert_ne!(s1, s2);
    assert_eq!(interner.struct_symbol(s1), Some(SymbolId(1)));
    assert_eq!(interner.struct_symbol(TypeId::INTEGER), None);
}

#[test]
fn test_widen_and_typedef_resolution() {
    let mut interner = TypeInterner::new();
    let literal = interner.literal(IntrinsicKind::Fixed, "1.5");
    assert_eq!(interner.widen(literal), TypeId::FIXED);
    assert_eq!(interner.widen(TypeId::STRING), TypeId::STRING);

    let inner = interner.typedef("Inner", TypeId::INTEGER);
    let outer = interner.typedef("Outer", inner);
    assert_eq!(interner.resolve_typedef(outer), TypeId::INTEGER);
    assert_eq!(interner.intrinsic_kind(outer), Some(IntrinsicKind::Integer));
}

#[test]
fn test_signature_lookup() {
    let mut interner = TypeInterner::new();
    let signature = SignatureMeta::new(TypeId::VOID, [TypeId::INTEGER, TypeId::FIXED]);
    let f = interner.function(SymbolId(4), "f", signature.clone());
    assert_eq!(interner.signature(f), Some(&signature));
    assert_eq!(interner.signature(f).map(SignatureMeta::arity), Some(2));
    assert_eq!(interner.signature(TypeId::STRING), None);
}

#[test]
fn test_intrinsic_from_keyword() {
    assert_eq!(
        IntrinsicKind::from_keyword(SyntaxKind::ByteKeyword),
        Some(IntrinsicKind::Integer)
    );
    assert_eq!(
        IntrinsicKind::from_keyword(SyntaxKind::CharKeyword),
        Some(IntrinsicKind::String)
    );
    assert_eq!(IntrinsicKind::from_keyword(SyntaxKind::UnitKeyword), None);
    assert_eq!(
        ReferenceKind::from_keyword(SyntaxKind::StructrefKeyword),
        Some(ReferenceKind::Structref)
    );
}

#[test]
fn test_format_type() {
    let mut interner = TypeInterner::new();
    let point = interner.complex(SyntaxKind::PointKeyword);
    let points = interner.array(point);
    let s = interner.struct_type(SymbolId(0), "Pair");
    let sref = interner.reference(ReferenceKind::Structref, s);
    let f = interner.function(
        SymbolId(1),
        "Add",
        SignatureMeta::new(TypeId::INTEGER, [TypeId::INTEGER, TypeId::INTEGER]),
    );
    let literal = interner.literal(IntrinsicKind::String, "hi");
    let alias = interner.typedef("Alias", TypeId::FIXED);

    assert_eq!(format_type(&interner, TypeId::UNKNOWN), "unknown");
    assert_eq!(format_type(&interner, TypeId::INTEGER), "int");
    assert_eq!(format_type(&interner, points), "point[]");
    assert_eq!(format_type(&interner, sref), "structref<Pair>");
    assert_eq!(format_type(&interner, f), "int Add(int, int)");
    assert_eq!(format_type(&interner, literal), "string");
    assert_eq!(format_type(&interner, alias), "Alias");
    assert_eq!(format_type(&interner, TypeId(999)), "<invalid type 999>");
}

#[test]
fn test_resolve_typedef_chain() {
    let mut interner = TypeInterner::new();
    let mut id = TypeId::INTEGER;
    for i in 0..3 {
        id = interner.typedef(format!("T{i}"), id);
    }
    assert_eq!(interner.resolve_typedef(id), TypeId::INTEGER);
    assert_eq!(interner.intrinsic_kind(id), Some(IntrinsicKind::Integer));
}

#[test]
fn test_resolve_typedef_stops_at_depth_limit() {
    let mut interner = TypeInterner::new();
    let mut id = TypeId::INTEGER;
    for i in 0..MAX_ALIAS_RESOLUTION_DEPTH + 10 {
        id = interner.typedef(format!("T{i}"), id);
    }
    let resolved = interner.resolve_typedef(id);
    assert_ne!(resolved, TypeId::INTEGER);
    assert!(matches!(interner.lookup(resolved), Some(TypeData::Typedef(_))));
}
