use super::*;
use gx_common::SymbolId;
use gx_scanner::SyntaxKind;

#[test]
fn test_numeric_assignability() {
    let mut interner = TypeInterner::new();
    let one = interner.literal(IntrinsicKind::Integer, "1");
    let half = interner.literal(IntrinsicKind::Fixed, "0.5");

    assert!(is_assignable_to(&interner, TypeId::INTEGER, TypeId::FIXED));
    assert!(!is_assignable_to(&interner, TypeId::FIXED, TypeId::INTEGER));
    assert!(is_assignable_to(&interner, one, TypeId::INTEGER));
    assert!(is_assignable_to(&interner, one, TypeId::FIXED));
    assert!(!is_assignable_to(&interner, half, TypeId::INTEGER));
    assert!(!is_assignable_to(&interner, TypeId::STRING, TypeId::INTEGER));
    assert!(!is_assignable_to(&interner, TypeId::VOID, TypeId::INTEGER));
}

#[test]
fn test_null_assignability() {
    let mut interner = TypeInterner::new();
    let unit = interner.complex(SyntaxKind::UnitKeyword);
    let s = interner.struct_type(SymbolId(0), "S");
    let sref = interner.reference(ReferenceKind::Structref, s);

    assert!(is_assignable_to(&interner, TypeId::NULL, TypeId::STRING));
    assert!(is_assignable_to(&interner, TypeId::NULL, unit));
    assert!(is_assignable_to(&interner, TypeId::NULL, sref));
    assert!(!is_assignable_to(&interner, TypeId::NULL, TypeId::INTEGER));
    assert!(!is_assignable_to(&interner, TypeId::NULL, s));
}

#[test]
fn test_unknown_is_assignable_both_ways() {
    let mut interner = TypeInterner::new();
    let unit = interner.complex(SyntaxKind::UnitKeyword);
    for ty in [TypeId::INTEGER, TypeId::VOID, unit] {
        assert!(is_assignable_to(&interner, TypeId::UNKNOWN, ty));
        assert!(is_assignable_to(&interner, ty, TypeId::UNKNOWN));
        assert!(is_comparable_to(&interner, TypeId::UNKNOWN, ty));
    }
}

#[test]
fn test_struct_and_reference_assignability() {
    let mut interner = TypeInterner::new();
    let a = interner.struct_type(SymbolId(1), "A");
    let b = interner.struct_type(SymbolId(2), "B");
    let aref = interner.reference(ReferenceKind::Structref, a);
    let bref = interner.reference(ReferenceKind::Structref, b);

    assert!(!is_assignable_to(&interner, a, b));
    assert!(is_assignable_to(&interner, a, aref));
    assert!(!is_assignable_to(&interner, a, bref));
    assert!(is_assignable_to(&interner, aref, aref));
    assert!(!is_assignable_to(&interner, aref, bref));
    assert!(!is_assignable_to(&interner, aref, a));
}

#[test]
fn test_function_and_array_references() {
    let mut interner = TypeInterner::new();
    let sig = SignatureMeta::new(TypeId::VOID, [TypeId::INTEGER]);
    let f = interner.function(SymbolId(1), "f", sig.clone());
    let g = interner.function(SymbolId(2), "g", sig);
    let h = interner.function(SymbolId(3), "h", SignatureMeta::new(TypeId::BOOL, []));
    let fref = interner.reference(ReferenceKind::Funcref, f);

    assert!(is_assignable_to(&interner, g, fref));
    assert!(!is_assignable_to(&interner, h, fref));
    assert!(is_comparable_to(&interner, fref, g));

    let ints = interner.array(TypeId::INTEGER);
    let fixeds = interner.array(TypeId::FIXED);
    let iref = interner.reference(ReferenceKind::Arrayref, ints);
    assert!(is_assignable_to(&interner, ints, iref));
    assert!(!is_assignable_to(&interner, fixeds, iref));
}

#[test]
fn test_typedef_unwraps() {
    let mut interner = TypeInterner::new();
    let alias = interner.typedef("Count", TypeId::INTEGER);
    assert!(is_assignable_to(&interner, TypeId::INTEGER, alias));
    assert!(is_assignable_to(&interner, alias, TypeId::FIXED));
    assert!(is_comparable_to(&interner, alias, TypeId::FIXED));
    assert!(!is_bool_expression(&interner, alias, true));
    assert!(is_bool_expression(&interner, alias, false));
}

#[test]
fn test_comparability() {
    let mut interner = TypeInterner::new();
    let unit = interner.complex(SyntaxKind::UnitKeyword);
    let point = interner.complex(SyntaxKind::PointKeyword);
    let text = interner.literal(IntrinsicKind::String, "a");

    assert!(is_comparable_to(&interner, TypeId::INTEGER, TypeId::FIXED));
    assert!(is_comparable_to(&interner, text, TypeId::STRING));
    assert!(is_comparable_to(&interner, unit, TypeId::NULL));
    assert!(is_comparable_to(&interner, TypeId::NULL, unit));
    assert!(!is_comparable_to(&interner, unit, point));
    assert!(!is_comparable_to(&interner, TypeId::STRING, TypeId::INTEGER));
}

#[test]
fn test_bool_expression() {
    let mut interner = TypeInterner::new();
    let yes = interner.literal(IntrinsicKind::Bool, "true");
    assert!(is_bool_expression(&interner, TypeId::BOOL, true));
    assert!(is_bool_expression(&interner, yes, true));
    assert!(is_bool_expression(&interner, TypeId::UNKNOWN, true));
    assert!(!is_bool_expression(&interner, TypeId::INTEGER, true));
    assert!(is_bool_expression(&interner, TypeId::INTEGER, false));
    assert!(!is_bool_expression(&interner, TypeId::STRING, false));
}

#[test]
fn test_binary_operation_types() {
    let mut interner = TypeInterner::new();
    let text = interner.complex(SyntaxKind::TextKeyword);
    let one = interner.literal(IntrinsicKind::Integer, "1");
    let op = |interner: &TypeInterner, kind, l, r| binary_operation_type(interner, kind, l, r, true);

    assert_eq!(op(&interner, SyntaxKind::PlusToken, one, one), Some(TypeId::INTEGER));
    assert_eq!(
        op(&interner, SyntaxKind::AsteriskToken, TypeId::INTEGER, TypeId::FIXED),
        Some(TypeId::FIXED)
    );
    assert_eq!(
        op(&interner, SyntaxKind::PlusToken, TypeId::STRING, TypeId::STRING),
        Some(TypeId::STRING)
    );
    assert_eq!(op(&interner, SyntaxKind::PlusToken, text, text), Some(text));
    assert_eq!(op(&interner, SyntaxKind::MinusToken, TypeId::STRING, TypeId::STRING), None);
    assert_eq!(
        op(&interner, SyntaxKind::LessThanToken, TypeId::FIXED, one),
        Some(TypeId::BOOL)
    );
    assert_eq!(
        op(&interner, SyntaxKind::AmpersandToken, TypeId::INTEGER, TypeId::FIXED),
        None
    );
    assert_eq!(
        op(&interner, SyntaxKind::AmpersandAmpersandToken, TypeId::BOOL, TypeId::INTEGER),
        None
    );
    assert_eq!(
        binary_operation_type(
            &interner,
            SyntaxKind::AmpersandAmpersandToken,
            TypeId::BOOL,
            TypeId::INTEGER,
            false
        ),
        Some(TypeId::BOOL)
    );
    assert_eq!(
        op(&interner, SyntaxKind::EqualsEqualsToken, TypeId::UNKNOWN, TypeId::STRING),
        Some(TypeId::BOOL)
    );
    assert_eq!(
        op(&interner, SyntaxKind::PlusToken, TypeId::UNKNOWN, TypeId::STRING),
        Some(TypeId::UNKNOWN)
    );
    assert!(!is_valid_binary_operation(
        &interner,
        SyntaxKind::EqualsToken,
        TypeId::INTEGER,
        TypeId::INTEGER,
        true
    ));
}

#[test]
fn test_unary_operations() {
    let interner = TypeInterner::new();
    assert_eq!(
        prefix_operation_type(&interner, SyntaxKind::MinusToken, TypeId::FIXED, true),
        Some(TypeId::FIXED)
    );
    assert_eq!(
        prefix_operation_type(&interner, SyntaxKind::ExclamationToken, TypeId::BOOL, true),
        Some(TypeId::BOOL)
    );
    assert!(!is_valid_prefix_operation(
        &interner,
        SyntaxKind::ExclamationToken,
        TypeId::STRING,
        true
    ));
    assert!(!is_valid_prefix_operation(
        &interner,
        SyntaxKind::TildeToken,
        TypeId::FIXED,
        true
    ));
    assert!(is_valid_postfix_operation(
        &interner,
        SyntaxKind::PlusPlusToken,
        TypeId::INTEGER
    ));
    assert!(!is_valid_postfix_operation(
        &interner,
        SyntaxKind::MinusMinusToken,
        TypeId::BOOL
    ));
}
