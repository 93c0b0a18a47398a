//! Property-based tests for the relation rules.
//!
//! 1. **Reflexivity**: every type is assignable and comparable to itself
//! 2. **Unknown** is assignable and comparable in both directions
//! 3. **Comparability is symmetric**
//! 4. **Operator rules are total**: no pair of types panics

use gx_common::SymbolId;
use gx_scanner::SyntaxKind;
use gx_solver::*;
use proptest::prelude::*;

fn type_universe() -> (TypeInterner, Vec<TypeId>) {
    let mut interner = TypeInterner::new();
    let mut types = vec![
        TypeId::UNKNOWN,
        TypeId::STRING,
        TypeId::INTEGER,
        TypeId::FIXED,
        TypeId::BOOL,
        TypeId::VOID,
        TypeId::NULL,
    ];
    let unit = interner.complex(SyntaxKind::UnitKeyword);
    let text = interner.complex(SyntaxKind::TextKeyword);
    let s = interner.struct_type(SymbolId(0), "S");
    let t = interner.struct_type(SymbolId(1), "T");
    let f = interner.function(
        SymbolId(2),
        "f",
        SignatureMeta::new(TypeId::VOID, [TypeId::INTEGER]),
    );
    let ints = interner.array(TypeId::INTEGER);
    types.extend([
        interner.literal(IntrinsicKind::Integer, "7"),
        interner.literal(IntrinsicKind::Fixed, "0.25"),
        interner.literal(IntrinsicKind::Bool, "false"),
        interner.literal(IntrinsicKind::String, "x"),
        unit,
        text,
        s,
        t,
        f,
        ints,
        interner.reference(ReferenceKind::Structref, s),
        interner.reference(ReferenceKind::Funcref, f),
        interner.reference(ReferenceKind::Arrayref, ints),
        interner.typedef("Count", TypeId::INTEGER),
        interner.typedef("Hero", unit),
    ]);
    (interner, types)
}

const OPERATORS: &[SyntaxKind] = &[
    SyntaxKind::PlusToken,
    SyntaxKind::MinusToken,
    SyntaxKind::AsteriskToken,
    SyntaxKind::SlashToken,
    SyntaxKind::PercentToken,
    SyntaxKind::AmpersandToken,
    SyntaxKind::BarToken,
    SyntaxKind::CaretToken,
    SyntaxKind::LessThanLessThanToken,
    SyntaxKind::GreaterThanGreaterThanToken,
    SyntaxKind::LessThanToken,
    SyntaxKind::GreaterThanEqualsToken,
    SyntaxKind::EqualsEqualsToken,
    SyntaxKind::ExclamationEqualsToken,
    SyntaxKind::AmpersandAmpersandToken,
    SyntaxKind::BarBarToken,
    SyntaxKind::ExclamationToken,
    SyntaxKind::TildeToken,
    SyntaxKind::PlusPlusToken,
];

proptest! {
    #[test]
    fn relations_are_reflexive(index in 0usize..22) {
        let (interner, types) = type_universe();
        let ty = types[index % types.len()];
        prop_assert!(is_assignable_to(&interner, ty, ty));
        prop_assert!(is_comparable_to(&interner, ty, ty));
    }

    #[test]
    fn unknown_relates_both_ways(index in 0usize..22) {
        let (interner, types) = type_universe();
        let ty = types[index % types.len()];
        prop_assert!(is_assignable_to(&interner, TypeId::UNKNOWN, ty));
        prop_assert!(is_assignable_to(&interner, ty, TypeId::UNKNOWN));
        prop_assert!(is_comparable_to(&interner, ty, TypeId::UNKNOWN));
        prop_assert!(is_comparable_to(&interner, TypeId::UNKNOWN, ty));
    }

    #[test]
    fn comparability_is_symmetric(a in 0usize..22, b in 0usize..22) {
        let (interner, types) = type_universe();
        let (a, b) = (types[a % types.len()], types[b % types.len()]);
        prop_assert_eq!(
            is_comparable_to(&interner, a, b),
            is_comparable_to(&interner, b, a)
        );
    }

    #[test]
    fn operator_rules_are_total(
        a in 0usize..22,
        b in 0usize..22,
        op in prop::sample::select(OPERATORS),
        strict in any::<bool>(),
    ) {
        let (interner, types) = type_universe();
        let (a, b) = (types[a % types.len()], types[b % types.len()]);
        let _ = binary_operation_type(&interner, op, a, b, strict);
        let _ = prefix_operation_type(&interner, op, a, strict);
        let _ = is_valid_postfix_operation(&interner, op, a);
        let _ = is_bool_expression(&interner, a, strict);
        prop_assert!(!format_type(&interner, a).is_empty());
    }
}
