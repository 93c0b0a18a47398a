//! Relation and operator rules.
//!
//! Each rule dispatches on the source type's variant with one match arm per
//! `TypeData` variant. `Unknown` is accepted everywhere so one semantic error
//! does not cascade.

use crate::intern::TypeInterner;
use crate::types::{IntrinsicKind, ReferenceKind, TypeData, TypeId};
use gx_scanner::SyntaxKind;

/// Can a value of type `source` be stored in a slot of type `target`?
pub fn is_assignable_to(interner: &TypeInterner, source: TypeId, target: TypeId) -> bool {
    if source == target || source.is_unknown() || target.is_unknown() {
        return true;
    }
    let target = interner.resolve_typedef(target);
    let (Some(source_data), Some(target_data)) = (interner.lookup(source), interner.lookup(target))
    else {
        return false;
    };

    match source_data {
        TypeData::Unknown => true,
        TypeData::Intrinsic(kind) => match target_data {
            TypeData::Unknown => true,
            TypeData::Intrinsic(target_kind) => {
                kind == target_kind
                    || (*kind == IntrinsicKind::Integer && *target_kind == IntrinsicKind::Fixed)
                    || (*kind == IntrinsicKind::Null && *target_kind == IntrinsicKind::String)
            }
            TypeData::Complex(_) | TypeData::Reference(..) => *kind == IntrinsicKind::Null,
            _ => false,
        },
        TypeData::Literal(literal) => {
            is_assignable_to(interner, literal.kind.type_id(), target)
        }
        TypeData::Struct(st) => match target_data {
            TypeData::Struct(target_st) => st.symbol == target_st.symbol,
            TypeData::Reference(ReferenceKind::Structref, inner) => {
                is_assignable_to(interner, source, *inner)
            }
            _ => false,
        },
        TypeData::Function(function) => match target_data {
            TypeData::Function(target_fn) => function.signature == target_fn.signature,
            TypeData::Reference(ReferenceKind::Funcref, inner) => {
                is_assignable_to(interner, source, *inner)
            }
            _ => false,
        },
        TypeData::Array(element) => match target_data {
            TypeData::Array(target_element) => {
                interner.resolve_typedef(*element) == interner.resolve_typedef(*target_element)
            }
            TypeData::Reference(ReferenceKind::Arrayref, inner) => {
                is_assignable_to(interner, source, *inner)
            }
            _ => false,
        },
        TypeData::Complex(keyword) => {
            matches!(target_data, TypeData::Complex(target_keyword) if keyword == target_keyword)
        }
        TypeData::Reference(kind, inner) => match target_data {
            TypeData::Reference(target_kind, target_inner) => {
                kind == target_kind && is_assignable_to(interner, *inner, *target_inner)
            }
            _ => false,
        },
        TypeData::Typedef(typedef) => is_assignable_to(interner, typedef.referenced, target),
    }
}

/// Can `left` and `right` appear on either side of `==` / `!=`?
pub fn is_comparable_to(interner: &TypeInterner, left: TypeId, right: TypeId) -> bool {
    comparable_one_way(interner, left, right) || comparable_one_way(interner, right, left)
}

fn comparable_one_way(interner: &TypeInterner, left: TypeId, right: TypeId) -> bool {
    let left = interner.apparent_type(left);
    let right = interner.apparent_type(right);
    if left == right || left.is_unknown() || right.is_unknown() {
        return true;
    }
    let (Some(left_data), Some(right_data)) = (interner.lookup(left), interner.lookup(right)) else {
        return false;
    };

    match left_data {
        TypeData::Unknown => true,
        TypeData::Intrinsic(kind) => match right_data {
            TypeData::Intrinsic(right_kind) => {
                (kind.is_numeric() && right_kind.is_numeric())
                    || (*kind == IntrinsicKind::Null && *right_kind == IntrinsicKind::String)
            }
            TypeData::Complex(_) | TypeData::Reference(..) | TypeData::Function(_) => {
                *kind == IntrinsicKind::Null
            }
            _ => false,
        },
        // Apparent types are already widened.
        TypeData::Literal(_) => false,
        TypeData::Struct(st) => {
            matches!(right_data, TypeData::Struct(other) if other.symbol == st.symbol)
        }
        TypeData::Function(function) => match right_data {
            TypeData::Function(other) => function.signature == other.signature,
            TypeData::Reference(ReferenceKind::Funcref, _) => is_assignable_to(interner, left, right),
            _ => false,
        },
        TypeData::Array(_) => false,
        TypeData::Complex(keyword) => {
            matches!(right_data, TypeData::Complex(other) if other == keyword)
        }
        TypeData::Reference(kind, inner) => match right_data {
            TypeData::Reference(other_kind, other_inner) => {
                kind == other_kind
                    && (is_assignable_to(interner, *inner, *other_inner)
                        || is_assignable_to(interner, *other_inner, *inner))
            }
            _ => false,
        },
        TypeData::Typedef(_) => false,
    }
}

/// Is `ty` usable as a condition? Integers qualify only when
/// `strict_conditions` is off.
pub fn is_bool_expression(interner: &TypeInterner, ty: TypeId, strict_conditions: bool) -> bool {
    let Some(data) = interner.lookup(interner.resolve_typedef(ty)) else {
        return false;
    };
    match data {
        TypeData::Unknown => true,
        TypeData::Intrinsic(kind) => {
            *kind == IntrinsicKind::Bool || (!strict_conditions && *kind == IntrinsicKind::Integer)
        }
        TypeData::Literal(literal) => {
            is_bool_expression(interner, literal.kind.type_id(), strict_conditions)
        }
        TypeData::Struct(_)
        | TypeData::Function(_)
        | TypeData::Array(_)
        | TypeData::Complex(_)
        | TypeData::Reference(..) => false,
        TypeData::Typedef(typedef) => {
            is_bool_expression(interner, typedef.referenced, strict_conditions)
        }
    }
}

/// Result type of `left op right`, or `None` when the operator does not apply.
pub fn binary_operation_type(
    interner: &TypeInterner,
    operator: SyntaxKind,
    left: TypeId,
    right: TypeId,
    strict_conditions: bool,
) -> Option<TypeId> {
    use SyntaxKind::*;

    match operator {
        EqualsEqualsToken | ExclamationEqualsToken => {
            is_comparable_to(interner, left, right).then_some(TypeId::BOOL)
        }
        AmpersandAmpersandToken | BarBarToken => {
            (is_bool_expression(interner, left, strict_conditions)
                && is_bool_expression(interner, right, strict_conditions))
            .then_some(TypeId::BOOL)
        }
        LessThanToken | GreaterThanToken | LessThanEqualsToken | GreaterThanEqualsToken => {
            (is_numeric_or_unknown(interner, left) && is_numeric_or_unknown(interner, right))
                .then_some(TypeId::BOOL)
        }
        PlusToken | MinusToken | AsteriskToken | SlashToken | PercentToken => {
            arithmetic_type(interner, operator, left, right)
        }
        AmpersandToken | BarToken | CaretToken | LessThanLessThanToken
        | GreaterThanGreaterThanToken => {
            let left = interner.apparent_type(left);
            let right = interner.apparent_type(right);
            if left.is_unknown() || right.is_unknown() {
                return Some(TypeId::UNKNOWN);
            }
            (left == TypeId::INTEGER && right == TypeId::INTEGER).then_some(TypeId::INTEGER)
        }
        _ => None,
    }
}

fn arithmetic_type(
    interner: &TypeInterner,
    operator: SyntaxKind,
    left: TypeId,
    right: TypeId,
) -> Option<TypeId> {
    let left = interner.apparent_type(left);
    let right = interner.apparent_type(right);
    if left.is_unknown() || right.is_unknown() {
        return Some(TypeId::UNKNOWN);
    }
    let left_kind = interner.intrinsic_kind(left);
    let right_kind = interner.intrinsic_kind(right);
    match (left_kind, right_kind) {
        (Some(l), Some(r)) if l.is_numeric() && r.is_numeric() => {
            if l == IntrinsicKind::Fixed || r == IntrinsicKind::Fixed {
                Some(TypeId::FIXED)
            } else {
                Some(TypeId::INTEGER)
            }
        }
        (Some(IntrinsicKind::String), Some(IntrinsicKind::String))
            if operator == SyntaxKind::PlusToken =>
        {
            Some(TypeId::STRING)
        }
        _ => {
            // `text + text` concatenates localized text.
            let is_text = |id: TypeId| {
                matches!(interner.lookup(id), Some(TypeData::Complex(SyntaxKind::TextKeyword)))
            };
            (operator == SyntaxKind::PlusToken && is_text(left) && is_text(right)).then_some(left)
        }
    }
}

fn is_numeric_or_unknown(interner: &TypeInterner, ty: TypeId) -> bool {
    let ty = interner.apparent_type(ty);
    ty.is_unknown() || interner.intrinsic_kind(ty).is_some_and(IntrinsicKind::is_numeric)
}

pub fn is_valid_binary_operation(
    interner: &TypeInterner,
    operator: SyntaxKind,
    left: TypeId,
    right: TypeId,
    strict_conditions: bool,
) -> bool {
    binary_operation_type(interner, operator, left, right, strict_conditions).is_some()
}

/// Result type of a prefix operator, or `None` when it does not apply.
pub fn prefix_operation_type(
    interner: &TypeInterner,
    operator: SyntaxKind,
    operand: TypeId,
    strict_conditions: bool,
) -> Option<TypeId> {
    let apparent = interner.apparent_type(operand);
    if apparent.is_unknown() {
        return Some(if operator == SyntaxKind::ExclamationToken {
            TypeId::BOOL
        } else {
            TypeId::UNKNOWN
        });
    }
    match operator {
        SyntaxKind::ExclamationToken => {
            is_bool_expression(interner, operand, strict_conditions).then_some(TypeId::BOOL)
        }
        SyntaxKind::TildeToken => (apparent == TypeId::INTEGER).then_some(TypeId::INTEGER),
        SyntaxKind::PlusToken
        | SyntaxKind::MinusToken
        | SyntaxKind::PlusPlusToken
        | SyntaxKind::MinusMinusToken => is_numeric_or_unknown(interner, apparent).then_some(apparent),
        _ => None,
    }
}

pub fn is_valid_prefix_operation(
    interner: &TypeInterner,
    operator: SyntaxKind,
    operand: TypeId,
    strict_conditions: bool,
) -> bool {
    prefix_operation_type(interner, operator, operand, strict_conditions).is_some()
}

/// Postfix `++` / `--` apply to numeric operands only.
pub fn is_valid_postfix_operation(
    interner: &TypeInterner,
    operator: SyntaxKind,
    operand: TypeId,
) -> bool {
    matches!(operator, SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken)
        && is_numeric_or_unknown(interner, operand)
}
