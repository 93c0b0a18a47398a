//! Type formatting for diagnostics.

use crate::intern::TypeInterner;
use crate::types::{TypeData, TypeId};

/// Renders types the way Galaxy source spells them.
pub struct TypeFormatter<'a> {
    interner: &'a TypeInterner,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        TypeFormatter { interner }
    }

    pub fn format(&self, id: TypeId) -> String {
        let Some(data) = self.interner.lookup(id) else {
            return format!("<invalid type {}>", id.0);
        };
        match data {
            TypeData::Unknown => "unknown".to_string(),
            TypeData::Intrinsic(kind) => kind.name().to_string(),
            // Literals print as the type they widen to.
            TypeData::Literal(literal) => literal.kind.name().to_string(),
            TypeData::Struct(st) => st.name.clone(),
            TypeData::Function(function) => {
                let params: Vec<String> = function
                    .signature
                    .parameter_types
                    .iter()
                    .map(|&p| self.format(p))
                    .collect();
                format!(
                    "{} {}({})",
                    self.format(function.signature.return_type),
                    function.name,
                    params.join(", ")
                )
            }
            TypeData::Array(element) => format!("{}[]", self.format(*element)),
            TypeData::Complex(keyword) => keyword.text().unwrap_or("complex").to_string(),
            TypeData::Reference(kind, inner) => format!("{}<{}>", kind.name(), self.format(*inner)),
            TypeData::Typedef(typedef) => typedef.name.clone(),
        }
    }
}

/// Shorthand for `TypeFormatter::new(interner).format(id)`.
pub fn format_type(interner: &TypeInterner, id: TypeId) -> String {
    TypeFormatter::new(interner).format(id)
}
