//! Type interning for structural deduplication.
//!
//! Converts `TypeData` values into `TypeId` handles. Each unique structure is
//! stored once, so equal types always share an id. Intrinsics are registered
//! first and keep the fixed ids declared on `TypeId`.

use crate::types::*;
use gx_common::SymbolId;
use gx_common::limits::MAX_ALIAS_RESOLUTION_DEPTH;
use gx_scanner::SyntaxKind;
use rustc_hash::FxHashMap;

#[derive(Debug)]
pub struct TypeInterner {
    types: Vec<TypeData>,
    ids: FxHashMap<TypeData, TypeId>,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    pub fn new() -> TypeInterner {
        let mut interner = TypeInterner {
            types: Vec::with_capacity(64),
            ids: FxHashMap::default(),
        };
        interner.register(TypeData::Unknown);
        for kind in [
            IntrinsicKind::String,
            IntrinsicKind::Integer,
            IntrinsicKind::Fixed,
            IntrinsicKind::Bool,
            IntrinsicKind::Void,
            IntrinsicKind::Null,
        ] {
            let id = interner.register(TypeData::Intrinsic(kind));
            debug_assert_eq!(id, kind.type_id());
        }
        interner
    }

    fn register(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(data.clone());
        self.ids.insert(data, id);
        id
    }

    /// Id for `data`, allocating it on first use.
    pub fn intern(&mut self, data: TypeData) -> TypeId {
        if let Some(&id) = self.ids.get(&data) {
            return id;
        }
        let id = self.register(data);
        tracing::trace!(id = id.0, data = ?self.types[id.0 as usize], "interned type");
        id
    }

    #[inline]
    pub fn lookup(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id.0 as usize)
    }

    /// Number of interned types, intrinsics included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn intrinsic(&self, kind: IntrinsicKind) -> TypeId {
        kind.type_id()
    }

    pub fn literal(&mut self, kind: IntrinsicKind, value: impl Into<String>) -> TypeId {
        self.intern(TypeData::Literal(LiteralType {
            kind,
            value: value.into(),
        }))
    }

    pub fn struct_type(&mut self, symbol: SymbolId, name: impl Into<String>) -> TypeId {
        self.intern(TypeData::Struct(StructType {
            symbol,
            name: name.into(),
        }))
    }

    pub fn function(
        &mut self,
        symbol: SymbolId,
        name: impl Into<String>,
        signature: SignatureMeta,
    ) -> TypeId {
        self.intern(TypeData::Function(FunctionType {
            symbol,
            name: name.into(),
            signature,
        }))
    }

    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.intern(TypeData::Array(element))
    }

    pub fn complex(&mut self, keyword: SyntaxKind) -> TypeId {
        self.intern(TypeData::Complex(keyword))
    }

    pub fn reference(&mut self, kind: ReferenceKind, inner: TypeId) -> TypeId {
        self.intern(TypeData::Reference(kind, inner))
    }

    pub fn typedef(&mut self, name: impl Into<String>, referenced: TypeId) -> TypeId {
        self.intern(TypeData::Typedef(TypedefType {
            name: name.into(),
            referenced,
        }))
    }

    /// Literal types widen to their intrinsic; everything else is unchanged.
    pub fn widen(&self, id: TypeId) -> TypeId {
        match self.lookup(id) {
            Some(TypeData::Literal(literal)) => literal.kind.type_id(),
            _ => id,
        }
    }

    /// Follow typedefs to the type they name. Stops after
    /// `MAX_ALIAS_RESOLUTION_DEPTH` hops and returns the typedef reached.
    pub fn resolve_typedef(&self, mut id: TypeId) -> TypeId {
        for _ in 0..MAX_ALIAS_RESOLUTION_DEPTH {
            match self.lookup(id) {
                Some(TypeData::Typedef(typedef)) => id = typedef.referenced,
                _ => return id,
            }
        }
        id
    }

    /// Widened and typedef-free form used by operator rules.
    pub fn apparent_type(&self, id: TypeId) -> TypeId {
        self.widen(self.resolve_typedef(id))
    }

    pub fn intrinsic_kind(&self, id: TypeId) -> Option<IntrinsicKind> {
        match self.lookup(self.apparent_type(id))? {
            TypeData::Intrinsic(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn signature(&self, id: TypeId) -> Option<&SignatureMeta> {
        match self.lookup(self.resolve_typedef(id))? {
            TypeData::Function(function) => Some(&function.signature),
            _ => None,
        }
    }

    pub fn struct_symbol(&self, id: TypeId) -> Option<SymbolId> {
        match self.lookup(self.resolve_typedef(id))? {
            TypeData::Struct(st) => Some(st.symbol),
            _ => None,
        }
    }

    pub fn array_element(&self, id: TypeId) -> Option<TypeId> {
        match self.lookup(self.resolve_typedef(id))? {
            TypeData::Array(element) => Some(*element),
            _ => None,
        }
    }
}
