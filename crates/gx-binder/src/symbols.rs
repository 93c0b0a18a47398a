//! Symbols, symbol tables and the symbol arena.

use gx_common::{FileId, SymbolId};
use gx_parser::NodeIndex;
use rustc_hash::FxHashMap;

/// Symbol flags
pub mod symbol_flags {
    pub const NONE: u32 = 0;
    pub const LOCAL_VARIABLE: u32 = 1 << 0;
    pub const GLOBAL_VARIABLE: u32 = 1 << 1;
    pub const FUNCTION_PARAMETER: u32 = 1 << 2;
    pub const FUNCTION: u32 = 1 << 3;
    pub const STRUCT: u32 = 1 << 4;
    pub const PROPERTY: u32 = 1 << 5;
    pub const TYPEDEF: u32 = 1 << 6;
    /// File-private global.
    pub const STATIC: u32 = 1 << 7;
    /// Per-file root symbol.
    pub const SOURCE_FILE: u32 = 1 << 8;

    // Composite flags
    pub const VARIABLE: u32 = LOCAL_VARIABLE | GLOBAL_VARIABLE;
    pub const VALUE: u32 = VARIABLE | FUNCTION_PARAMETER | FUNCTION | PROPERTY;
    pub const TYPE: u32 = STRUCT | TYPEDEF;
    /// Everything except modifiers.
    pub const CATEGORY_MASK: u32 = VARIABLE
        | FUNCTION_PARAMETER
        | FUNCTION
        | STRUCT
        | PROPERTY
        | TYPEDEF
        | SOURCE_FILE;
}

/// A declaration node in a specific document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub file: FileId,
    pub node: NodeIndex,
    /// Function with a body or variable with an initializer.
    pub has_value: bool,
}

/// Name -> symbol, unique keys.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: FxHashMap<String, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.symbols.get(name).copied()
    }

    pub fn set(&mut self, name: String, symbol: SymbolId) {
        self.symbols.insert(name, symbol);
    }

    pub fn remove(&mut self, name: &str) -> Option<SymbolId> {
        self.symbols.remove(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SymbolId)> {
        self.symbols.iter()
    }
}

/// Identity of a named declaration.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub escaped_name: String,
    pub flags: u32,
    pub declarations: Vec<Declaration>,
    /// First declaration with a body or initializer.
    pub value_declaration: Option<Declaration>,
    /// Members of container symbols (file, function, struct).
    pub members: SymbolTable,
    pub parent: Option<SymbolId>,
}

impl Symbol {
    pub fn new(flags: u32, escaped_name: String) -> Symbol {
        Symbol {
            escaped_name,
            flags,
            declarations: Vec::new(),
            value_declaration: None,
            members: SymbolTable::new(),
            parent: None,
        }
    }

    #[inline]
    pub fn has_any_flags(&self, flags: u32) -> bool {
        self.flags & flags != 0
    }

    /// Declaration category bits, without modifiers.
    #[inline]
    pub fn category(&self) -> u32 {
        self.flags & symbol_flags::CATEGORY_MASK
    }

    pub fn is_static(&self) -> bool {
        self.has_any_flags(symbol_flags::STATIC)
    }

    /// Record a declaration; the first one carrying a value wins
    /// `value_declaration`.
    pub fn add_declaration(&mut self, declaration: Declaration) {
        if !self.declarations.contains(&declaration) {
            self.declarations.push(declaration);
        }
        if declaration.has_value && self.value_declaration.is_none() {
            self.value_declaration = Some(declaration);
        }
    }

    /// Drop every declaration owned by `file`. Returns true when none remain.
    pub fn remove_declarations_in(&mut self, file: FileId) -> bool {
        self.declarations.retain(|d| d.file != file);
        if self.value_declaration.is_some_and(|d| d.file == file) {
            self.value_declaration = self.declarations.iter().find(|d| d.has_value).copied();
        }
        self.declarations.is_empty()
    }

    pub fn declarations_in(&self, file: FileId) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().filter(move |d| d.file == file)
    }
}

/// Arena of symbols. Ids are never reused, so a stale id left on another
/// document's node resolves to nothing rather than to an unrelated symbol.
#[derive(Clone, Debug, Default)]
pub struct SymbolArena {
    symbols: Vec<Option<Symbol>>,
    live: usize,
}

impl SymbolArena {
    pub fn new() -> SymbolArena {
        SymbolArena::default()
    }

    pub fn alloc(&mut self, flags: u32, escaped_name: String) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Some(Symbol::new(flags, escaped_name)));
        self.live += 1;
        id
    }

    #[inline]
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub fn remove(&mut self, id: SymbolId) -> Option<Symbol> {
        let removed = self.symbols.get_mut(id.index()).and_then(Option::take);
        if removed.is_some() {
            self.live -= 1;
        }
        removed
    }

    /// Number of live symbols.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (SymbolId(i as u32), s)))
    }
}
