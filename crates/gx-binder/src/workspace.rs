//! Symbol graph shared by every open document.
//!
//! File-level symbols are shared: a global declared in two documents is one
//! symbol with declarations from both. `static` globals stay private to the
//! document that declares them. Documents are registered by name and keep
//! their `FileId` for the life of the table.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::symbols::{Symbol, SymbolArena};
use gx_common::{FileId, SymbolId};

#[derive(Clone, Debug, Default)]
struct FileEntry {
    root_symbol: Option<SymbolId>,
    /// Symbols for declarations that clashed with an existing symbol of a
    /// different category. Not reachable through any members table.
    detached: Vec<SymbolId>,
}

#[derive(Clone, Debug, Default)]
pub struct WorkspaceSymbolTable {
    pub(crate) symbols: SymbolArena,
    files: IndexMap<String, FileEntry>,
}

impl WorkspaceSymbolTable {
    pub fn new() -> WorkspaceSymbolTable {
        WorkspaceSymbolTable::default()
    }

    /// Id for `file_name`, registering it on first use.
    pub fn register_file(&mut self, file_name: &str) -> FileId {
        let index = match self.files.get_index_of(file_name) {
            Some(index) => index,
            None => self.files.insert_full(file_name.to_string(), FileEntry::default()).0,
        };
        FileId(index as u32)
    }

    pub fn file_id(&self, file_name: &str) -> Option<FileId> {
        self.files.get_index_of(file_name).map(|i| FileId(i as u32))
    }

    pub fn file_name(&self, file: FileId) -> Option<&str> {
        self.files.get_index(file.0 as usize).map(|(name, _)| name.as_str())
    }

    /// Root symbol of a bound document.
    pub fn root_symbol(&self, file: FileId) -> Option<SymbolId> {
        self.entry(file).and_then(|e| e.root_symbol)
    }

    pub fn is_bound(&self, file: FileId) -> bool {
        self.root_symbol(file).is_some()
    }

    pub fn get_symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    pub fn symbols(&self) -> &SymbolArena {
        &self.symbols
    }

    /// Member `name` of a container symbol.
    pub fn lookup_member(&self, container: SymbolId, name: &str) -> Option<SymbolId> {
        self.symbols.get(container)?.members.get(name)
    }

    /// File-level symbols of a bound document.
    pub fn file_symbols(&self, file: FileId) -> Vec<SymbolId> {
        let Some(root) = self.root_symbol(file).and_then(|r| self.symbols.get(r)) else {
            return Vec::new();
        };
        let mut ids: Vec<SymbolId> = root.members.iter().map(|(_, &id)| id).collect();
        ids.sort();
        ids
    }

    /// Symbols created for category clashes in `file`.
    pub fn detached_symbols(&self, file: FileId) -> &[SymbolId] {
        self.entry(file).map_or(&[], |e| e.detached.as_slice())
    }

    /// Sorted, de-duplicated names declared at file level in any bound
    /// document.
    pub fn global_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .files
            .values()
            .filter_map(|e| e.root_symbol)
            .filter_map(|root| self.symbols.get(root))
            .flat_map(|root| root.members.iter().map(|(name, _)| name.clone()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Non-static file-level symbol `name` from another bound document.
    pub fn resolve_global(&self, name: &str, requesting_file: FileId) -> Option<SymbolId> {
        self.files
            .values()
            .enumerate()
            .filter(|(index, _)| *index as u32 != requesting_file.0)
            .filter_map(|(_, entry)| entry.root_symbol)
            .filter_map(|root| self.lookup_member(root, name))
            .find(|&id| self.symbols.get(id).is_some_and(|s| !s.is_static()))
    }

    fn entry(&self, file: FileId) -> Option<&FileEntry> {
        self.files.get_index(file.0 as usize).map(|(_, e)| e)
    }

    fn entry_mut(&mut self, file: FileId) -> Option<&mut FileEntry> {
        self.files.get_index_mut(file.0 as usize).map(|(_, e)| e)
    }

    pub(crate) fn set_root_symbol(&mut self, file: FileId, root: SymbolId) {
        if let Some(entry) = self.entry_mut(file) {
            entry.root_symbol = Some(root);
        }
    }

    pub(crate) fn add_detached(&mut self, file: FileId, symbols: Vec<SymbolId>) {
        if let Some(entry) = self.entry_mut(file) {
            entry.detached.extend(symbols);
        }
    }

    /// Insert `name -> symbol` into a container's members.
    pub(crate) fn add_member(&mut self, container: SymbolId, name: &str, symbol: SymbolId) {
        if let Some(container) = self.symbols.get_mut(container)
            && !container.members.has(name)
        {
            container.members.set(name.to_string(), symbol);
        }
    }

    /// Remove every declaration owned by `file` and delete the symbols left
    /// without declarations. Symbols still declared by other documents
    /// survive. Returns the number of symbols deleted.
    pub fn unbind_file(&mut self, file: FileId) -> usize {
        let Some(entry) = self.entry_mut(file) else {
            return 0;
        };
        let root = entry.root_symbol.take();
        let detached = std::mem::take(&mut entry.detached);

        let before = self.symbols.len();
        let mut visited = FxHashSet::default();
        for symbol in root.into_iter().chain(detached) {
            self.unbind_symbol(symbol, file, root, &mut visited);
        }
        let removed = before - self.symbols.len();
        tracing::debug!(file = file.0, removed, "unbound file symbols");
        removed
    }

    fn unbind_symbol(
        &mut self,
        id: SymbolId,
        file: FileId,
        file_root: Option<SymbolId>,
        visited: &mut FxHashSet<SymbolId>,
    ) {
        if !visited.insert(id) {
            return;
        }
        let members: Vec<(String, SymbolId)> = match self.symbols.get(id) {
            Some(symbol) => symbol
                .members
                .iter()
                .map(|(name, &member)| (name.clone(), member))
                .collect(),
            None => return,
        };
        for (name, member) in members {
            self.unbind_symbol(member, file, file_root, visited);
            if self.symbols.get(member).is_none()
                && let Some(symbol) = self.symbols.get_mut(id)
            {
                symbol.members.remove(&name);
            }
        }

        let Some(symbol) = self.symbols.get_mut(id) else {
            return;
        };
        if symbol.remove_declarations_in(file) {
            self.symbols.remove(id);
            return;
        }
        // A shared global first declared here moves under a surviving
        // document's root.
        if symbol.parent.is_some() && symbol.parent == file_root {
            let survivor = symbol.declarations.first().map(|d| d.file);
            let new_parent = survivor.and_then(|f| self.root_symbol(f));
            if let Some(symbol) = self.symbols.get_mut(id) {
                symbol.parent = new_parent;
            }
        }
    }

    /// Every members-table entry points at a live, still-declared symbol of
    /// the same name.
    pub fn is_consistent(&self) -> bool {
        self.symbols.iter().all(|(_, symbol)| {
            symbol
                .members
                .iter()
                .all(|(name, &member)| {
                    self.symbols
                        .get(member)
                        .is_some_and(|m| &m.escaped_name == name && !m.declarations.is_empty())
                })
        })
    }
}
