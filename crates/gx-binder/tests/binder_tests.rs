//! Binding and unbinding documents against a shared workspace.

use gx_binder::{WorkspaceSymbolTable, bind_source_file, symbol_flags, unbind_source_file};
use gx_common::SymbolId;
use gx_common::diagnostics::diagnostic_codes;
use gx_parser::{SourceFile, parse_file};
use proptest::prelude::*;

fn bind(workspace: &mut WorkspaceSymbolTable, name: &str, text: &str) -> SourceFile {
    let mut file = parse_file(name, text);
    assert!(
        file.parse_diagnostics.is_empty(),
        "{name}: {:?}",
        file.parse_diagnostics
    );
    bind_source_file(workspace, &mut file);
    file
}

fn file_member(workspace: &WorkspaceSymbolTable, file: &SourceFile, name: &str) -> Option<SymbolId> {
    workspace.lookup_member(file.symbol?, name)
}

#[test]
fn test_bind_links_declarations_to_symbols() {
    let mut ws = WorkspaceSymbolTable::new();
    let file = bind(&mut ws, "a.galaxy", "int x;\nvoid f(int a) { int b; }\n");
    assert!(file.bind_diagnostics.is_empty());

    let root = file.symbol.unwrap();
    assert_eq!(file.arena.symbol(file.root), Some(root));
    assert!(ws.get_symbol(root).unwrap().has_any_flags(symbol_flags::SOURCE_FILE));

    let x = file_member(&ws, &file, "x").unwrap();
    assert_eq!(file.arena.symbol(file.statements()[0]), Some(x));
    assert_eq!(ws.get_symbol(x).unwrap().category(), symbol_flags::GLOBAL_VARIABLE);

    let f = file_member(&ws, &file, "f").unwrap();
    let f_symbol = ws.get_symbol(f).unwrap();
    assert_eq!(f_symbol.category(), symbol_flags::FUNCTION);
    assert_eq!(f_symbol.parent, Some(root));

    let a = ws.lookup_member(f, "a").unwrap();
    let b = ws.lookup_member(f, "b").unwrap();
    assert_eq!(ws.get_symbol(a).unwrap().category(), symbol_flags::FUNCTION_PARAMETER);
    assert_eq!(ws.get_symbol(b).unwrap().category(), symbol_flags::LOCAL_VARIABLE);
    assert_eq!(ws.get_symbol(b).unwrap().parent, Some(f));
    assert_eq!(file_member(&ws, &file, "b"), None);
}

#[test]
fn test_struct_members_are_properties() {
    let mut ws = WorkspaceSymbolTable::new();
    let file = bind(&mut ws, "a.galaxy", "struct S { int a; fixed b; };\ntypedef S T;");
    let s = file_member(&ws, &file, "S").unwrap();
    let a = ws.lookup_member(s, "a").unwrap();
    assert_eq!(ws.get_symbol(a).unwrap().category(), symbol_flags::PROPERTY);
    assert!(ws.lookup_member(s, "b").is_some());

    let t = file_member(&ws, &file, "T").unwrap();
    assert!(ws.get_symbol(t).unwrap().has_any_flags(symbol_flags::TYPE));
}

#[test]
fn test_globals_merge_across_documents() {
    let mut ws = WorkspaceSymbolTable::new();
    let a = bind(&mut ws, "a.galaxy", "int x;");
    let b = bind(&mut ws, "b.galaxy", "int x = 1;");

    let in_a = file_member(&ws, &a, "x").unwrap();
    let in_b = file_member(&ws, &b, "x").unwrap();
    assert_eq!(in_a, in_b);

    let symbol = ws.get_symbol(in_a).unwrap();
    assert_eq!(symbol.declarations.len(), 2);
    let value = symbol.value_declaration.unwrap();
    assert_eq!(ws.file_name(value.file), Some("b.galaxy"));
    assert_eq!(ws.global_names(), vec!["x".to_string()]);
}

#[test]
fn test_static_globals_stay_private() {
    let mut ws = WorkspaceSymbolTable::new();
    let a = bind(&mut ws, "a.galaxy", "static int x;");
    let b = bind(&mut ws, "b.galaxy", "int x;");
    let c = bind(&mut ws, "c.galaxy", "static int x;");

    let xa = file_member(&ws, &a, "x").unwrap();
    let xb = file_member(&ws, &b, "x").unwrap();
    let xc = file_member(&ws, &c, "x").unwrap();
    assert_ne!(xa, xb);
    assert_ne!(xb, xc);
    assert_ne!(xa, xc);
    assert!(ws.get_symbol(xa).unwrap().is_static());
    assert!(!ws.get_symbol(xb).unwrap().is_static());
    assert!(a.bind_diagnostics.is_empty());
    assert!(c.bind_diagnostics.is_empty());
}

#[test]
fn test_forward_declaration_then_definition() {
    let mut ws = WorkspaceSymbolTable::new();
    let file = bind(&mut ws, "a.galaxy", "void f();\nvoid f() { }\n");
    assert!(file.bind_diagnostics.is_empty());

    let f = file_member(&ws, &file, "f").unwrap();
    let symbol = ws.get_symbol(f).unwrap();
    assert_eq!(symbol.declarations.len(), 2);
    assert_eq!(symbol.value_declaration.unwrap().node, file.statements()[1]);
    assert_eq!(file.arena.symbol(file.statements()[0]), Some(f));
    assert_eq!(file.arena.symbol(file.statements()[1]), Some(f));
}

#[test]
fn test_category_clash_reports_duplicate_identifier() {
    let mut ws = WorkspaceSymbolTable::new();
    let a = bind(&mut ws, "a.galaxy", "int x;");
    let b = bind(&mut ws, "b.galaxy", "void x() { int y; }");

    assert_eq!(b.bind_diagnostics.len(), 1);
    let diag = &b.bind_diagnostics[0];
    assert_eq!(diag.code, diagnostic_codes::DUPLICATE_IDENTIFIER);
    assert_eq!(diag.message_text, "Duplicate identifier 'x'.");
    assert_eq!(diag.file, "b.galaxy");
    assert_eq!(&b.text[diag.start as usize..(diag.start + diag.length) as usize], "x");

    let shared = file_member(&ws, &a, "x").unwrap();
    let clashing = b.arena.symbol(b.statements()[0]).unwrap();
    assert_ne!(shared, clashing);
    assert_eq!(ws.detached_symbols(ws.file_id("b.galaxy").unwrap()), &[clashing]);
    assert!(ws.detached_symbols(ws.file_id("a.galaxy").unwrap()).is_empty());
    assert_eq!(ws.get_symbol(shared).unwrap().declarations.len(), 1);
    assert_eq!(file_member(&ws, &b, "x"), None);
    assert!(ws.lookup_member(clashing, "y").is_some());
    assert!(ws.is_consistent());
}

#[test]
fn test_clash_within_one_document() {
    let mut ws = WorkspaceSymbolTable::new();
    let file = bind(&mut ws, "a.galaxy", "int x;\nstruct x { int a; };");
    let codes: Vec<u32> = file.bind_diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![diagnostic_codes::DUPLICATE_IDENTIFIER]);
    assert_eq!(file.bind_diagnostics[0].line, 1);
}

#[test]
fn test_unbind_keeps_symbols_declared_elsewhere() {
    let mut ws = WorkspaceSymbolTable::new();
    let mut a = bind(&mut ws, "a.galaxy", "int shared;\nint only_a;");
    let b = bind(&mut ws, "b.galaxy", "int shared = 2;");
    let shared = file_member(&ws, &b, "shared").unwrap();

    unbind_source_file(&mut ws, &mut a);
    assert!(a.symbol.is_none());
    assert!(a.bind_diagnostics.is_empty());
    assert!(a.statements().iter().all(|&s| a.arena.symbol(s).is_none()));

    assert_eq!(ws.global_names(), vec!["shared".to_string()]);
    let symbol = ws.get_symbol(shared).unwrap();
    assert_eq!(symbol.declarations.len(), 1);
    assert_eq!(symbol.parent, b.symbol);
    assert!(ws.is_consistent());
}

#[test]
fn test_unbind_removes_detached_symbols() {
    let mut ws = WorkspaceSymbolTable::new();
    let _a = bind(&mut ws, "a.galaxy", "int x;");
    let before = ws.symbols().len();
    let mut b = bind(&mut ws, "b.galaxy", "void x(int p) { }");
    assert!(ws.symbols().len() > before);

    unbind_source_file(&mut ws, &mut b);
    assert_eq!(ws.symbols().len(), before);
    assert!(ws.is_consistent());
}

#[test]
fn test_rebind_replaces_previous_binding() {
    let mut ws = WorkspaceSymbolTable::new();
    let _a = bind(&mut ws, "a.galaxy", "int x;\nvoid f() { int local; }");
    let count = ws.symbols().len();

    let b = bind(&mut ws, "a.galaxy", "int x;\nvoid f() { int local; }");
    assert_eq!(ws.symbols().len(), count);
    assert_eq!(ws.file_symbols(ws.file_id("a.galaxy").unwrap()).len(), 2);
    let x = file_member(&ws, &b, "x").unwrap();
    assert_eq!(ws.get_symbol(x).unwrap().declarations.len(), 1);
    assert!(ws.is_consistent());
}

#[test]
fn test_unbinding_last_document_empties_workspace() {
    let mut ws = WorkspaceSymbolTable::new();
    let mut a = bind(&mut ws, "a.galaxy", "struct S { int a; };\nS s;\nvoid f(S p) { }");
    unbind_source_file(&mut ws, &mut a);
    assert!(ws.symbols().is_empty());
    assert!(ws.global_names().is_empty());
    assert!(!ws.is_bound(ws.file_id("a.galaxy").unwrap()));
}

const DOCUMENTS: &[&str] = &[
    "int x;",
    "int x = 1;",
    "static int x;",
    "void x() { }",
    "void f(int a) { int b; }",
    "void f();",
    "struct S { int a; };",
    "typedef int T;",
    "const fixed PI = 3.14;",
    "static void helper() { int x; }",
];

proptest! {
    #[test]
    fn rebinding_a_document_restores_global_names(
        docs in prop::collection::vec(prop::sample::select(DOCUMENTS), 1..6),
        pick in 0usize..6,
    ) {
        let mut ws = WorkspaceSymbolTable::new();
        let mut files: Vec<SourceFile> = docs
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let mut file = parse_file(&format!("doc{i}.galaxy"), text);
                bind_source_file(&mut ws, &mut file);
                file
            })
            .collect();
        let names = ws.global_names();
        prop_assert!(ws.is_consistent());

        let index = pick % files.len();
        unbind_source_file(&mut ws, &mut files[index]);
        prop_assert!(ws.is_consistent());
        bind_source_file(&mut ws, &mut files[index]);
        prop_assert!(ws.is_consistent());
        prop_assert_eq!(ws.global_names(), names);
    }

    #[test]
    fn unbinding_everything_frees_all_symbols(
        docs in prop::collection::vec(prop::sample::select(DOCUMENTS), 1..6),
    ) {
        let mut ws = WorkspaceSymbolTable::new();
        let mut files: Vec<SourceFile> = docs
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let mut file = parse_file(&format!("doc{i}.galaxy"), text);
                bind_source_file(&mut ws, &mut file);
                file
            })
            .collect();
        for file in &mut files {
            unbind_source_file(&mut ws, file);
        }
        prop_assert!(ws.symbols().is_empty());
        prop_assert!(ws.global_names().is_empty());
    }
}
