//! Checking documents that are edited, rebound and unbound.

use gx_binder::{WorkspaceSymbolTable, bind_source_file, unbind_source_file};
use gx_checker::{CheckerOptions, CheckerState, check_source_file};
use gx_common::diagnostics::diagnostic_codes;
use gx_parser::{SourceFile, parse_file};

fn open(workspace: &mut WorkspaceSymbolTable, name: &str, text: &str) -> SourceFile {
    let mut file = parse_file(name, text);
    bind_source_file(workspace, &mut file);
    file
}

fn codes(workspace: &WorkspaceSymbolTable, documents: &[&SourceFile], file: &SourceFile) -> Vec<u32> {
    check_source_file(
        workspace,
        documents.iter().copied(),
        file,
        CheckerOptions::default(),
    )
    .iter()
    .map(|diag| diag.code)
    .collect()
}

#[test]
fn test_removing_a_declaration_surfaces_unresolved_names() {
    let mut workspace = WorkspaceSymbolTable::new();
    let mut lib = open(&mut workspace, "lib.galaxy", "int counter;\nvoid bump() { counter += 1; }");
    let main = open(&mut workspace, "main.galaxy", "void main() { bump(); counter = 0; }");
    assert!(codes(&workspace, &[&lib, &main], &main).is_empty());

    unbind_source_file(&mut workspace, &mut lib);
    assert_eq!(
        codes(&workspace, &[&main], &main),
        vec![diagnostic_codes::CANNOT_FIND_NAME, diagnostic_codes::CANNOT_FIND_NAME]
    );

    bind_source_file(&mut workspace, &mut lib);
    assert!(codes(&workspace, &[&lib, &main], &main).is_empty());
}

#[test]
fn test_edited_signature_changes_call_diagnostics() {
    let mut workspace = WorkspaceSymbolTable::new();
    let lib = open(&mut workspace, "lib.galaxy", "int add(int a, int b) { return a + b; }");
    let main = open(&mut workspace, "main.galaxy", "void main() { int r = add(1, 2); }");
    assert!(codes(&workspace, &[&lib, &main], &main).is_empty());

    let lib = open(&mut workspace, "lib.galaxy", "int add(int a) { return a; }");
    assert_eq!(
        codes(&workspace, &[&lib, &main], &main),
        vec![diagnostic_codes::ARGUMENT_COUNT_MISMATCH]
    );
}

#[test]
fn test_checking_twice_gives_the_same_result() {
    let mut workspace = WorkspaceSymbolTable::new();
    let file = open(
        &mut workspace,
        "a.galaxy",
        "struct S { int a; };\nvoid main() { S s; s.b = \"x\"; if (1) { } break; }",
    );
    let mut checker = CheckerState::new(&workspace, [&file], &file, CheckerOptions::default());
    let first = checker.check_source_file();
    let second = checker.check_source_file();
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|d| d.code).collect::<Vec<_>>(),
        vec![
            diagnostic_codes::UNDECLARED_PROPERTY,
            diagnostic_codes::CONDITION_NOT_BOOLEAN,
            diagnostic_codes::BREAK_OUTSIDE_LOOP,
        ]
    );
}

#[test]
fn test_diagnostics_carry_file_and_position() {
    let mut workspace = WorkspaceSymbolTable::new();
    let text = "void main() {\n    int x = true;\n}";
    let file = open(&mut workspace, "pos.galaxy", text);
    let diagnostics = check_source_file(&workspace, [&file], &file, CheckerOptions::default());
    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics[0];
    assert_eq!(diag.file, "pos.galaxy");
    assert_eq!(diag.message_text, "Type 'bool' is not assignable to type 'int'.");
    assert_eq!((diag.line, diag.col), (1, 12));
    assert!(diag.is_error());
}

#[test]
fn test_nesting_past_the_parser_limit_still_binds_and_checks() {
    let depth = 700;
    let source = format!(
        "void main() {{ {}{} }}\nint x = {}1{};",
        "if (true) { ".repeat(depth),
        "} ".repeat(depth),
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(move || {
            let mut workspace = WorkspaceSymbolTable::new();
            let file = open(&mut workspace, "deep.galaxy", &source);
            let parse_codes: Vec<u32> = file.parse_diagnostics.iter().map(|d| d.code).collect();
            let check = check_source_file(&workspace, [&file], &file, CheckerOptions::default());
            let text_len = file.text.len() as u32;
            (parse_codes, check.iter().all(|d| d.start + d.length <= text_len))
        })
        .unwrap();
    let (parse_codes, spans_in_text) = handle.join().unwrap();
    assert!(parse_codes.contains(&diagnostic_codes::MAXIMUM_NESTING_DEPTH_EXCEEDED));
    assert!(spans_in_text);
}
