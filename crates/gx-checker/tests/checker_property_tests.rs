//! Checking never panics, whatever the parser recovered from.

use gx_binder::{WorkspaceSymbolTable, bind_source_file};
use gx_checker::{CheckerOptions, check_source_file};
use gx_parser::parse_file;
use proptest::prelude::*;

const FRAGMENTS: &[&str] = &[
    "int", "fixed", "string", "bool", "void", "unit", "funcref<f>", "S", "x", "f", "s", "a",
    "struct S { int a; };", "typedef int T;", "const", "static", "native", "(", ")", "{", "}",
    "[", "]", ";", ",", ".", "=", "+=", "+", "-", "*", "==", "&&", "!", "++", "1", "2.5",
    "\"t\"", "null", "true", "if", "else", "while", "for", "do", "return", "break", "continue",
    "void f(int a) { return; }", "int x = 1;",
];

proptest! {
    #[test]
    fn checking_arbitrary_fragments_is_total(
        fragments in prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40),
        strict in any::<bool>(),
    ) {
        let text = fragments.join(" ");
        let mut workspace = WorkspaceSymbolTable::new();
        let mut file = parse_file("fuzz.galaxy", &text);
        bind_source_file(&mut workspace, &mut file);

        let options = CheckerOptions {
            strict_conditions: strict,
            ..CheckerOptions::default()
        };
        let diagnostics = check_source_file(&workspace, [&file], &file, options);
        for diag in &diagnostics {
            prop_assert!(diag.start as usize <= text.len());
            prop_assert!((diag.start + diag.length) as usize <= text.len());
        }
    }
}
