//! Shared helpers for checker unit tests.

use crate::{CheckerOptions, CheckerState};
use gx_binder::{WorkspaceSymbolTable, bind_source_file};
use gx_common::Diagnostic;
use gx_parser::{SourceFile, parse_file};

/// Parse and bind `(name, text)` documents in order.
pub(crate) fn bind_documents(docs: &[(&str, &str)]) -> (WorkspaceSymbolTable, Vec<SourceFile>) {
    let mut workspace = WorkspaceSymbolTable::new();
    let files = docs
        .iter()
        .map(|(name, text)| {
            let mut file = parse_file(name, text);
            assert!(
                file.parse_diagnostics.is_empty(),
                "{name}: {:?}",
                file.parse_diagnostics
            );
            bind_source_file(&mut workspace, &mut file);
            file
        })
        .collect();
    (workspace, files)
}

/// Check the last of `docs` with `options`.
pub(crate) fn check_documents_with(docs: &[(&str, &str)], options: CheckerOptions) -> Vec<Diagnostic> {
    let (workspace, files) = bind_documents(docs);
    let Some(target) = files.last() else {
        return Vec::new();
    };
    CheckerState::new(&workspace, files.iter(), target, options).check_source_file()
}

pub(crate) fn check_text(text: &str) -> Vec<Diagnostic> {
    check_documents_with(&[("test.galaxy", text)], CheckerOptions::default())
}

pub(crate) fn check_text_with(text: &str, options: CheckerOptions) -> Vec<Diagnostic> {
    check_documents_with(&[("test.galaxy", text)], options)
}

pub(crate) fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics
        .iter()
        .map(|diag| diag.message_text.as_str())
        .collect()
}

/// Source text a diagnostic covers.
pub(crate) fn covered<'t>(text: &'t str, diagnostic: &Diagnostic) -> &'t str {
    &text[diagnostic.start as usize..(diagnostic.start + diagnostic.length) as usize]
}
