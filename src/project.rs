//! Document directory for a host (language server, build tool).
//!
//! A `Project` owns the shared `WorkspaceSymbolTable` and every open
//! `SourceFile`, keyed by file name in insertion order. Editing a document
//! replaces its `SourceFile` wholesale and rebinds it; checking runs on
//! demand per document.

use anyhow::{Context, Result};
use gx_binder::{WorkspaceSymbolTable, bind_source_file, unbind_source_file};
use gx_checker::{CheckerOptions, check_source_file};
use gx_common::Diagnostic;
use gx_parser::{NodeIndex, SourceFile, parse_file};
use gx_printer::Printer;
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

use crate::config::GxConfig;

#[derive(Debug, Default)]
pub struct Project {
    workspace: WorkspaceSymbolTable,
    files: IndexMap<String, SourceFile>,
    options: CheckerOptions,
}

impl Project {
    pub fn new(options: CheckerOptions) -> Self {
        Project {
            workspace: WorkspaceSymbolTable::new(),
            files: IndexMap::new(),
            options,
        }
    }

    pub fn from_config(config: &GxConfig) -> Self {
        Self::new(config.checker_options())
    }

    pub fn options(&self) -> CheckerOptions {
        self.options
    }

    pub fn workspace(&self) -> &WorkspaceSymbolTable {
        &self.workspace
    }

    /// Parse `text` and bind it in place of any previous version of `name`.
    #[tracing::instrument(level = "debug", skip(self, text), fields(len = text.len()))]
    pub fn set_file(&mut self, name: &str, text: &str) -> &SourceFile {
        if let Some(old) = self.files.get_mut(name) {
            unbind_source_file(&mut self.workspace, old);
        }
        let mut file = parse_file(name, text);
        bind_source_file(&mut self.workspace, &mut file);
        debug!(
            parse = file.parse_diagnostics.len(),
            bind = file.bind_diagnostics.len(),
            "document updated"
        );

        let (index, _) = self.files.insert_full(name.to_string(), file);
        &self.files[index]
    }

    /// Read a document from disk and add it under its path.
    pub fn open_file(&mut self, path: &Path) -> Result<&SourceFile> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read source file: {}", path.display()))?;
        let name = path.to_string_lossy().into_owned();
        Ok(self.set_file(&name, &text))
    }

    /// Unbind and forget a document. Returns false when it was not open.
    pub fn remove_file(&mut self, name: &str) -> bool {
        match self.files.shift_remove(name) {
            Some(mut file) => {
                unbind_source_file(&mut self.workspace, &mut file);
                debug!(file = name, "document removed");
                true
            }
            None => false,
        }
    }

    pub fn get_file(&self, name: &str) -> Option<&SourceFile> {
        self.files.get(name)
    }

    /// Open documents in the order they were first added.
    pub fn source_files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.values()
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Run the checker over one document and store its check diagnostics.
    pub fn check_file(&mut self, name: &str) -> Option<&[Diagnostic]> {
        let diagnostics = {
            let file = self.files.get(name)?;
            check_source_file(&self.workspace, self.files.values(), file, self.options)
        };
        let file = self.files.get_mut(name)?;
        file.check_diagnostics = diagnostics;
        Some(&file.check_diagnostics)
    }

    /// Check every open document.
    pub fn check_all(&mut self) -> usize {
        let names: Vec<String> = self.files.keys().cloned().collect();
        names
            .iter()
            .filter_map(|name| self.check_file(name).map(<[Diagnostic]>::len))
            .sum()
    }

    /// Parse, bind and check diagnostics of one document. Check diagnostics
    /// come from the last `check_file` call.
    pub fn get_diagnostics(&self, name: &str) -> Vec<Diagnostic> {
        self.files
            .get(name)
            .map(|file| file.all_diagnostics().cloned().collect())
            .unwrap_or_default()
    }

    /// Source-like text for one node, for hovers and messages.
    pub fn node_snippet(&self, name: &str, node: NodeIndex) -> Result<String> {
        let file = self
            .files
            .get(name)
            .with_context(|| format!("document is not open: {name}"))?;
        let snippet = Printer::for_source_file(file)
            .print_node(node)
            .with_context(|| format!("failed to print node in {name}"))?;
        Ok(snippet)
    }
}
