//! Offset <-> line/column conversion.
//!
//! Galaxy sources are byte-oriented, so columns are byte offsets within the
//! line rather than UTF-16 units.

use serde::{Deserialize, Serialize};

/// A position in a source file (0-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed byte column
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Line map for efficient offset <-> position conversion.
/// Stores the starting offset of each line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMap {
    /// Starting offset of each line (`line_starts[0]` is always 0)
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map from source text. Every `\n` starts a new line, so a
    /// CRLF pair counts once.
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        line_starts.extend(memchr::memchr_iter(b'\n', source.as_bytes()).map(|i| (i + 1) as u32));
        Self { line_starts }
    }

    /// Wrap line starts already collected by the scanner.
    pub fn from_line_starts(mut line_starts: Vec<u32>) -> Self {
        if line_starts.first() != Some(&0) {
            line_starts.insert(0, 0);
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a Position (line, character).
    pub fn offset_to_position(&self, offset: u32) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        Position {
            line: line as u32,
            character: offset.saturating_sub(line_start),
        }
    }

    /// Convert a Position (line, character) to a byte offset, clamped to the
    /// end of that line.
    pub fn position_to_offset(&self, position: Position, source_len: u32) -> Option<u32> {
        let line_idx = position.line as usize;
        let line_start = *self.line_starts.get(line_idx)?;
        let line_limit = self
            .line_starts
            .get(line_idx + 1)
            .copied()
            .unwrap_or(source_len);
        Some((line_start + position.character).min(line_limit))
    }

    /// Get the number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the starting offset of a line.
    pub fn line_start(&self, line: usize) -> Option<u32> {
        self.line_starts.get(line).copied()
    }

    pub fn line_starts(&self) -> &[u32] {
        &self.line_starts
    }
}
