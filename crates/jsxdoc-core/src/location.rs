//! Cursor positions, spans, and resolved definition locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A zero-based (line, column) position in a document snapshot.
///
/// Columns count Unicode scalar values from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A range of positions. Containment treats the end as inclusive; see
/// [`Span::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Whether `position` lies in the span. The end is inclusive so that a
    /// cursor placed right after the last character still counts.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// The one-character span ending at `position`, if there is one on the line.
    #[must_use]
    pub const fn char_before(position: Position) -> Option<Self> {
        if position.column == 0 {
            return None;
        }
        Some(Self {
            start: Position::new(position.line, position.column - 1),
            end: position,
        })
    }
}

/// A definition site returned by an external lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub path: PathBuf,
    pub position: Position,
}

impl Location {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, position: Position) -> Self {
        Self {
            path: path.into(),
            position,
        }
    }

    /// Whether the location's file lives under `root`, compared by path components.
    #[must_use]
    pub fn is_under(&self, root: &Path) -> bool {
        let root_components: Vec<_> = root.components().collect();
        if root_components.is_empty() {
            return false;
        }
        let own: Vec<_> = self.path.components().collect();
        own.windows(root_components.len())
            .any(|window| window == root_components.as_slice())
    }
}
