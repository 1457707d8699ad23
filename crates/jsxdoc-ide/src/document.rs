use std::path::{Path, PathBuf};

use jsxdoc_parser::{ParserError, SyntaxTree, TsxTree};

/// A document snapshot: its path plus the tree parsed from its text.
#[derive(Debug)]
pub struct Document<T> {
    pub path: PathBuf,
    pub tree: T,
}

impl<T: SyntaxTree> Document<T> {
    pub fn new(path: impl Into<PathBuf>, tree: T) -> Self {
        Self {
            path: path.into(),
            tree,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Document<TsxTree> {
    /// Parse `source` with the grammar matching `path`'s extension.
    ///
    /// # Errors
    /// Returns [`ParserError::UnsupportedLanguage`] for non-JSX documents.
    pub fn parse(path: impl Into<PathBuf>, source: &str) -> Result<Self, ParserError> {
        let path = path.into();
        let tree = TsxTree::parse_path(&path.to_string_lossy(), source)?;
        Ok(Self { path, tree })
    }
}
