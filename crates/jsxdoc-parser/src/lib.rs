//! # jsxdoc-parser
//!
//! Syntax trees for JSX-capable documents and the walks that find a
//! cursor's context in them.
//!
//! - [`TsxTree`] parses TSX/JSX through ast-grep; [`OwnedTree`] accepts a
//!   tree built elsewhere. Both implement [`SyntaxTree`].
//! - [`find_enclosing_jsx_component`] returns the innermost catalog
//!   component around a position.
//! - [`find_enclosing_class`] with [`extends_component`] returns the class
//!   component around a position.

pub mod error;
pub mod line_index;
pub mod parser;
pub mod syntax;
pub mod walker;

pub use error::ParserError;
pub use line_index::LineIndex;
pub use parser::{detect_language, parse_source, require_language};
pub use syntax::{
    NodeKind, OwnedNode, OwnedTree, OwnedTreeBuilder, SyntaxNode, SyntaxTree, TsxNode, TsxTree,
};
pub use walker::{
    COMPONENT_BASE, Direction, EnclosingClass, extends_component, find_enclosing_class,
    find_enclosing_jsx_component, superclass_matches, walk,
};
