//! Read-only syntax node capability used by the context walkers.
//!
//! Walkers only ever need to move between parent and children and ask a
//! handful of questions about a node, so the tree behind them is pluggable:
//! [`TsxTree`] wraps an ast-grep parse, [`OwnedTree`] is a plain arena that
//! external parsers (or tests) can fill in directly.

mod owned;
mod tsx;

pub use owned::{OwnedNode, OwnedTree, OwnedTreeBuilder};
pub use tsx::{TsxNode, TsxTree};

use jsxdoc_core::{Position, Span};

/// The node categories the walkers distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A JSX element, with or without children (`<A>..</A>`, `<A />`).
    JsxElement,
    /// A class declaration or class expression.
    ClassDeclaration,
    Other,
}

/// A node in a read-only syntax tree.
///
/// Handles are cheap to clone and borrow from their tree.
pub trait SyntaxNode: Clone {
    fn parent(&self) -> Option<Self>;

    /// Direct children in source order.
    fn children(&self) -> Vec<Self>;

    fn kind(&self) -> NodeKind;

    /// Tag name text of a JSX element (`Table.Column`), `None` otherwise or
    /// for fragments.
    fn tag_name(&self) -> Option<String>;

    /// Declared name of a class, `None` for anonymous class expressions.
    fn class_name(&self) -> Option<String>;

    /// Source text of a class's superclass expression.
    fn superclass(&self) -> Option<String>;

    fn span(&self) -> Span;
}

/// A parsed document snapshot.
pub trait SyntaxTree {
    type Node<'a>: SyntaxNode
    where
        Self: 'a;

    fn root(&self) -> Self::Node<'_>;

    /// The innermost node whose span contains `position`.
    ///
    /// Falls back to the root when no node does (e.g. trailing whitespace).
    fn node_at(&self, position: Position) -> Self::Node<'_> {
        descend(self.root(), position)
    }
}

/// Walk down from `node` while some child contains `position`.
///
/// A child whose range strictly contains the position wins; otherwise a
/// child ending exactly at it, so a cursor placed right after a token
/// still lands on that token.
fn descend<N: SyntaxNode>(node: N, position: Position) -> N {
    let mut current = node;
    loop {
        let children = current.children();
        let strict = children.iter().find(|child| {
            let span = child.span();
            span.start <= position && position < span.end
        });
        let next = strict.or_else(|| {
            children
                .iter()
                .rev()
                .find(|child| child.span().end == position && child.span().start < position)
        });
        match next {
            Some(child) => current = child.clone(),
            None => return current,
        }
    }
}
