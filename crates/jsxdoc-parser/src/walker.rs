//! Context walks from a cursor position.
//!
//! Two questions drive completion and hover: which catalog component the
//! cursor sits inside, and which class (if any) around it extends the
//! component base. Both are answered by walking from the node at the cursor;
//! the innermost match always wins.

use jsxdoc_core::{Catalog, Position, Span};
use serde::{Deserialize, Serialize};

use crate::syntax::{NodeKind, SyntaxNode, SyntaxTree};

/// Superclass name of class components.
pub const COMPONENT_BASE: &str = "Component";

/// Which way a walk moves from its start node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Start node, then each ancestor up to the root.
    #[default]
    Outward,
    /// Start node, then its descendants depth-first in source order.
    Inward,
}

/// Return the first node reached from `start` that satisfies `predicate`.
pub fn walk<N, P>(start: N, direction: Direction, mut predicate: P) -> Option<N>
where
    N: SyntaxNode,
    P: FnMut(&N) -> bool,
{
    match direction {
        Direction::Outward => {
            let mut current = Some(start);
            while let Some(node) = current {
                if predicate(&node) {
                    return Some(node);
                }
                current = node.parent();
            }
            None
        }
        Direction::Inward => {
            let mut stack = vec![start];
            while let Some(node) = stack.pop() {
                if predicate(&node) {
                    return Some(node);
                }
                stack.extend(node.children().into_iter().rev());
            }
            None
        }
    }
}

/// Canonical catalog key of the innermost JSX element around `position`
/// whose tag matches the catalog exactly.
///
/// Elements with unknown tags (`<div>`) are walked past.
pub fn find_enclosing_jsx_component<'c, T: SyntaxTree>(
    tree: &T,
    position: Position,
    catalog: &'c Catalog,
) -> Option<&'c str> {
    let mut found = None;
    walk(tree.node_at(position), Direction::Outward, |node| {
        if node.kind() != NodeKind::JsxElement {
            return false;
        }
        let Some(tag) = node.tag_name() else {
            return false;
        };
        found = catalog.match_exact(&tag);
        if found.is_none() {
            tracing::trace!(tag = %tag, "skipping element outside the catalog");
        }
        found.is_some()
    });
    tracing::debug!(
        line = position.line,
        column = position.column,
        component = ?found,
        "enclosing jsx component"
    );
    found
}

/// First node from `position` in `direction` that satisfies `predicate`.
pub fn find_enclosing_class<'t, T, P>(
    tree: &'t T,
    position: Position,
    predicate: P,
    direction: Direction,
) -> Option<T::Node<'t>>
where
    T: SyntaxTree,
    P: Fn(&T::Node<'t>) -> bool,
{
    walk(tree.node_at(position), direction, predicate)
}

/// Predicate accepting class declarations whose superclass is `base`.
///
/// See [`superclass_matches`] for what counts as `base`.
pub fn extends_component<N: SyntaxNode>(base: &str) -> impl Fn(&N) -> bool + '_ {
    move |node| {
        node.kind() == NodeKind::ClassDeclaration
            && node
                .superclass()
                .is_some_and(|superclass| superclass_matches(&superclass, base))
    }
}

/// Whether a superclass expression names `base`, either bare (`Component`),
/// qualified (`React.Component`), or instantiated (`Component<Props>`).
#[must_use]
pub fn superclass_matches(superclass: &str, base: &str) -> bool {
    if base.is_empty() {
        return false;
    }
    let head = superclass
        .split_once('<')
        .map_or(superclass, |(head, _)| head)
        .trim();
    head == base
        || head
            .strip_suffix(base)
            .is_some_and(|qualifier| qualifier.ends_with('.'))
}

/// Owned description of an enclosing class, detached from its tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosingClass {
    pub name: Option<String>,
    pub superclass: Option<String>,
    pub span: Span,
}

impl EnclosingClass {
    #[must_use]
    pub fn from_node<N: SyntaxNode>(node: &N) -> Self {
        Self {
            name: node.class_name(),
            superclass: node.superclass(),
            span: node.span(),
        }
    }
}

#[cfg(test)]
mod tests;
