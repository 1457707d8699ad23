use jsxdoc_core::Span;

use super::{NodeKind, SyntaxNode, SyntaxTree};

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    span: Span,
    parent: Option<usize>,
    children: Vec<usize>,
    tag_name: Option<String>,
    class_name: Option<String>,
    superclass: Option<String>,
}

impl NodeData {
    const fn new(kind: NodeKind, span: Span, parent: Option<usize>) -> Self {
        Self {
            kind,
            span,
            parent,
            children: Vec::new(),
            tag_name: None,
            class_name: None,
            superclass: None,
        }
    }
}

/// An arena-allocated syntax tree.
///
/// Lets a host that already owns a parse (a language server with its own
/// incremental parser, say) hand the walkers a tree without re-parsing. It
/// also describes documents tree-sitter would recover from differently,
/// such as a half-typed `<Button #`.
#[derive(Debug, Clone)]
pub struct OwnedTree {
    nodes: Vec<NodeData>,
}

impl OwnedTree {
    /// Start a tree whose root covers `span`.
    #[must_use]
    pub fn builder(span: Span) -> OwnedTreeBuilder {
        OwnedTreeBuilder {
            nodes: vec![NodeData::new(NodeKind::Other, span, None)],
            open: vec![0],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: usize) -> OwnedNode<'_> {
        OwnedNode { tree: self, id }
    }
}

impl SyntaxTree for OwnedTree {
    type Node<'a> = OwnedNode<'a>;

    fn root(&self) -> OwnedNode<'_> {
        self.node(0)
    }
}

/// Builds an [`OwnedTree`] in source order.
///
/// `open_*` calls nest under the innermost still-open node; `close` ends it.
#[derive(Debug)]
#[must_use]
pub struct OwnedTreeBuilder {
    nodes: Vec<NodeData>,
    open: Vec<usize>,
}

impl OwnedTreeBuilder {
    fn push(&mut self, data: NodeData) -> usize {
        let id = self.nodes.len();
        if let Some(parent) = data.parent {
            self.nodes[parent].children.push(id);
        }
        self.nodes.push(data);
        id
    }

    fn current(&self) -> usize {
        self.open.last().copied().unwrap_or(0)
    }

    /// Open a plain node.
    pub fn open(mut self, span: Span) -> Self {
        let id = self.push(NodeData::new(NodeKind::Other, span, Some(self.current())));
        self.open.push(id);
        self
    }

    /// Open a JSX element; `tag` is `None` for fragments.
    pub fn open_jsx(mut self, tag: Option<&str>, span: Span) -> Self {
        let mut data = NodeData::new(NodeKind::JsxElement, span, Some(self.current()));
        data.tag_name = tag.map(str::to_string);
        let id = self.push(data);
        self.open.push(id);
        self
    }

    /// Open a class declaration.
    pub fn open_class(mut self, name: Option<&str>, superclass: Option<&str>, span: Span) -> Self {
        let mut data = NodeData::new(NodeKind::ClassDeclaration, span, Some(self.current()));
        data.class_name = name.map(str::to_string);
        data.superclass = superclass.map(str::to_string);
        let id = self.push(data);
        self.open.push(id);
        self
    }

    /// Add a childless plain node.
    pub fn leaf(mut self, span: Span) -> Self {
        self.push(NodeData::new(NodeKind::Other, span, Some(self.current())));
        self
    }

    /// Close the innermost open node. The root is never closed.
    pub fn close(mut self) -> Self {
        if self.open.len() > 1 {
            self.open.pop();
        }
        self
    }

    /// Finish the tree, implicitly closing anything still open.
    #[must_use]
    pub fn build(self) -> OwnedTree {
        OwnedTree { nodes: self.nodes }
    }
}

/// A node handle into an [`OwnedTree`].
#[derive(Debug, Clone, Copy)]
pub struct OwnedNode<'t> {
    tree: &'t OwnedTree,
    id: usize,
}

impl OwnedNode<'_> {
    fn data(&self) -> &NodeData {
        &self.tree.nodes[self.id]
    }
}

impl PartialEq for OwnedNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for OwnedNode<'_> {}

impl SyntaxNode for OwnedNode<'_> {
    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| self.tree.node(id))
    }

    fn children(&self) -> Vec<Self> {
        self.data()
            .children
            .iter()
            .map(|&id| self.tree.node(id))
            .collect()
    }

    fn kind(&self) -> NodeKind {
        self.data().kind
    }

    fn tag_name(&self) -> Option<String> {
        self.data().tag_name.clone()
    }

    fn class_name(&self) -> Option<String> {
        self.data().class_name.clone()
    }

    fn superclass(&self) -> Option<String> {
        self.data().superclass.clone()
    }

    fn span(&self) -> Span {
        self.data().span
    }
}
