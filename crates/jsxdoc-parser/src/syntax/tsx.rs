use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;
use jsxdoc_core::{Position, Span};

use super::{NodeKind, SyntaxNode, SyntaxTree, descend};
use crate::error::ParserError;
use crate::line_index::LineIndex;
use crate::parser::{AstTree, parse_source, require_language};

/// An ast-grep parse of a JSX-capable document.
pub struct TsxTree {
    ast: AstTree,
    index: LineIndex,
    lang: SupportLang,
}

impl std::fmt::Debug for TsxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TsxTree")
            .field("lang", &self.lang)
            .field("lines", &self.index.line_count())
            .finish_non_exhaustive()
    }
}

impl TsxTree {
    #[must_use]
    pub fn parse(source: &str, lang: SupportLang) -> Self {
        Self {
            ast: parse_source(source, lang),
            index: LineIndex::new(source),
            lang,
        }
    }

    /// Parse `source`, picking the grammar from `path`'s extension.
    ///
    /// # Errors
    /// Returns [`ParserError::UnsupportedLanguage`] for non-JSX extensions.
    pub fn parse_path(path: &str, source: &str) -> Result<Self, ParserError> {
        let lang = require_language(path)?;
        tracing::debug!(path, ?lang, "parsing document");
        Ok(Self::parse(source, lang))
    }

    #[must_use]
    pub const fn language(&self) -> SupportLang {
        self.lang
    }

    #[must_use]
    pub fn source(&self) -> &str {
        self.index.text()
    }

    /// Byte offset of `position`.
    ///
    /// # Errors
    /// Returns [`ParserError::PositionOutOfRange`] past the last line.
    pub fn offset(&self, position: Position) -> Result<usize, ParserError> {
        self.index
            .offset(position)
            .ok_or(ParserError::PositionOutOfRange {
                line: position.line,
                column: position.column,
            })
    }
}

impl SyntaxTree for TsxTree {
    type Node<'a> = TsxNode<'a>;

    fn root(&self) -> TsxNode<'_> {
        TsxNode {
            node: self.ast.root(),
            index: &self.index,
            cursor: None,
        }
    }

    /// Like the default, but the returned node (and every node reached from
    /// it) remembers the cursor so error recovery can look behind it.
    fn node_at(&self, position: Position) -> TsxNode<'_> {
        let mut node = descend(self.root(), position);
        node.cursor = self.index.offset(position);
        node
    }
}

/// A node handle into a [`TsxTree`].
#[derive(Clone)]
pub struct TsxNode<'t> {
    node: Node<'t, StrDoc<SupportLang>>,
    index: &'t LineIndex,
    /// Byte offset of the cursor this node was reached from, if any.
    cursor: Option<usize>,
}

impl std::fmt::Debug for TsxNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TsxNode")
            .field("kind", &self.node.kind())
            .field("span", &self.span())
            .finish()
    }
}

impl<'t> TsxNode<'t> {
    const fn wrap(&self, node: Node<'t, StrDoc<SupportLang>>) -> Self {
        Self {
            node,
            index: self.index,
            cursor: self.cursor,
        }
    }

    /// Raw grammar kind, e.g. `jsx_opening_element`.
    #[must_use]
    pub fn grammar_kind(&self) -> String {
        self.node.kind().to_string()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.node.text().to_string()
    }

    /// Tag name of a half-typed tag inside an ERROR node.
    ///
    /// Recovery often flattens the tag into a larger ERROR node
    /// (`const a = <Button #`), so this scans the node's tokens for the last
    /// `<` directly followed by a tag name that starts before the cursor.
    fn unterminated_tag_name(&self) -> Option<String> {
        let mut tokens = Vec::new();
        collect_tag_tokens(&self.node, &mut tokens);
        tokens.windows(2).rev().find_map(|pair| {
            let [open, name] = pair else {
                return None;
            };
            let before_cursor = self
                .cursor
                .is_none_or(|cursor| name.range().start < cursor);
            (open.kind().as_ref() == "<" && is_tag_name_kind(&name.kind()) && before_cursor)
                .then(|| name.text().to_string())
        })
    }
}

/// Leaves of `node` in source order. Tag names and complete JSX elements
/// count as single tokens.
fn collect_tag_tokens<'t>(
    node: &Node<'t, StrDoc<SupportLang>>,
    tokens: &mut Vec<Node<'t, StrDoc<SupportLang>>>,
) {
    for child in node.children() {
        let opaque = is_tag_name_kind(&child.kind())
            || matches!(
                child.kind().as_ref(),
                "jsx_element" | "jsx_self_closing_element"
            )
            || child.children().next().is_none();
        if opaque {
            tokens.push(child);
        } else {
            collect_tag_tokens(&child, tokens);
        }
    }
}

fn is_tag_name_kind(kind: &str) -> bool {
    matches!(
        kind,
        "identifier" | "member_expression" | "nested_identifier" | "jsx_namespace_name"
    )
}

impl SyntaxNode for TsxNode<'_> {
    fn parent(&self) -> Option<Self> {
        self.node.parent().map(|p| self.wrap(p))
    }

    fn children(&self) -> Vec<Self> {
        self.node.children().map(|c| self.wrap(c)).collect()
    }

    fn kind(&self) -> NodeKind {
        match self.node.kind().as_ref() {
            "jsx_element" | "jsx_self_closing_element" => NodeKind::JsxElement,
            // Half-typed tags (`<Button !`) recover as an orphaned opening
            // element or an ERROR node holding `<` and the tag name.
            "jsx_opening_element"
                if self
                    .node
                    .parent()
                    .is_none_or(|p| p.kind().as_ref() != "jsx_element") =>
            {
                NodeKind::JsxElement
            }
            "ERROR" if self.unterminated_tag_name().is_some() => NodeKind::JsxElement,
            // The `class` keyword token shares its kind with class
            // expressions; only the latter has a body.
            "class_declaration" | "abstract_class_declaration" | "class"
                if self.node.field("body").is_some() =>
            {
                NodeKind::ClassDeclaration
            }
            _ => NodeKind::Other,
        }
    }

    fn tag_name(&self) -> Option<String> {
        if self.kind() != NodeKind::JsxElement {
            return None;
        }
        let tag = match self.node.kind().as_ref() {
            "jsx_element" => self
                .node
                .children()
                .find(|c| c.kind().as_ref() == "jsx_opening_element")?,
            "ERROR" => return self.unterminated_tag_name(),
            _ => self.node.clone(),
        };
        tag.children()
            .find(|c| is_tag_name_kind(&c.kind()))
            .map(|name| name.text().to_string())
            .filter(|name| !name.is_empty())
    }

    fn class_name(&self) -> Option<String> {
        if self.kind() != NodeKind::ClassDeclaration {
            return None;
        }
        self.node.field("name").map(|n| n.text().to_string())
    }

    fn superclass(&self) -> Option<String> {
        if self.kind() != NodeKind::ClassDeclaration {
            return None;
        }
        let heritage = self
            .node
            .children()
            .find(|c| c.kind().as_ref() == "class_heritage")?;
        // TypeScript wraps the expression in an extends_clause; JavaScript
        // puts it straight under the heritage node.
        let extends_clause = heritage
            .children()
            .find(|c| c.kind().as_ref() == "extends_clause");
        let clause = extends_clause.unwrap_or(heritage);
        clause
            .children()
            .find(|c| !matches!(c.kind().as_ref(), "extends" | "type_arguments" | ","))
            .map(|expr| expr.text().to_string())
    }

    fn span(&self) -> Span {
        let range = self.node.range();
        Span::new(
            self.index.position(range.start),
            self.index.position(range.end),
        )
    }
}
