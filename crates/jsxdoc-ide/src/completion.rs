//! Handler completion inside a catalog component's JSX.

use std::path::PathBuf;

use jsxdoc_core::{InsertionKind, Position, Span};
use jsxdoc_parser::{
    COMPONENT_BASE, Direction, EnclosingClass, SyntaxTree, extends_component,
    find_enclosing_class, find_enclosing_jsx_component,
};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::context::ResolveContext;
use crate::document::Document;

#[derive(Debug)]
pub struct CompletionRequest<'d, T> {
    pub document: &'d Document<T>,
    pub position: Position,
    /// Character that triggered completion, if any.
    pub trigger: Option<char>,
}

/// Follow-up the host runs after a candidate is accepted.
///
/// The host's insertion mechanics own what happens next (e.g. asking
/// whether to generate a handler method for an inquiry insert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostInsertCommand {
    /// The trigger character to replace; `None` without a trigger.
    pub trigger_range: Option<Span>,
    pub document: PathBuf,
    pub handler: String,
    pub kind: InsertionKind,
    /// The class component around the cursor, if any.
    pub enclosing_class: Option<EnclosingClass>,
}

/// A completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    /// The handler name.
    pub label: String,
    /// Handler description in the configured language.
    pub documentation: Option<String>,
    pub insert_text: String,
    pub kind: InsertionKind,
    pub command: PostInsertCommand,
}

/// One candidate per handler of the catalog component around the cursor.
///
/// Empty when cancelled, outside any catalog component, or when the
/// component has no handlers.
pub fn provide_completions<T: SyntaxTree>(
    context: &ResolveContext,
    request: &CompletionRequest<'_, T>,
    cancel: &CancellationToken,
) -> Vec<CompletionItem> {
    if cancel.is_cancelled() {
        tracing::debug!("completion cancelled before start");
        return Vec::new();
    }

    let tree = &request.document.tree;
    let Some(component) =
        find_enclosing_jsx_component(tree, request.position, &context.catalog)
    else {
        return Vec::new();
    };
    let Some(handlers) = context.catalog.handlers(component) else {
        tracing::debug!(component, "catalog lists no handlers");
        return Vec::new();
    };

    let enclosing_class = find_enclosing_class(
        tree,
        request.position,
        extends_component::<T::Node<'_>>(COMPONENT_BASE),
        Direction::Outward,
    )
    .map(|node| EnclosingClass::from_node(&node));
    let kind = InsertionKind::from_trigger(request.trigger);
    let trigger_range = request
        .trigger
        .and_then(|_| Span::char_before(request.position));
    let language = context.settings.language;

    tracing::debug!(
        component,
        handlers = handlers.len(),
        %kind,
        in_class = enclosing_class.is_some(),
        "providing handler completions"
    );

    handlers
        .iter()
        .map(|handler| CompletionItem {
            label: handler.clone(),
            documentation: context
                .docs
                .prop(language, component, handler)
                .map(|doc| doc.description.clone()),
            insert_text: insert_text(handler, kind, enclosing_class.is_some()),
            kind,
            command: PostInsertCommand {
                trigger_range,
                document: request.document.path.clone(),
                handler: handler.clone(),
                kind,
                enclosing_class: enclosing_class.clone(),
            },
        })
        .collect()
}

/// Text inserted for `handler`.
///
/// Inquiry inserts the bare name. Direct inserts bind the handler, through
/// `this` inside a class component.
#[must_use]
pub fn insert_text(handler: &str, kind: InsertionKind, in_component_class: bool) -> String {
    match kind {
        InsertionKind::Inquiry => handler.to_string(),
        InsertionKind::Direct if in_component_class => format!("{handler}={{this.{handler}}}"),
        InsertionKind::Direct => format!("{handler}={{{handler}}}"),
    }
}
