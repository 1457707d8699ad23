//! Hover documentation for catalog components and their props.

use std::fmt::Write as _;
use std::path::Path;

use jsxdoc_core::{
    Location, Position, PropDoc, ResolveError, SymbolClass, classify_with_hint, compose_doc_link,
};
use jsxdoc_parser::{SyntaxTree, find_enclosing_jsx_component};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::context::ResolveContext;
use crate::document::Document;
use crate::folder::component_folder;
use crate::services::DefinitionService;

#[derive(Debug)]
pub struct HoverRequest<'d, T> {
    pub document: &'d Document<T>,
    pub position: Position,
}

/// Resolved hover documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum Hover {
    Prop {
        component: String,
        prop: String,
        doc: PropDoc,
    },
    Component {
        component: String,
        /// Component folder of the definition, when one could be derived.
        folder: Option<String>,
        blocks: Vec<String>,
        link: String,
    },
}

impl Hover {
    #[must_use]
    pub fn component(&self) -> &str {
        match self {
            Self::Prop { component, .. } | Self::Component { component, .. } => component,
        }
    }

    /// Render as a markdown card.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Prop {
                component,
                prop,
                doc,
            } => {
                let _ = writeln!(out, "### {component}.{prop}");
                if !doc.description.is_empty() {
                    let _ = write!(out, "\n{}\n", doc.description);
                }
                let fields = [
                    ("Type", &doc.ty),
                    ("Default", &doc.default_value),
                    ("Since", &doc.version),
                ];
                let mut wrote_header = false;
                for (label, value) in fields {
                    if value.is_empty() {
                        continue;
                    }
                    if !wrote_header {
                        out.push('\n');
                        wrote_header = true;
                    }
                    let _ = writeln!(out, "- {label}: `{value}`");
                }
            }
            Self::Component {
                component,
                blocks,
                link,
                ..
            } => {
                let _ = writeln!(out, "### {component}");
                for block in blocks {
                    let _ = write!(out, "\n{block}\n");
                }
                let _ = write!(out, "\n[Documentation]({link})\n");
            }
        }
        out
    }
}

/// Documentation for the library symbol under the cursor.
///
/// `Ok(None)` covers every "nothing to show" case: cancellation, no
/// definition, a definition outside the library, a symbol the catalog does
/// not know. A catalog entry without its documentation record is a data
/// bug and comes back as [`ResolveError`].
///
/// # Errors
/// Returns [`ResolveError`] when the catalog and the documentation tables
/// disagree.
pub async fn provide_hover<T, S>(
    context: &ResolveContext,
    request: &HoverRequest<'_, T>,
    services: &S,
    cancel: &CancellationToken,
) -> Result<Option<Hover>, ResolveError>
where
    T: SyntaxTree,
    S: DefinitionService,
{
    if cancel.is_cancelled() {
        tracing::debug!("hover cancelled before start");
        return Ok(None);
    }

    let path = request.document.path();
    let (definitions, type_definitions) = tokio::join!(
        services.definitions(path, request.position),
        services.type_definitions(path, request.position),
    );

    let module_root = &context.settings.module_root;
    let Some(location) = preferred_location(type_definitions, definitions, module_root) else {
        return Ok(None);
    };

    let Some(symbol) = services.container_symbol_name(&location).await else {
        return Ok(None);
    };
    let hint = services.definition_kind(&location).await;
    let folder = component_folder(&location.path, module_root);
    let class = classify_with_hint(&symbol, hint);
    tracing::debug!(symbol, ?hint, %class, ?folder, "hover symbol");

    match class {
        SymbolClass::Props => prop_hover(context, request, &symbol),
        SymbolClass::Component => component_hover(context, &symbol, folder),
    }
}

/// Type definitions describe props interfaces more precisely, so they win
/// over plain definitions. Candidates outside `module_root` are foreign and
/// dropped; of the rest, extras are logged and the first is used.
fn preferred_location(
    type_definitions: Vec<Location>,
    definitions: Vec<Location>,
    module_root: &Path,
) -> Option<Location> {
    let (source, candidates) = if type_definitions.is_empty() {
        ("definition", definitions)
    } else {
        ("type definition", type_definitions)
    };
    let total = candidates.len();
    let in_library: Vec<Location> = candidates
        .into_iter()
        .filter(|location| location.is_under(module_root))
        .collect();
    if in_library.len() < total {
        tracing::debug!(
            source,
            foreign = total - in_library.len(),
            module_root = %module_root.display(),
            "dropped definitions outside the target library"
        );
    }
    if in_library.len() > 1 {
        tracing::warn!(
            source,
            count = in_library.len(),
            "multiple candidate locations, using the first"
        );
    }
    in_library.into_iter().next()
}

fn prop_hover<T: SyntaxTree>(
    context: &ResolveContext,
    request: &HoverRequest<'_, T>,
    prop: &str,
) -> Result<Option<Hover>, ResolveError> {
    // The walker already matched the tag against the catalog, normalized,
    // so this is the canonical key.
    let Some(component) =
        find_enclosing_jsx_component(&request.document.tree, request.position, &context.catalog)
    else {
        tracing::debug!(prop, "prop outside any catalog component");
        return Ok(None);
    };
    let language = context.settings.language;

    let doc = context
        .docs
        .prop(language, component, prop)
        .ok_or_else(|| ResolveError::MissingPropDoc {
            component: component.to_string(),
            prop: prop.to_string(),
            language,
        })?;

    Ok(Some(Hover::Prop {
        component: component.to_string(),
        prop: prop.to_string(),
        doc: doc.clone(),
    }))
}

fn component_hover(
    context: &ResolveContext,
    symbol: &str,
    folder: Option<String>,
) -> Result<Option<Hover>, ResolveError> {
    let Some(component) = context
        .catalog
        .resolve(symbol, folder.as_deref().unwrap_or_default())
    else {
        tracing::debug!(symbol, ?folder, "component not in catalog");
        return Ok(None);
    };
    let language = context.settings.language;

    let blocks = context
        .docs
        .component(language, component)
        .ok_or_else(|| ResolveError::MissingComponentDoc {
            component: component.to_string(),
            language,
        })?;

    let link = compose_doc_link(
        &context.settings.doc_base_url,
        folder.as_deref().unwrap_or(component),
        language,
    );

    Ok(Some(Hover::Component {
        component: component.to_string(),
        folder,
        blocks: blocks.to_vec(),
        link,
    }))
}
