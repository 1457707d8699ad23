//! # jsxdoc-ide
//!
//! Completion and hover resolution for UI-library components used in JSX.
//!
//! Both resolutions are pure functions of a document snapshot, a cursor
//! position and a [`ResolveContext`] (settings, catalog, documentation
//! tables). Hover additionally consults the host's
//! [`DefinitionService`]; completion needs nothing external.
//!
//! Every resolution takes a [`CancellationToken`](tokio_util::sync::CancellationToken)
//! that is checked once, on entry.

pub mod completion;
pub mod context;
pub mod document;
pub mod folder;
pub mod hover;
pub mod services;

pub use completion::{
    CompletionItem, CompletionRequest, PostInsertCommand, insert_text, provide_completions,
};
pub use context::{ResolveContext, ResolveSettings};
pub use document::Document;
pub use folder::{component_folder, pascal_case};
pub use hover::{Hover, HoverRequest, provide_hover};
pub use services::{DefinitionService, StaticLookups};
