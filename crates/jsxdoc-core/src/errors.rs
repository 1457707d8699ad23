//! Cross-cutting error types for jsxdoc.
//!
//! Absence (no catalog entry, no enclosing JSX, no handler list) is never an
//! error anywhere in jsxdoc; it is an `Option` or an empty `Vec`. The types
//! here cover data that could not be loaded and data that contradicts itself.

use std::path::PathBuf;

use thiserror::Error;

use crate::enums::DisplayLanguage;

/// Errors raised while loading or building the catalog and documentation tables.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A data file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid JSON for its kind.
    #[error("Failed to decode {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two catalog names collapse to the same normalized form.
    #[error("Catalog names '{first}' and '{second}' both normalize to '{normalized}'")]
    DuplicateKey {
        first: String,
        second: String,
        normalized: String,
    },

    /// A catalog entry has an empty (or dot-only) name.
    #[error("Catalog entry #{index} has an empty name")]
    EmptyName { index: usize },
}

/// A catalog entry exists but its documentation record does not.
///
/// This is a data-authoring bug, so it fails the request instead of being
/// reported as "nothing to show".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("No {language} documentation for prop '{prop}' of catalog component '{component}'")]
    MissingPropDoc {
        component: String,
        prop: String,
        language: DisplayLanguage,
    },

    #[error("No {language} documentation for catalog component '{component}'")]
    MissingComponentDoc {
        component: String,
        language: DisplayLanguage,
    },
}
