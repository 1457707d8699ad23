//! Documentation tables and documentation links.
//!
//! Each display language has two tables:
//! - props: `component -> prop -> PropDoc` (`props.<lang>.json`)
//! - components: `component -> [prose block, ...]` (`components.<lang>.json`)
//!
//! Lookups return `Option`; deciding whether absence is fine or a data bug is
//! left to the caller (see [`ResolveError`]).

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::enums::DisplayLanguage;
use crate::errors::{CatalogError, ResolveError};

/// Documentation of a single prop or event handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PropDoc {
    pub description: String,
    #[serde(rename = "type", default)]
    pub ty: String,
    #[serde(rename = "default", default)]
    pub default_value: String,
    /// Library version that introduced the prop.
    #[serde(default)]
    pub version: String,
}

/// `props.<lang>.json` contents.
pub type PropsTable = BTreeMap<String, BTreeMap<String, PropDoc>>;

/// `components.<lang>.json` contents.
pub type ComponentTable = BTreeMap<String, Vec<String>>;

/// Both tables for one display language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageDocs {
    pub props: PropsTable,
    pub components: ComponentTable,
}

/// Documentation tables for every loaded display language.
#[derive(Debug, Clone, Default)]
pub struct DocTables {
    languages: HashMap<DisplayLanguage, LanguageDocs>,
}

impl DocTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: DisplayLanguage, docs: LanguageDocs) {
        self.languages.insert(language, docs);
    }

    #[must_use]
    pub fn with_language(mut self, language: DisplayLanguage, docs: LanguageDocs) -> Self {
        self.insert(language, docs);
        self
    }

    /// Load `props.<lang>.json` and `components.<lang>.json` for every
    /// supported language from `dir`. Missing files leave that table empty.
    ///
    /// # Errors
    /// Returns [`CatalogError::Io`] for unreadable files and
    /// [`CatalogError::Json`] for malformed ones.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut tables = Self::new();
        for language in DisplayLanguage::ALL {
            let props: Option<PropsTable> =
                read_optional(&dir.join(format!("props.{language}.json")))?;
            let components: Option<ComponentTable> =
                read_optional(&dir.join(format!("components.{language}.json")))?;
            if props.is_none() && components.is_none() {
                tracing::debug!(%language, dir = %dir.display(), "no documentation tables");
                continue;
            }
            let docs = LanguageDocs {
                props: props.unwrap_or_default(),
                components: components.unwrap_or_default(),
            };
            tracing::info!(
                %language,
                props = docs.props.len(),
                components = docs.components.len(),
                "loaded documentation tables"
            );
            tables.insert(language, docs);
        }
        Ok(tables)
    }

    #[must_use]
    pub fn language(&self, language: DisplayLanguage) -> Option<&LanguageDocs> {
        self.languages.get(&language)
    }

    #[must_use]
    pub fn prop(&self, language: DisplayLanguage, component: &str, prop: &str) -> Option<&PropDoc> {
        self.language(language)?.props.get(component)?.get(prop)
    }

    #[must_use]
    pub fn component(&self, language: DisplayLanguage, component: &str) -> Option<&[String]> {
        self.language(language)?
            .components
            .get(component)
            .map(Vec::as_slice)
    }

    /// Cross-check the catalog against the tables of `language`: every
    /// component needs a component record and every handler a prop record.
    #[must_use]
    pub fn inconsistencies(&self, catalog: &Catalog, language: DisplayLanguage) -> Vec<ResolveError> {
        let mut problems = Vec::new();
        for entry in catalog.entries() {
            if self.component(language, &entry.name).is_none() {
                problems.push(ResolveError::MissingComponentDoc {
                    component: entry.name.clone(),
                    language,
                });
            }
            for handler in &entry.handlers {
                if self.prop(language, &entry.name, handler).is_none() {
                    problems.push(ResolveError::MissingPropDoc {
                        component: entry.name.clone(),
                        prop: handler.clone(),
                        language,
                    });
                }
            }
        }
        problems
    }
}

fn read_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, CatalogError> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(CatalogError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Link to a component's page on the documentation site.
///
/// `folder` is the component-folder name (`DatePicker`, `date-picker`); the
/// page slug is its kebab-case form plus the language suffix.
#[must_use]
pub fn compose_doc_link(base_url: &str, folder: &str, language: DisplayLanguage) -> String {
    format!(
        "{}/{}{}/",
        base_url.trim_end_matches('/'),
        kebab_case(folder),
        language.doc_link_suffix()
    )
}

/// `DatePicker` -> `date-picker`; already-kebab input is returned lowercased.
#[must_use]
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c == '_' || c == ' ' || c == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() {
            if prev_lower && !out.ends_with('-') {
                out.push('-');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    out
}
