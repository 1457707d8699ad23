//! The static component catalog and its name matcher.
//!
//! The catalog maps canonical component names (`Button`, `TableColumn`) to the
//! event-handler/prop names each component supports. It is built once and then
//! only read. Lookups compare names in [`normalize`]d form, so `Table.Column`,
//! `tablecolumn`, and `TableColumn` all find the same entry.
//!
//! Name resolution is three-tiered, first hit wins:
//!
//! 1. the symbol's own name,
//! 2. the name of the folder the symbol is defined in,
//! 3. folder name followed by symbol name (`Table` + `Column` -> `TableColumn`).

use std::collections::HashMap;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;
use crate::normalize::normalize;

/// One component in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogEntry {
    /// Canonical display name, also the join key into the documentation tables.
    pub name: String,
    /// Supported event-handler/prop names, in completion order.
    #[serde(default)]
    pub handlers: Vec<String>,
}

impl CatalogEntry {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, handlers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            handlers: handlers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered, immutable component catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_normalized: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting names that collide after normalization.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateKey`] for colliding names and
    /// [`CatalogError::EmptyName`] for names that normalize to nothing.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut by_normalized = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let key = normalize(&entry.name);
            if key.is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if let Some(&existing) = by_normalized.get(&key) {
                let first: &CatalogEntry = &entries[existing];
                return Err(CatalogError::DuplicateKey {
                    first: first.name.clone(),
                    second: entry.name.clone(),
                    normalized: key,
                });
            }
            by_normalized.insert(key, index);
        }
        Ok(Self {
            entries,
            by_normalized,
        })
    }

    /// Parse a catalog from the JSON array format of `catalog.json`.
    ///
    /// # Errors
    /// Returns [`CatalogError::Json`] on malformed input, or any error of [`Catalog::new`].
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).map_err(|source| CatalogError::Json {
                path: origin.to_path_buf(),
                source,
            })?;
        Self::new(entries)
    }

    /// Read and parse a `catalog.json` file.
    ///
    /// # Errors
    /// Returns [`CatalogError::Io`] if the file cannot be read, or any error of
    /// [`Catalog::from_json`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json, path)?;
        tracing::info!(path = %path.display(), components = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by its canonical key (exact spelling).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.by_normalized
            .get(&normalize(key))
            .map(|&index| &self.entries[index])
            .filter(|entry| entry.name == key)
    }

    /// Handler names of a component; `None` when the key is unknown or the
    /// component declares no handlers.
    #[must_use]
    pub fn handlers(&self, key: &str) -> Option<&[String]> {
        self.get(key)
            .map(|entry| entry.handlers.as_slice())
            .filter(|handlers| !handlers.is_empty())
    }

    /// Tier 1: the name itself, compared in normalized form.
    #[must_use]
    pub fn match_exact(&self, name: &str) -> Option<&str> {
        self.by_normalized
            .get(&normalize(name))
            .map(|&index| self.entries[index].name.as_str())
    }

    /// Tier 2: the containing folder's name.
    #[must_use]
    pub fn match_by_folder(&self, folder: &str) -> Option<&str> {
        self.match_exact(folder)
    }

    /// Tier 3: folder name immediately followed by the symbol name.
    #[must_use]
    pub fn match_fuzzy(&self, folder: &str, symbol: &str) -> Option<&str> {
        self.match_exact(&format!("{folder}{symbol}"))
    }

    /// Resolve a symbol defined in `folder` to a canonical key, trying the
    /// three tiers in order.
    #[must_use]
    pub fn resolve(&self, symbol: &str, folder: &str) -> Option<&str> {
        let resolved = self
            .match_exact(symbol)
            .or_else(|| self.match_by_folder(folder))
            .or_else(|| self.match_fuzzy(folder, symbol));
        tracing::debug!(symbol, folder, ?resolved, "catalog resolve");
        resolved
    }
}
