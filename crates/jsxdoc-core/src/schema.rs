//! JSON Schemas for the on-disk data files, generated from the Rust types.

use std::fmt;

use schemars::schema_for;

use crate::catalog::CatalogEntry;
use crate::docs::{ComponentTable, PropsTable};

/// The three kinds of data file jsxdoc reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFileKind {
    /// `catalog.json`
    Catalog,
    /// `props.<lang>.json`
    Props,
    /// `components.<lang>.json`
    Components,
}

impl DataFileKind {
    pub const ALL: [Self; 3] = [Self::Catalog, Self::Props, Self::Components];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Props => "props",
            Self::Components => "components",
        }
    }

    /// JSON Schema describing files of this kind.
    ///
    /// # Errors
    /// Returns an error if the generated schema cannot be converted to JSON.
    pub fn schema(self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::Catalog => serde_json::to_value(schema_for!(Vec<CatalogEntry>)),
            Self::Props => serde_json::to_value(schema_for!(PropsTable)),
            Self::Components => serde_json::to_value(schema_for!(ComponentTable)),
        }
    }
}

impl fmt::Display for DataFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_produces_an_object_schema() {
        for kind in DataFileKind::ALL {
            let schema = kind.schema().expect("schema serializes");
            assert!(schema.is_object(), "{kind}: {schema}");
        }
    }
}
