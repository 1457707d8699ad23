//! Read-only inputs shared by every resolution.

use std::path::PathBuf;

use jsxdoc_config::JsxdocConfig;
use jsxdoc_core::{Catalog, DisplayLanguage, DocTables};

/// Per-process settings, passed explicitly into each resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveSettings {
    pub language: DisplayLanguage,
    /// Install path of the target library; definitions elsewhere are foreign.
    pub module_root: PathBuf,
    pub doc_base_url: String,
}

impl From<&JsxdocConfig> for ResolveSettings {
    fn from(config: &JsxdocConfig) -> Self {
        Self {
            language: config.general.display_language(),
            module_root: config.library.module_root(),
            doc_base_url: config.library.doc_base_url.clone(),
        }
    }
}

/// Settings plus the catalog and documentation tables, loaded once.
///
/// Nothing here changes after construction, so one context can serve any
/// number of concurrent resolutions.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    pub settings: ResolveSettings,
    pub catalog: Catalog,
    pub docs: DocTables,
}

impl ResolveContext {
    #[must_use]
    pub const fn new(settings: ResolveSettings, catalog: Catalog, docs: DocTables) -> Self {
        Self {
            settings,
            catalog,
            docs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn settings_from_default_config() {
        let settings = ResolveSettings::from(&JsxdocConfig::default());
        assert_eq!(settings.language, DisplayLanguage::EnUs);
        assert_eq!(settings.module_root, PathBuf::from("node_modules/antd"));
        assert_eq!(settings.doc_base_url, "https://ant.design/components");
    }
}
