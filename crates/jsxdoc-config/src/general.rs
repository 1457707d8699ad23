//! General application configuration.

use jsxdoc_core::DisplayLanguage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Display language of hover and completion documentation (`en-US`, `zh-CN`).
    ///
    /// Kept as the raw configured string so that an unknown value degrades to
    /// the default language instead of failing the whole load.
    #[serde(default)]
    pub language: String,
}

impl GeneralConfig {
    /// The configured language, or the default one when unset or unrecognized.
    #[must_use]
    pub fn display_language(&self) -> DisplayLanguage {
        if self.language.trim().is_empty() {
            return DisplayLanguage::default();
        }
        DisplayLanguage::parse(&self.language).unwrap_or_else(|| {
            tracing::warn!(
                language = %self.language,
                fallback = %DisplayLanguage::default(),
                "unrecognized display language"
            );
            DisplayLanguage::default()
        })
    }
}
