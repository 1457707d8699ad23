//! Target UI library configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_package() -> String {
    "antd".to_string()
}

fn default_modules_dir() -> String {
    "node_modules".to_string()
}

fn default_doc_base_url() -> String {
    "https://ant.design/components".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Installed package name of the component library.
    #[serde(default = "default_package")]
    pub package: String,

    /// Directory packages are installed into.
    #[serde(default = "default_modules_dir")]
    pub modules_dir: String,

    /// Base URL of the component documentation pages.
    #[serde(default = "default_doc_base_url")]
    pub doc_base_url: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            modules_dir: default_modules_dir(),
            doc_base_url: default_doc_base_url(),
        }
    }
}

impl LibraryConfig {
    /// Relative install path of the library, e.g. `node_modules/antd`.
    /// Definitions outside it are foreign to jsxdoc.
    #[must_use]
    pub fn module_root(&self) -> PathBuf {
        PathBuf::from(&self.modules_dir).join(&self.package)
    }

    /// Reject values that would make every definition look foreign.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for an empty package or modules dir.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.package.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "library.package".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.modules_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "library.modules_dir".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = LibraryConfig::default();
        assert_eq!(config.package, "antd");
        assert_eq!(config.module_root(), PathBuf::from("node_modules/antd"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn scoped_package_root() {
        let config = LibraryConfig {
            package: "@nutui/nutui-react".into(),
            ..LibraryConfig::default()
        };
        assert_eq!(
            config.module_root(),
            PathBuf::from("node_modules/@nutui/nutui-react")
        );
    }

    #[test]
    fn empty_package_is_invalid() {
        let config = LibraryConfig {
            package: " ".into(),
            ..LibraryConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("library.package"), "{err}");
    }
}
