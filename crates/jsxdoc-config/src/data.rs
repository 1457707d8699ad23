//! Location of the catalog and documentation data files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    "data".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Directory holding `catalog.json` and the `props.*`/`components.*` tables.
    #[serde(default = "default_dir")]
    pub dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

impl DataConfig {
    /// Data directory, resolved against `base` when relative.
    #[must_use]
    pub fn dir_in(&self, base: &Path) -> PathBuf {
        let dir = PathBuf::from(&self.dir);
        if dir.is_absolute() { dir } else { base.join(dir) }
    }

    #[must_use]
    pub fn catalog_path_in(&self, base: &Path) -> PathBuf {
        self.dir_in(base).join("catalog.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_dir_resolves_against_base() {
        let config = DataConfig::default();
        assert_eq!(
            config.catalog_path_in(Path::new("/proj")),
            PathBuf::from("/proj/data/catalog.json")
        );
    }

    #[test]
    fn absolute_dir_is_kept() {
        let config = DataConfig {
            dir: "/opt/jsxdoc".into(),
        };
        assert_eq!(config.dir_in(Path::new("/proj")), PathBuf::from("/opt/jsxdoc"));
    }
}
