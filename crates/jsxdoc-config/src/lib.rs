//! # jsxdoc-config
//!
//! Layered configuration loading for jsxdoc using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`JSXDOC_*` prefix, `__` as separator)
//! 2. Project-level `.jsxdoc/config.toml`
//! 3. User-level `~/.config/jsxdoc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `JSXDOC_GENERAL__LANGUAGE` -> `general.language`,
//! `JSXDOC_LIBRARY__PACKAGE` -> `library.package`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use jsxdoc_config::JsxdocConfig;
//!
//! let config = JsxdocConfig::load_with_dotenv().expect("config");
//! println!("docs in {}", config.general.display_language());
//! ```

mod data;
mod error;
mod general;
mod library;

pub use data::DataConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use library::LibraryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local configuration file, relative to the project root.
pub const PROJECT_CONFIG_FILE: &str = ".jsxdoc/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JsxdocConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub data: DataConfig,
}

impl JsxdocConfig {
    /// Load configuration for the current directory from all sources.
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source is malformed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration for the project rooted at `project_root`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source is malformed or a value is invalid.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        Self::extract(&Self::figment_for(project_root))
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source is malformed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env file is the common case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an already-built figment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn extract(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.library.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain for the current directory.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain for `project_root`.
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("JSXDOC_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("jsxdoc").join("config.toml"))
    }
}
