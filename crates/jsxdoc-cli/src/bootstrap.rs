use std::path::{Path, PathBuf};

use anyhow::Context;
use jsxdoc_config::JsxdocConfig;
use jsxdoc_core::{Catalog, DocTables};
use jsxdoc_ide::{Document, ResolveContext, ResolveSettings};
use jsxdoc_parser::TsxTree;

/// Project root from `--project`, or the current directory.
pub fn project_root(project: Option<&str>) -> anyhow::Result<PathBuf> {
    match project {
        Some(project) => {
            let root = PathBuf::from(project);
            anyhow::ensure!(
                root.is_dir(),
                "project root {} is not a directory",
                root.display()
            );
            Ok(root)
        }
        None => std::env::current_dir().context("failed to determine current directory"),
    }
}

/// Load the project `.env` (if any), then the layered configuration.
pub fn load_config(project_root: &Path) -> anyhow::Result<JsxdocConfig> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    JsxdocConfig::load_from(project_root).map_err(anyhow::Error::from)
}

/// Load the catalog and documentation tables named by `config`.
pub fn load_context(project_root: &Path, config: &JsxdocConfig) -> anyhow::Result<ResolveContext> {
    let settings = ResolveSettings::from(config);
    let catalog_path = config.data.catalog_path_in(project_root);
    let catalog = Catalog::load(&catalog_path)
        .with_context(|| format!("failed to load component catalog {}", catalog_path.display()))?;

    let data_dir = config.data.dir_in(project_root);
    let docs = DocTables::load_dir(&data_dir).with_context(|| {
        format!(
            "failed to load documentation tables from {}",
            data_dir.display()
        )
    })?;
    if docs.language(settings.language).is_none() {
        tracing::warn!(
            language = %settings.language,
            dir = %data_dir.display(),
            "no documentation tables for the configured language"
        );
    }

    tracing::debug!(
        components = catalog.len(),
        language = %settings.language,
        module_root = %settings.module_root.display(),
        "resolve context ready"
    );
    Ok(ResolveContext::new(settings, catalog, docs))
}

/// Read and parse a document snapshot.
pub fn read_document(path: &Path) -> anyhow::Result<Document<TsxTree>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Document::parse(path, &source).with_context(|| format!("cannot parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use jsxdoc_core::DisplayLanguage;
    use pretty_assertions::assert_eq;

    use super::*;

    const CATALOG: &str = r#"[{"name": "Button", "handlers": ["onClick"]}]"#;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create dirs");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn loads_catalog_and_tables_from_data_dir() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write(tmp.path(), "data/catalog.json", CATALOG);
        write(
            tmp.path(),
            "data/props.en-US.json",
            r#"{"Button": {"onClick": {"description": "Click handler"}}}"#,
        );
        write(tmp.path(), "data/components.en-US.json", r#"{"Button": ["A button."]}"#);

        let config = JsxdocConfig::default();
        let context = load_context(tmp.path(), &config).expect("context loads");

        assert_eq!(context.catalog.handlers("Button"), Some(&["onClick".to_string()][..]));
        assert_eq!(
            context
                .docs
                .prop(DisplayLanguage::EnUs, "Button", "onClick")
                .map(|doc| doc.description.as_str()),
            Some("Click handler")
        );
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let err = load_context(tmp.path(), &JsxdocConfig::default()).expect_err("should fail");
        assert!(format!("{err:#}").contains("failed to load component catalog"));
    }

    #[test]
    fn missing_tables_are_tolerated() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write(tmp.path(), "data/catalog.json", CATALOG);

        let context = load_context(tmp.path(), &JsxdocConfig::default()).expect("context loads");
        assert!(context.docs.language(DisplayLanguage::EnUs).is_none());
    }

    #[test]
    fn project_root_must_be_a_directory() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let file = tmp.path().join("file.txt");
        std::fs::write(&file, "").expect("write file");

        assert!(project_root(file.to_str()).is_err());
        assert_eq!(
            project_root(tmp.path().to_str()).expect("dir is fine"),
            tmp.path()
        );
    }

    #[test]
    fn read_document_rejects_typescript_without_jsx() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write(tmp.path(), "util.ts", "export const a = 1;");

        let err = read_document(&tmp.path().join("util.ts")).expect_err("should fail");
        assert!(format!("{err:#}").contains("cannot parse"));
    }
}
