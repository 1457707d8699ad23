//! Loading and schema validation of the catalog and documentation data files.

use std::path::{Path, PathBuf};

use jsxdoc_core::schema::DataFileKind;
use jsxdoc_core::{Catalog, CatalogError, DisplayLanguage, DocTables};
use pretty_assertions::assert_eq;

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data")
}

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(schema: &serde_json::Value, instance: &serde_json::Value) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn read_json(name: &str) -> serde_json::Value {
    let text = std::fs::read_to_string(fixture_dir().join(name)).expect("fixture readable");
    serde_json::from_str(&text).expect("fixture is JSON")
}

#[test]
fn fixtures_match_their_schemas() {
    let cases = [
        (DataFileKind::Catalog, "catalog.json"),
        (DataFileKind::Props, "props.en-US.json"),
        (DataFileKind::Props, "props.zh-CN.json"),
        (DataFileKind::Components, "components.en-US.json"),
        (DataFileKind::Components, "components.zh-CN.json"),
    ];
    for (kind, file) in cases {
        let schema = kind.schema().expect("schema");
        let errors = validate_against_schema(&schema, &read_json(file));
        assert!(errors.is_empty(), "{file} vs {kind} schema: {errors:?}");
    }
}

#[test]
fn catalog_schema_rejects_missing_name() {
    let schema = DataFileKind::Catalog.schema().unwrap();
    let bad = serde_json::json!([{ "handlers": ["onClick"] }]);
    assert!(!validate_against_schema(&schema, &bad).is_empty());
}

#[test]
fn loads_fixture_catalog() {
    let catalog = Catalog::load(&fixture_dir().join("catalog.json")).expect("catalog loads");
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.match_exact("Table.Column"), Some("TableColumn"));
    assert_eq!(catalog.handlers("Divider"), None);
}

#[test]
fn fixture_english_tables_cover_the_catalog() {
    let catalog = Catalog::load(&fixture_dir().join("catalog.json")).unwrap();
    let docs = DocTables::load_dir(&fixture_dir()).expect("docs load");
    assert_eq!(docs.inconsistencies(&catalog, DisplayLanguage::EnUs), vec![]);
}

#[test]
fn fixture_chinese_tables_are_partial() {
    let catalog = Catalog::load(&fixture_dir().join("catalog.json")).unwrap();
    let docs = DocTables::load_dir(&fixture_dir()).unwrap();
    let problems = docs.inconsistencies(&catalog, DisplayLanguage::ZhCn);
    assert!(!problems.is_empty());
    assert!(
        docs.prop(DisplayLanguage::ZhCn, "Button", "onClick")
            .is_some_and(|doc| doc.description.contains("点击"))
    );
}

#[test]
fn missing_tables_are_empty_not_errors() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("components.en-US.json"), r#"{"Button": ["b"]}"#).unwrap();
    let docs = DocTables::load_dir(dir.path()).unwrap();
    assert!(docs.language(DisplayLanguage::ZhCn).is_none());
    let english = docs.language(DisplayLanguage::EnUs).expect("english loaded");
    assert!(english.props.is_empty());
    assert_eq!(english.components.len(), 1);
}

#[test]
fn malformed_table_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("props.en-US.json"), "[1, 2").unwrap();
    let err = DocTables::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Json { .. }), "{err}");
}

#[test]
fn missing_catalog_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load(&dir.path().join("catalog.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }), "{err}");
}
