use jsxdoc_core::DisplayLanguage;
use jsxdoc_ide::ResolveContext;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Consistency of one display language's tables with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageReport {
    pub language: DisplayLanguage,
    pub loaded: bool,
    pub problems: Vec<String>,
}

/// Handle `jsxdoc check`.
///
/// Fails when any loaded language is missing documentation the catalog
/// promises. Languages without tables are reported but not failed.
pub fn handle(context: &ResolveContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reports = check(context);
    output(&reports, flags.format, |reports| to_text(reports))?;

    let problems: usize = reports.iter().map(|report| report.problems.len()).sum();
    anyhow::ensure!(
        problems == 0,
        "{problems} catalog entries lack documentation"
    );
    Ok(())
}

fn check(context: &ResolveContext) -> Vec<LanguageReport> {
    DisplayLanguage::ALL
        .into_iter()
        .map(|language| {
            let loaded = context.docs.language(language).is_some();
            let problems = if loaded {
                context
                    .docs
                    .inconsistencies(&context.catalog, language)
                    .iter()
                    .map(ToString::to_string)
                    .collect()
            } else {
                Vec::new()
            };
            LanguageReport {
                language,
                loaded,
                problems,
            }
        })
        .collect()
}

fn to_text(reports: &[LanguageReport]) -> String {
    let mut lines = Vec::new();
    for report in reports {
        let status = if !report.loaded {
            "not loaded".to_string()
        } else if report.problems.is_empty() {
            "ok".to_string()
        } else {
            format!("{} problem(s)", report.problems.len())
        };
        lines.push(format!("{}: {status}", report.language));
        lines.extend(report.problems.iter().map(|problem| format!("  {problem}")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use jsxdoc_core::{
        Catalog, CatalogEntry, DisplayLanguage, DocTables, LanguageDocs, PropDoc,
    };
    use jsxdoc_ide::{ResolveContext, ResolveSettings};
    use pretty_assertions::assert_eq;

    use super::{check, to_text};

    fn context(docs: DocTables) -> ResolveContext {
        let catalog = Catalog::new(vec![CatalogEntry::new("Button", ["onClick"])])
            .expect("catalog builds");
        let settings = ResolveSettings {
            language: DisplayLanguage::EnUs,
            module_root: PathBuf::from("node_modules/antd"),
            doc_base_url: "https://ant.design/components".to_string(),
        };
        ResolveContext::new(settings, catalog, docs)
    }

    fn complete_docs() -> LanguageDocs {
        let mut props = BTreeMap::new();
        props.insert(
            "Button".to_string(),
            BTreeMap::from([(
                "onClick".to_string(),
                PropDoc {
                    description: "Click handler".to_string(),
                    ..PropDoc::default()
                },
            )]),
        );
        LanguageDocs {
            props,
            components: BTreeMap::from([("Button".to_string(), vec!["A button.".to_string()])]),
        }
    }

    #[test]
    fn consistent_tables_pass() {
        let docs = DocTables::new().with_language(DisplayLanguage::EnUs, complete_docs());
        let reports = check(&context(docs));

        assert_eq!(to_text(&reports), "en-US: ok\nzh-CN: not loaded");
    }

    #[test]
    fn missing_records_are_listed_per_language() {
        let docs = DocTables::new()
            .with_language(DisplayLanguage::EnUs, complete_docs())
            .with_language(DisplayLanguage::ZhCn, LanguageDocs::default());
        let reports = check(&context(docs));

        assert!(reports[0].problems.is_empty());
        assert_eq!(reports[1].problems.len(), 2);
        assert!(reports[1].problems[0].contains("catalog component 'Button'"));
        assert!(reports[1].problems[1].contains("prop 'onClick'"));
    }
}
