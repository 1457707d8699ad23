use jsxdoc_core::Position;
use jsxdoc_ide::ResolveContext;
use jsxdoc_parser::{
    COMPONENT_BASE, Direction, EnclosingClass, TsxNode, TsxTree, extends_component,
    find_enclosing_class, find_enclosing_jsx_component,
};
use serde::Serialize;

use crate::bootstrap::read_document;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::LocateArgs;
use crate::output::output;

/// What surrounds a cursor: the catalog component and the class component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocateResponse {
    pub component: Option<String>,
    pub handlers: Vec<String>,
    pub class: Option<EnclosingClass>,
}

impl LocateResponse {
    fn to_text(&self) -> String {
        let mut lines = vec![format!(
            "component: {}",
            self.component.as_deref().unwrap_or("-")
        )];
        if !self.handlers.is_empty() {
            lines.push(format!("handlers: {}", self.handlers.join(", ")));
        }
        let class = self.class.as_ref().map_or_else(
            || "-".to_string(),
            |class| {
                format!(
                    "{} extends {}",
                    class.name.as_deref().unwrap_or("(anonymous)"),
                    class.superclass.as_deref().unwrap_or("?")
                )
            },
        );
        lines.push(format!("class: {class}"));
        lines.join("\n")
    }
}

/// Handle `jsxdoc locate`.
pub fn handle(args: &LocateArgs, context: &ResolveContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = read_document(&args.cursor.file)?;
    let position = args.cursor.position();
    document.tree.offset(position)?;

    let response = locate(context, &document.tree, position);
    output(&response, flags.format, LocateResponse::to_text)
}

fn locate(context: &ResolveContext, tree: &TsxTree, position: Position) -> LocateResponse {
    let component = find_enclosing_jsx_component(tree, position, &context.catalog);
    let handlers = component
        .and_then(|key| context.catalog.handlers(key))
        .map(<[String]>::to_vec)
        .unwrap_or_default();
    let class = find_enclosing_class(
        tree,
        position,
        extends_component::<TsxNode<'_>>(COMPONENT_BASE),
        Direction::Outward,
    )
    .map(|node| EnclosingClass::from_node(&node));

    LocateResponse {
        component: component.map(str::to_string),
        handlers,
        class,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ast_grep_language::SupportLang;
    use jsxdoc_core::{Catalog, CatalogEntry, DocTables, Position};
    use jsxdoc_ide::{ResolveContext, ResolveSettings};
    use jsxdoc_parser::TsxTree;
    use pretty_assertions::assert_eq;

    use super::locate;

    const SOURCE: &str = "class Page extends React.Component {\n  render() {\n    return <Button onClick={go} />;\n  }\n}\n";

    fn context() -> ResolveContext {
        let catalog = Catalog::new(vec![CatalogEntry::new("Button", ["onClick", "onFocus"])])
            .expect("catalog builds");
        let settings = ResolveSettings {
            language: jsxdoc_core::DisplayLanguage::EnUs,
            module_root: PathBuf::from("node_modules/antd"),
            doc_base_url: "https://ant.design/components".to_string(),
        };
        ResolveContext::new(settings, catalog, DocTables::new())
    }

    #[test]
    fn reports_component_handlers_and_class() {
        let tree = TsxTree::parse(SOURCE, SupportLang::Tsx);
        let response = locate(&context(), &tree, Position::new(2, 20));

        assert_eq!(response.component.as_deref(), Some("Button"));
        assert_eq!(response.handlers, vec!["onClick", "onFocus"]);
        let class = response.class.expect("class component");
        assert_eq!(class.name.as_deref(), Some("Page"));
        assert_eq!(class.superclass.as_deref(), Some("React.Component"));
        assert_eq!(
            response_text(&tree),
            "component: Button\nhandlers: onClick, onFocus\nclass: Page extends React.Component"
        );
    }

    #[test]
    fn outside_jsx_reports_only_the_class() {
        let tree = TsxTree::parse(SOURCE, SupportLang::Tsx);
        let response = locate(&context(), &tree, Position::new(1, 4));

        assert_eq!(response.component, None);
        assert!(response.handlers.is_empty());
        assert!(response.class.is_some());
    }

    fn response_text(tree: &TsxTree) -> String {
        locate(&context(), tree, Position::new(2, 20)).to_text()
    }
}
