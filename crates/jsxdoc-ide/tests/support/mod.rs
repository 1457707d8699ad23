#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use jsxdoc_core::{
    Catalog, CatalogEntry, DefinitionKind, DisplayLanguage, DocTables, LanguageDocs, Location,
    Position, PropDoc,
};
use jsxdoc_ide::{DefinitionService, Document, ResolveContext, ResolveSettings};
use jsxdoc_parser::{LineIndex, TsxTree};
use tokio::sync::Barrier;

pub const ORDER_PAGE: &str = include_str!("../fixtures/OrderPage.tsx");

pub fn order_page() -> Document<TsxTree> {
    Document::parse("/proj/src/OrderPage.tsx", ORDER_PAGE).expect("tsx parses")
}

/// Position `delta` characters into the first occurrence of `needle`.
pub fn position_of(needle: &str, delta: u32) -> Position {
    let offset = ORDER_PAGE
        .find(needle)
        .unwrap_or_else(|| panic!("fixture should contain {needle:?}"));
    let start = LineIndex::new(ORDER_PAGE).position(offset);
    Position::new(start.line, start.column + delta)
}

pub fn catalog() -> Catalog {
    Catalog::new(vec![
        CatalogEntry::new("Button", ["onClick", "onFocus"]),
        CatalogEntry::new("DatePicker", ["onChange", "onOk"]),
        CatalogEntry::new("Divider", Vec::<String>::new()),
        CatalogEntry::new("FormItem", ["onReset"]),
        CatalogEntry::new("Table", ["onChange", "onRow"]),
        CatalogEntry::new("TableColumn", ["onCell"]),
    ])
    .expect("catalog builds")
}

fn prop(description: &str, ty: &str) -> PropDoc {
    PropDoc {
        description: description.into(),
        ty: ty.into(),
        default_value: "-".into(),
        version: String::new(),
    }
}

fn props(entries: &[(&str, &str, PropDoc)]) -> BTreeMap<String, BTreeMap<String, PropDoc>> {
    let mut table: BTreeMap<String, BTreeMap<String, PropDoc>> = BTreeMap::new();
    for (component, name, doc) in entries {
        table
            .entry((*component).to_string())
            .or_default()
            .insert((*name).to_string(), doc.clone());
    }
    table
}

fn blocks(entries: &[(&str, &str)]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(component, text)| ((*component).to_string(), vec![(*text).to_string()]))
        .collect()
}

pub fn english() -> LanguageDocs {
    LanguageDocs {
        props: props(&[
            ("Button", "onClick", prop("Set the handler to handle click event", "(event) => void")),
            ("DatePicker", "onChange", prop("Callback when the date changes", "function(date, dateString)")),
            ("Table", "onChange", prop("Callback when pagination, filters or sorter change", "function")),
            ("TableColumn", "onCell", prop("Set props on per cell", "function(record, rowIndex)")),
        ]),
        components: blocks(&[
            ("Button", "To trigger an operation."),
            ("DatePicker", "To select or input a date."),
            ("FormItem", "A labelled field of a Form."),
            ("Table", "A table displays rows of data."),
            ("TableColumn", "One column of a Table."),
        ]),
    }
}

pub fn chinese() -> LanguageDocs {
    LanguageDocs {
        props: props(&[("Button", "onClick", prop("点击按钮时的回调", "(event) => void"))]),
        components: blocks(&[("Button", "按钮用于开始一个即时操作。")]),
    }
}

pub fn settings(language: DisplayLanguage) -> ResolveSettings {
    ResolveSettings {
        language,
        module_root: PathBuf::from("node_modules/antd"),
        doc_base_url: "https://ant.design/components".into(),
    }
}

pub fn context(language: DisplayLanguage) -> ResolveContext {
    let docs = DocTables::new()
        .with_language(DisplayLanguage::EnUs, english())
        .with_language(DisplayLanguage::ZhCn, chinese());
    ResolveContext::new(settings(language), catalog(), docs)
}

pub fn library_location(relative: &str) -> Location {
    Location::new(
        Path::new("/proj/node_modules/antd").join(relative),
        Position::new(10, 4),
    )
}

/// Scripted language service that records how often it is asked.
#[derive(Debug, Default)]
pub struct MockLookups {
    pub definitions: Vec<Location>,
    pub type_definitions: Vec<Location>,
    /// Declared symbol name per definition path.
    pub symbols: HashMap<PathBuf, String>,
    pub kind: Option<DefinitionKind>,
    /// When set, both lookups wait on it, so they only finish if polled together.
    pub rendezvous: Option<Arc<Barrier>>,
    pub calls: AtomicUsize,
}

impl MockLookups {
    pub fn with_symbol(mut self, location: &Location, symbol: &str) -> Self {
        self.symbols.insert(location.path.clone(), symbol.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lookup(&self, result: Vec<Location>) -> impl Future<Output = Vec<Location>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rendezvous = self.rendezvous.clone();
        async move {
            if let Some(barrier) = rendezvous {
                barrier.wait().await;
            }
            result
        }
    }
}

impl DefinitionService for MockLookups {
    fn definitions(
        &self,
        _document: &Path,
        _position: Position,
    ) -> impl Future<Output = Vec<Location>> + Send {
        self.lookup(self.definitions.clone())
    }

    fn type_definitions(
        &self,
        _document: &Path,
        _position: Position,
    ) -> impl Future<Output = Vec<Location>> + Send {
        self.lookup(self.type_definitions.clone())
    }

    fn container_symbol_name(
        &self,
        location: &Location,
    ) -> impl Future<Output = Option<String>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::ready(self.symbols.get(&location.path).cloned())
    }

    fn definition_kind(
        &self,
        _location: &Location,
    ) -> impl Future<Output = Option<DefinitionKind>> + Send {
        std::future::ready(self.kind)
    }
}
