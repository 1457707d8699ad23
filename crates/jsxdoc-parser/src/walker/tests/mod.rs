use ast_grep_language::SupportLang;
use jsxdoc_core::{Catalog, CatalogEntry, Position};

use super::*;
use crate::line_index::LineIndex;
use crate::syntax::TsxTree;


const DASHBOARD: &str = include_str!("../../../tests/fixtures/dashboard.tsx");

fn dashboard() -> TsxTree {
    TsxTree::parse(DASHBOARD, SupportLang::Tsx)
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        CatalogEntry::new("Button", ["onClick", "onFocus"]),
        CatalogEntry::new("Table", ["onChange", "onRow"]),
        CatalogEntry::new("TableColumn", ["onCell"]),
    ])
    .expect("catalog should build")
}

/// Position `delta` characters into the first occurrence of `needle`.
fn position_of(source: &str, needle: &str, delta: usize) -> Position {
    let offset = source
        .find(needle)
        .unwrap_or_else(|| panic!("fixture should contain {needle:?}"));
    let index = LineIndex::new(source);
    let start = index.position(offset);
    Position::new(start.line, start.column + u32::try_from(delta).expect("small delta"))
}
