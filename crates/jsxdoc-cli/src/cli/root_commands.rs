use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use jsxdoc_core::schema::DataFileKind;
use jsxdoc_core::{DefinitionKind, Position};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Handler completions at a cursor inside a component's JSX.
    Complete(CompleteArgs),
    /// Documentation for the component or prop under the cursor.
    Hover(HoverArgs),
    /// The catalog component and class component around a cursor.
    Locate(LocateArgs),
    /// Cross-check the catalog against the documentation tables.
    Check,
    /// Print the JSON Schema of a data file.
    Schema(SchemaArgs),
}

/// A cursor in a document. Lines and columns start at 1.
#[derive(Clone, Debug, Args)]
pub struct CursorArgs {
    /// Document to inspect (.tsx, .jsx, .js).
    pub file: PathBuf,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub line: u32,
    /// Column, counted in characters.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub col: u32,
}

impl CursorArgs {
    /// Zero-based position of the cursor.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line.saturating_sub(1), self.col.saturating_sub(1))
    }
}

/// Arguments for `jsxdoc complete`.
#[derive(Clone, Debug, Args)]
pub struct CompleteArgs {
    #[command(flatten)]
    pub cursor: CursorArgs,
    /// Character that triggered completion; `!` asks for direct insertion.
    #[arg(long)]
    pub trigger: Option<char>,
}

/// Arguments for `jsxdoc hover`.
///
/// The definition lookups normally come from a language service; here they
/// are passed in as `path:line:col` (1-based).
#[derive(Clone, Debug, Args)]
pub struct HoverArgs {
    #[command(flatten)]
    pub cursor: CursorArgs,
    /// Definition location of the symbol (repeatable).
    #[arg(long)]
    pub definition: Vec<String>,
    /// Type-definition location of the symbol (repeatable).
    #[arg(long)]
    pub type_definition: Vec<String>,
    /// Name of the symbol declared at the definition.
    #[arg(long)]
    pub symbol: Option<String>,
    /// Declaration kind at the definition (class, interface, property, ...).
    #[arg(long)]
    pub kind: Option<DefinitionKind>,
}

/// Arguments for `jsxdoc locate`.
#[derive(Clone, Debug, Args)]
pub struct LocateArgs {
    #[command(flatten)]
    pub cursor: CursorArgs,
}

/// Arguments for `jsxdoc schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Data file kind.
    pub kind: SchemaKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    Catalog,
    Props,
    Components,
}

impl From<SchemaKind> for DataFileKind {
    fn from(kind: SchemaKind) -> Self {
        match kind {
            SchemaKind::Catalog => Self::Catalog,
            SchemaKind::Props => Self::Props,
            SchemaKind::Components => Self::Components,
        }
    }
}
