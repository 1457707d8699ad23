//! # jsxdoc-core
//!
//! Component catalog, name matching, and shared types for jsxdoc.
//!
//! This crate provides the pieces every other jsxdoc crate builds on:
//! - Name normalization used for all catalog comparisons
//! - The component [`Catalog`] and its three-tier matcher
//! - The lexical symbol classifier
//! - Documentation tables keyed by display language
//! - Positions and resolved locations
//! - JSON Schemas for the on-disk data files
//! - Cross-cutting error types

pub mod catalog;
pub mod classify;
pub mod docs;
pub mod enums;
pub mod errors;
pub mod location;
pub mod normalize;
pub mod schema;

pub use catalog::{Catalog, CatalogEntry};
pub use classify::{classify, classify_with_hint};
pub use docs::{DocTables, LanguageDocs, PropDoc, compose_doc_link};
pub use enums::{DefinitionKind, DisplayLanguage, InsertionKind, SymbolClass};
pub use errors::{CatalogError, ResolveError};
pub use location::{Location, Position, Span};
pub use normalize::normalize;
