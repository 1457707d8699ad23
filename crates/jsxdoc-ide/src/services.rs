//! Language-service capabilities the resolutions consume.

use std::future::Future;
use std::path::Path;

use jsxdoc_core::{DefinitionKind, Location, Position};

/// Definition lookups supplied by the host's language service.
///
/// Each lookup may return zero, one, or several locations. Failures inside
/// the service are its own concern; report them as an empty result.
pub trait DefinitionService {
    fn definitions(
        &self,
        document: &Path,
        position: Position,
    ) -> impl Future<Output = Vec<Location>> + Send;

    fn type_definitions(
        &self,
        document: &Path,
        position: Position,
    ) -> impl Future<Output = Vec<Location>> + Send;

    /// Name of the symbol declared at `location` (`Button`, `onClick`).
    fn container_symbol_name(
        &self,
        location: &Location,
    ) -> impl Future<Output = Option<String>> + Send;

    /// What kind of declaration sits at `location`, when the service knows.
    fn definition_kind(
        &self,
        _location: &Location,
    ) -> impl Future<Output = Option<DefinitionKind>> + Send {
        std::future::ready(None)
    }
}

/// Fixed lookup answers, for hosts that resolve definitions up front.
#[derive(Debug, Clone, Default)]
pub struct StaticLookups {
    pub definitions: Vec<Location>,
    pub type_definitions: Vec<Location>,
    pub symbol: Option<String>,
    pub kind: Option<DefinitionKind>,
}

impl DefinitionService for StaticLookups {
    fn definitions(
        &self,
        _document: &Path,
        _position: Position,
    ) -> impl Future<Output = Vec<Location>> + Send {
        std::future::ready(self.definitions.clone())
    }

    fn type_definitions(
        &self,
        _document: &Path,
        _position: Position,
    ) -> impl Future<Output = Vec<Location>> + Send {
        std::future::ready(self.type_definitions.clone())
    }

    fn container_symbol_name(
        &self,
        _location: &Location,
    ) -> impl Future<Output = Option<String>> + Send {
        std::future::ready(self.symbol.clone())
    }

    fn definition_kind(
        &self,
        _location: &Location,
    ) -> impl Future<Output = Option<DefinitionKind>> + Send {
        std::future::ready(self.kind)
    }
}
