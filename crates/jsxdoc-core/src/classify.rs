//! Component-vs-prop classification of library symbol names.

use crate::enums::{DefinitionKind, SymbolClass};

/// Classify a symbol name with a lexical heuristic.
///
/// If uppercasing the first character changes it, the name is a prop or
/// handler (`onClick`); otherwise it is a component (`Button`). This is a
/// naming-convention check, not a semantic one: names that start with a
/// digit, `_` or `$`, and empty names, classify as components.
#[must_use]
pub fn classify(name: &str) -> SymbolClass {
    match name.chars().next() {
        Some(first) if first.to_uppercase().ne(std::iter::once(first)) => SymbolClass::Props,
        _ => SymbolClass::Component,
    }
}

/// Classify using the declaration kind from the language service when it is
/// decisive, falling back to [`classify`] otherwise.
#[must_use]
pub fn classify_with_hint(name: &str, hint: Option<DefinitionKind>) -> SymbolClass {
    match hint {
        Some(DefinitionKind::Class | DefinitionKind::Interface | DefinitionKind::TypeAlias) => {
            SymbolClass::Component
        }
        Some(DefinitionKind::Property | DefinitionKind::Method | DefinitionKind::Field) => {
            SymbolClass::Props
        }
        Some(DefinitionKind::Function | DefinitionKind::Variable | DefinitionKind::Other)
        | None => classify(name),
    }
}
