//! Display languages, symbol classes, insertion kinds, and definition kinds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DisplayLanguage
// ---------------------------------------------------------------------------

/// Language of the documentation tables shown to the user.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum DisplayLanguage {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl DisplayLanguage {
    /// Every supported language, in table-loading order.
    pub const ALL: [Self; 2] = [Self::EnUs, Self::ZhCn];

    /// Return the tag used in configuration and data file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhCn => "zh-CN",
        }
    }

    /// Parse a configured value. Case-insensitive; accepts `en`/`zh` shorthands.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Some(Self::EnUs),
            "zh-cn" | "zh" => Some(Self::ZhCn),
            _ => None,
        }
    }

    /// Suffix the documentation site appends to localized page slugs.
    #[must_use]
    pub const fn doc_link_suffix(self) -> &'static str {
        match self {
            Self::EnUs => "",
            Self::ZhCn => "-cn",
        }
    }
}

impl fmt::Display for DisplayLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SymbolClass
// ---------------------------------------------------------------------------

/// What a hovered library symbol names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolClass {
    /// A component type, e.g. `Button`.
    Component,
    /// A prop or event handler of a component, e.g. `onClick`.
    Props,
}

impl SymbolClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Props => "props",
        }
    }
}

impl fmt::Display for SymbolClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// InsertionKind
// ---------------------------------------------------------------------------

/// How a completed handler is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionKind {
    /// Emit the assignment right away (`onClick={...}`).
    Direct,
    /// Insert the bare name; a follow-up command asks how to complete it.
    Inquiry,
}

impl InsertionKind {
    /// Trigger character selecting [`InsertionKind::Direct`].
    pub const DIRECT_TRIGGER: char = '!';

    /// `!` selects the direct form; any other trigger (or none) the inquiry form.
    #[must_use]
    pub fn from_trigger(trigger: Option<char>) -> Self {
        if trigger == Some(Self::DIRECT_TRIGGER) {
            Self::Direct
        } else {
            Self::Inquiry
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Inquiry => "inquiry",
        }
    }
}

impl fmt::Display for InsertionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DefinitionKind
// ---------------------------------------------------------------------------

/// Declaration kind reported by an external language service, when it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    Class,
    Interface,
    TypeAlias,
    Function,
    Variable,
    Property,
    Method,
    Field,
    Other,
}

impl DefinitionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::TypeAlias => "type_alias",
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Property => "property",
            Self::Method => "method",
            Self::Field => "field",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DefinitionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(Self::Class),
            "interface" => Ok(Self::Interface),
            "type_alias" | "type" => Ok(Self::TypeAlias),
            "function" => Ok(Self::Function),
            "variable" => Ok(Self::Variable),
            "property" => Ok(Self::Property),
            "method" => Ok(Self::Method),
            "field" => Ok(Self::Field),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown definition kind: {s}")),
        }
    }
}
