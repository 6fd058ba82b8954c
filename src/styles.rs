//! Kind styles: the literal text placed around a symbol's name
//!
//! Every symbol line is rendered as `<prefix> <name><suffix>`. The default
//! table reads like loose JavaScript (`class Foo`, `function bar`,
//! `var items[]`). A TOML file can override individual kinds; overrides are
//! merged onto the defaults so the table stays total.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::RenderError;
use crate::symbols::SymbolKind;

/// Errors that can occur when loading or parsing style overrides
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to read style file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse style TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unknown symbol kind '{0}' in style table")]
    UnknownKind(String),
}

/// Text placed before and after a symbol name
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct KindStyle {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl KindStyle {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Format a name with this style: `<prefix> <name><suffix>`
    pub fn format(&self, name: &str) -> String {
        format!("{} {}{}", self.prefix, name, self.suffix)
    }
}

/// Immutable mapping from symbol kind to its style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    /// Optional name for the table
    pub name: Option<String>,
    styles: HashMap<SymbolKind, KindStyle>,
}

/// TOML structure for deserializing style overrides
#[derive(Deserialize)]
struct TomlStyleTable {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    styles: BTreeMap<String, KindStyle>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Default style table: (kind, prefix, suffix)
const DEFAULT_STYLES: [(SymbolKind, &str, &str); 26] = [
    (SymbolKind::Module, "module", ""),
    (SymbolKind::Array, "var", "[]"),
    (SymbolKind::Boolean, "var", ""),
    (SymbolKind::Class, "class", ""),
    (SymbolKind::Constant, "const", ""),
    (SymbolKind::Constructor, "", "(...)"),
    (SymbolKind::Enum, "enum", ""),
    (SymbolKind::EnumMember, "", ""),
    (SymbolKind::Event, "event", ""),
    (SymbolKind::Field, "field", ""),
    (SymbolKind::File, "file", ""),
    (SymbolKind::Function, "function", ""),
    (SymbolKind::Interface, "interface", ""),
    (SymbolKind::Key, "key", ""),
    (SymbolKind::Method, "function", ""),
    (SymbolKind::Namespace, "function ", ""),
    (SymbolKind::Null, "null", ""),
    (SymbolKind::Number, "number", ""),
    (SymbolKind::Object, "object", ""),
    (SymbolKind::Operator, "op", ""),
    (SymbolKind::Package, "pkg", ""),
    (SymbolKind::Property, "", ""),
    (SymbolKind::String, "string", ""),
    (SymbolKind::TypeParameter, "type", ""),
    (SymbolKind::Struct, "struct", ""),
    (SymbolKind::Variable, "var", ""),
];

impl StyleTable {
    /// Build a table from explicit entries, without the defaults
    ///
    /// The result may be partial; rendering a kind it lacks fails with
    /// [`RenderError::UnresolvableKindStyle`].
    pub fn from_entries(entries: impl IntoIterator<Item = (SymbolKind, KindStyle)>) -> Self {
        Self {
            name: None,
            styles: entries.into_iter().collect(),
        }
    }

    /// Load overrides from a TOML file and merge them onto the defaults
    pub fn from_file(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load overrides from a TOML string and merge them onto the defaults
    pub fn from_str(content: &str) -> Result<Self, StyleError> {
        let parsed: TomlStyleTable = toml::from_str(content)?;

        let mut table = Self::default();
        table.name = parsed.metadata.and_then(|m| m.name);
        for (key, style) in parsed.styles {
            let kind: SymbolKind = key.parse().map_err(|_| StyleError::UnknownKind(key))?;
            table.styles.insert(kind, style);
        }
        Ok(table)
    }

    /// Look up the style for a kind
    pub fn lookup(&self, kind: SymbolKind) -> Result<&KindStyle, RenderError> {
        self.styles
            .get(&kind)
            .ok_or(RenderError::UnresolvableKindStyle { kind })
    }

    /// True when every kind in the closed set has a style
    pub fn is_total(&self) -> bool {
        SymbolKind::ALL.iter().all(|k| self.styles.contains_key(k))
    }

    /// Kinds without a style, in code order
    pub fn missing_kinds(&self) -> Vec<SymbolKind> {
        SymbolKind::ALL
            .iter()
            .copied()
            .filter(|k| !self.styles.contains_key(k))
            .collect()
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::from_entries(
            DEFAULT_STYLES
                .iter()
                .map(|(kind, prefix, suffix)| (*kind, KindStyle::new(*prefix, *suffix))),
        )
    }
}
