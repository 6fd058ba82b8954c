//! The closed set of symbol kinds and the groups the renderer filters on

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Category of a symbol, numbered as in the LSP `SymbolKind` enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "KindRepr")]
pub enum SymbolKind {
    File = 1,
    Module = 2,
    Namespace = 3,
    Package = 4,
    Class = 5,
    Method = 6,
    Property = 7,
    Field = 8,
    Constructor = 9,
    Enum = 10,
    Interface = 11,
    Function = 12,
    Variable = 13,
    Constant = 14,
    String = 15,
    Number = 16,
    Boolean = 17,
    Array = 18,
    Object = 19,
    Key = 20,
    Null = 21,
    EnumMember = 22,
    Struct = 23,
    Event = 24,
    Operator = 25,
    TypeParameter = 26,
}

/// A kind code or name that does not belong to the closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownKind {
    #[error("unknown symbol kind code {0} (expected 1..=26)")]
    Code(u64),
    #[error("unknown symbol kind '{0}'")]
    Name(String),
}

impl SymbolKind {
    /// Every kind, in LSP code order
    pub const ALL: [SymbolKind; 26] = [
        SymbolKind::File,
        SymbolKind::Module,
        SymbolKind::Namespace,
        SymbolKind::Package,
        SymbolKind::Class,
        SymbolKind::Method,
        SymbolKind::Property,
        SymbolKind::Field,
        SymbolKind::Constructor,
        SymbolKind::Enum,
        SymbolKind::Interface,
        SymbolKind::Function,
        SymbolKind::Variable,
        SymbolKind::Constant,
        SymbolKind::String,
        SymbolKind::Number,
        SymbolKind::Boolean,
        SymbolKind::Array,
        SymbolKind::Object,
        SymbolKind::Key,
        SymbolKind::Null,
        SymbolKind::EnumMember,
        SymbolKind::Struct,
        SymbolKind::Event,
        SymbolKind::Operator,
        SymbolKind::TypeParameter,
    ];

    /// Look up a kind by its LSP code
    pub fn from_code(code: u64) -> Result<Self, UnknownKind> {
        usize::try_from(code)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(UnknownKind::Code(code))
    }

    /// The LSP code of this kind
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::File => "File",
            SymbolKind::Module => "Module",
            SymbolKind::Namespace => "Namespace",
            SymbolKind::Package => "Package",
            SymbolKind::Class => "Class",
            SymbolKind::Method => "Method",
            SymbolKind::Property => "Property",
            SymbolKind::Field => "Field",
            SymbolKind::Constructor => "Constructor",
            SymbolKind::Enum => "Enum",
            SymbolKind::Interface => "Interface",
            SymbolKind::Function => "Function",
            SymbolKind::Variable => "Variable",
            SymbolKind::Constant => "Constant",
            SymbolKind::String => "String",
            SymbolKind::Number => "Number",
            SymbolKind::Boolean => "Boolean",
            SymbolKind::Array => "Array",
            SymbolKind::Object => "Object",
            SymbolKind::Key => "Key",
            SymbolKind::Null => "Null",
            SymbolKind::EnumMember => "EnumMember",
            SymbolKind::Struct => "Struct",
            SymbolKind::Event => "Event",
            SymbolKind::Operator => "Operator",
            SymbolKind::TypeParameter => "TypeParameter",
        }
    }

    /// Kinds that semantically hold members
    ///
    /// Children of a container are restricted to
    /// [`allowed_in_container`](Self::allowed_in_container) kinds.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            SymbolKind::Class
                | SymbolKind::Struct
                | SymbolKind::Enum
                | SymbolKind::Interface
                | SymbolKind::Namespace
                | SymbolKind::TypeParameter
        )
    }

    /// Kinds shown when their parent is a container
    pub fn allowed_in_container(self) -> bool {
        matches!(
            self,
            SymbolKind::Method
                | SymbolKind::Property
                | SymbolKind::Struct
                | SymbolKind::Function
                | SymbolKind::EnumMember
                | SymbolKind::Enum
                | SymbolKind::Constructor
                | SymbolKind::Class
                | SymbolKind::Namespace
        )
    }

    /// Call-like kinds whose bodies are collapsed in simple mode
    pub fn is_callable(self) -> bool {
        matches!(self, SymbolKind::Function | SymbolKind::Method)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolKind {
    type Err = UnknownKind;

    /// Parse a kind name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKind::Name(s.to_string()))
    }
}

/// Wire form of a kind: the LSP integer code or the kind name
#[derive(Deserialize)]
#[serde(untagged)]
enum KindRepr {
    Code(u64),
    Name(String),
}

impl TryFrom<KindRepr> for SymbolKind {
    type Error = UnknownKind;

    fn try_from(repr: KindRepr) -> Result<Self, Self::Error> {
        match repr {
            KindRepr::Code(code) => Self::from_code(code),
            KindRepr::Name(name) => name.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_positions() {
        for (idx, kind) in SymbolKind::ALL.iter().enumerate() {
            assert_eq!(kind.code() as usize, idx + 1);
            assert_eq!(SymbolKind::from_code(idx as u64 + 1), Ok(*kind));
        }
    }

    #[test]
    fn test_from_code_out_of_range() {
        assert_eq!(SymbolKind::from_code(0), Err(UnknownKind::Code(0)));
        assert_eq!(SymbolKind::from_code(27), Err(UnknownKind::Code(27)));
    }

    #[test]
    fn test_parse_name_case_insensitive() {
        assert_eq!("class".parse::<SymbolKind>(), Ok(SymbolKind::Class));
        assert_eq!("TypeParameter".parse::<SymbolKind>(), Ok(SymbolKind::TypeParameter));
        assert_eq!("enummember".parse::<SymbolKind>(), Ok(SymbolKind::EnumMember));
        assert!("Trait".parse::<SymbolKind>().is_err());
    }

    #[test]
    fn test_container_kinds() {
        let containers: Vec<_> = SymbolKind::ALL
            .iter()
            .copied()
            .filter(|k| k.is_container())
            .collect();
        assert_eq!(
            containers,
            vec![
                SymbolKind::Namespace,
                SymbolKind::Class,
                SymbolKind::Enum,
                SymbolKind::Interface,
                SymbolKind::Struct,
                SymbolKind::TypeParameter,
            ]
        );
    }

    #[test]
    fn test_container_member_restriction() {
        assert!(SymbolKind::Method.allowed_in_container());
        assert!(SymbolKind::Constructor.allowed_in_container());
        assert!(!SymbolKind::Field.allowed_in_container());
        assert!(!SymbolKind::Variable.allowed_in_container());
        // Interfaces are containers but not allowed as members
        assert!(!SymbolKind::Interface.allowed_in_container());
    }

    #[test]
    fn test_callable_kinds() {
        assert!(SymbolKind::Function.is_callable());
        assert!(SymbolKind::Method.is_callable());
        assert!(!SymbolKind::Constructor.is_callable());
    }
}
