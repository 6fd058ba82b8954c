//! Symbol tree nodes

use serde::{Deserialize, Deserializer};

use super::SymbolKind;

/// One entry in a document's symbol outline
///
/// Decodes from the LSP `DocumentSymbol` shape. Fields the outline does
/// not use (`range`, `selectionRange`, `tags`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymbolNode {
    pub kind: SymbolKind,
    pub name: String,
    /// Extra information such as a signature; decoded but never rendered
    #[serde(default)]
    pub detail: Option<String>,
    /// Members in declaration order; `null` and a missing key both decode as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<SymbolNode>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SymbolNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SymbolNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SymbolNode {
    /// Create a leaf node
    pub fn new(kind: SymbolKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            detail: None,
            children: Vec::new(),
        }
    }

    /// Set the children of this node
    pub fn with_children(mut self, children: Vec<SymbolNode>) -> Self {
        self.children = children;
        self
    }

    /// Append a single child
    pub fn with_child(mut self, child: SymbolNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(SymbolNode::subtree_len).sum::<usize>()
    }
}
