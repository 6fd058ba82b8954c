//! Symbol tree model
//!
//! The tree is produced elsewhere (a language server, an indexer) and
//! handed to this crate as LSP `DocumentSymbol[]` JSON. Nothing here
//! looks at source text.

mod kind;
mod node;

pub use kind::{SymbolKind, UnknownKind};
pub use node::SymbolNode;

/// Decode a top-level symbol list from JSON
///
/// Accepts the result of a `textDocument/documentSymbol` request. Kinds may
/// be LSP integer codes or kind names.
pub fn from_json(source: &str) -> Result<Vec<SymbolNode>, serde_json::Error> {
    serde_json::from_str(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lsp_document_symbols() {
        let json = r#"[
            {
                "name": "Foo",
                "detail": "",
                "kind": 5,
                "range": {"start": {"line": 0, "character": 0}, "end": {"line": 4, "character": 1}},
                "selectionRange": {"start": {"line": 0, "character": 6}, "end": {"line": 0, "character": 9}},
                "children": [
                    {"name": "bar", "kind": 6}
                ]
            }
        ]"#;
        let symbols = from_json(json).expect("Should decode");
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].kind, SymbolKind::Class);
        assert_eq!(symbols[0].detail.as_deref(), Some(""));
        assert_eq!(symbols[0].children[0].kind, SymbolKind::Method);
        assert!(symbols[0].children[0].children.is_empty());
    }

    #[test]
    fn test_decode_null_children_as_empty() {
        let symbols = from_json(
            r#"[{"name": "Foo", "kind": 5, "children": null}, {"name": "bar", "kind": 12}]"#,
        )
        .expect("null children should decode");
        assert_eq!(symbols.len(), 2);
        assert!(symbols[0].children.is_empty());
        assert_eq!(symbols[0], SymbolNode::new(SymbolKind::Class, "Foo"));
    }

    #[test]
    fn test_decode_named_kinds() {
        let numeric = from_json(r#"[{"name": "x", "kind": 13}]"#).unwrap();
        let named = from_json(r#"[{"name": "x", "kind": "variable"}]"#).unwrap();
        assert_eq!(numeric, named);
    }

    #[test]
    fn test_decode_rejects_unknown_kind() {
        assert!(from_json(r#"[{"name": "x", "kind": 99}]"#).is_err());
        assert!(from_json(r#"[{"name": "x", "kind": "Trait"}]"#).is_err());
    }

    #[test]
    fn test_decode_missing_name() {
        assert!(from_json(r#"[{"kind": 5}]"#).is_err());
    }
}
