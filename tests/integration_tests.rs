//! Integration tests for loading symbols, styles and running commands

use std::path::Path;

use pretty_assertions::assert_eq;

use symbol_outline::host::{BufferDisplay, JsonSymbolProvider};
use symbol_outline::renderer::render_nodes;
use symbol_outline::symbols::from_json;
use symbol_outline::{
    render_outline, run_command, Command, CommandError, DocumentId, RenderConfig, RenderOptions,
    StyleTable, SymbolKind, SymbolLoadError, SymbolNode, SymbolProvider,
};

fn fixture(name: &str) -> DocumentId {
    DocumentId::from(Path::new("tests/fixtures").join(name))
}

#[test]
fn test_load_fixture() {
    let symbols = JsonSymbolProvider::new()
        .symbols(&fixture("user_service.json"))
        .expect("Should load");
    assert_eq!(symbols.len(), 5);
    assert_eq!(symbols[0].kind, SymbolKind::Constant);
    assert_eq!(symbols[0].detail.as_deref(), Some("string"));
    assert_eq!(symbols[1].children.len(), 5);
    assert_eq!(symbols[4].kind, SymbolKind::Namespace);
}

#[test]
fn test_named_kinds_with_style_overrides() {
    let styles = StyleTable::from_file(Path::new("tests/fixtures/rust_styles.toml"))
        .expect("Should parse styles");
    assert_eq!(styles.name.as_deref(), Some("rust-ish"));

    let mut display = BufferDisplay::new();
    run_command(
        Command::ListSymbols,
        Some(&fixture("named_kinds.json")),
        &JsonSymbolProvider::new(),
        &mut display,
        &RenderConfig::new().with_styles(styles),
    )
    .unwrap();

    assert_eq!(
        display.last().unwrap(),
        "```js\n\nstruct Point {\n\tfn new()\n\tfn norm() {\n\t\tvar sum\n\t}\n}\nconst ORIGIN\nfn main()\nmod geometry {\n\tclass Circle\n}\n\n\n```"
    );
}

#[test]
fn test_spec_example_default_and_simple() {
    let symbols = from_json(r#"[{"name": "Foo", "kind": 5, "children": [{"name": "bar", "kind": 6}]}]"#)
        .unwrap();
    let expected = "```js\n\nclass Foo {\n\tfunction bar\n}\n\n\n```";
    assert_eq!(render_outline(&symbols, &RenderConfig::default()).unwrap(), expected);

    let simple = RenderConfig::new().with_options(RenderOptions::new().with_simple(true));
    assert_eq!(render_outline(&symbols, &simple).unwrap(), expected);
}

#[test]
fn test_default_namespace_matches_stock_table() {
    let symbols = from_json(r#"[{"name": "ns", "kind": 3}]"#).unwrap();
    assert_eq!(
        render_outline(&symbols, &RenderConfig::default()).unwrap(),
        "```js\n\nfunction  ns\n\n\n```"
    );
}

#[test]
fn test_flat_leaves_with_every_flag_combination() {
    let symbols: Vec<SymbolNode> = ["a", "b", "c"]
        .iter()
        .map(|name| SymbolNode::new(SymbolKind::Variable, *name))
        .collect();
    for simple in [false, true] {
        let options = RenderOptions::new().with_simple(simple);
        let out = render_nodes(&symbols, 0, false, options, &StyleTable::default()).unwrap();
        assert_eq!(out.lines().collect::<Vec<_>>(), vec!["var a", "var b", "var c"]);
        assert!(!out.contains('{') && !out.contains('}'));
    }
}

#[test]
fn test_container_children_under_container_parent() {
    // A container rendered as the member of another container still shows
    // its own allowed members
    let class = SymbolNode::new(SymbolKind::Class, "Inner").with_children(vec![
        SymbolNode::new(SymbolKind::Method, "run"),
        SymbolNode::new(SymbolKind::Property, "state"),
    ]);
    let out = render_nodes(
        &[class],
        1,
        true,
        RenderOptions::default(),
        &StyleTable::default(),
    )
    .unwrap();
    assert_eq!(out, "\tclass Inner {\n\t\tfunction run\n\t\t state\n\t}\n");
}

#[test]
fn test_rendering_twice_is_byte_identical() {
    let symbols = JsonSymbolProvider::new()
        .symbols(&fixture("user_service.json"))
        .unwrap();
    let config = RenderConfig::default();
    assert_eq!(
        render_outline(&symbols, &config).unwrap(),
        render_outline(&symbols, &config).unwrap()
    );
}

#[test]
fn test_no_active_document_shows_nothing() {
    for command in Command::ALL {
        let mut display = BufferDisplay::new();
        let result = run_command(
            command,
            None,
            &JsonSymbolProvider::new(),
            &mut display,
            &RenderConfig::default(),
        );
        assert!(matches!(result, Err(CommandError::NoActiveDocument)));
        assert!(display.shown.is_empty());
    }
}

#[test]
fn test_missing_document_propagates_io_error() {
    let mut display = BufferDisplay::new();
    let result = run_command(
        Command::ListSymbols,
        Some(&fixture("does_not_exist.json")),
        &JsonSymbolProvider::new(),
        &mut display,
        &RenderConfig::default(),
    );
    assert!(matches!(
        result,
        Err(CommandError::Symbols(SymbolLoadError::Io(_)))
    ));
    assert!(display.shown.is_empty());
}

#[test]
fn test_malformed_stdin_reports_position() {
    let source = "[\n  {\"name\": \"Foo\", \"kind\": 99}\n]";
    let provider = JsonSymbolProvider::new().with_stdin(source);
    let err = provider.symbols(&DocumentId::Stdin).unwrap_err();
    assert!(matches!(err, SymbolLoadError::Json { .. }));
    assert_eq!(err.input(), Some(source));
    assert!(err.span().is_some());
    assert!(err.format("<stdin>").contains("<stdin>"));
}
