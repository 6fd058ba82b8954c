//! Symbol Outline - render a document's symbol tree as indented pseudo-code
//!
//! The symbol tree comes from elsewhere (typically a language server's
//! `textDocument/documentSymbol` response); this crate only decides which
//! symbols to show and how to lay them out.
//!
//! # Example
//!
//! ```rust
//! use symbol_outline::{render_outline, RenderConfig, SymbolKind, SymbolNode};
//!
//! let symbols = vec![SymbolNode::new(SymbolKind::Class, "Foo")
//!     .with_child(SymbolNode::new(SymbolKind::Method, "bar"))];
//!
//! let text = render_outline(&symbols, &RenderConfig::default()).unwrap();
//! assert_eq!(text, "```js\n\nclass Foo {\n\tfunction bar\n}\n\n\n```");
//! ```

pub mod commands;
pub mod error;
pub mod host;
pub mod renderer;
pub mod styles;
pub mod symbols;

pub use commands::{run_command, Command};
pub use error::{CommandError, RenderError, SymbolLoadError};
pub use host::{DocumentId, SymbolProvider, TextDisplay};
pub use renderer::{Outline, RenderOptions, DEFAULT_FENCE_LANGUAGE};
pub use styles::{KindStyle, StyleError, StyleTable};
pub use symbols::{SymbolKind, SymbolNode};

use tracing::debug;

/// Configuration for a complete outline render
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Symbol filtering options
    pub options: RenderOptions,
    /// Prefix and suffix for each symbol kind
    pub styles: StyleTable,
    /// Language tag on the opening fence
    pub fence_language: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            options: RenderOptions::default(),
            styles: StyleTable::default(),
            fence_language: DEFAULT_FENCE_LANGUAGE.to_string(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filtering options
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the style table
    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// Set the language tag on the opening fence
    pub fn with_fence_language(mut self, language: impl Into<String>) -> Self {
        self.fence_language = language.into();
        self
    }
}

/// Render a top-level symbol list as a fenced outline
///
/// # Example
///
/// ```rust
/// use symbol_outline::{render_outline, RenderConfig, RenderOptions, SymbolKind, SymbolNode};
///
/// let symbols = vec![
///     SymbolNode::new(SymbolKind::Variable, "count"),
///     SymbolNode::new(SymbolKind::Class, "Foo"),
/// ];
/// let config = RenderConfig::new()
///     .with_options(RenderOptions::new().with_class_only(true))
///     .with_fence_language("ts");
///
/// let text = render_outline(&symbols, &config).unwrap();
/// assert_eq!(text, "```ts\n\nclass Foo\n\n\n```");
/// ```
pub fn render_outline(
    symbols: &[SymbolNode],
    config: &RenderConfig,
) -> Result<String, RenderError> {
    render_fenced(
        symbols,
        config.options,
        &config.styles,
        &config.fence_language,
    )
}

pub(crate) fn render_fenced(
    symbols: &[SymbolNode],
    options: RenderOptions,
    styles: &StyleTable,
    language: &str,
) -> Result<String, RenderError> {
    if !styles.is_total() {
        debug!(missing = ?styles.missing_kinds(), "rendering with a partial style table");
    }
    let outline = Outline::build(symbols, options, styles)?;
    debug!(
        symbols = symbols.iter().map(SymbolNode::subtree_len).sum::<usize>(),
        lines = outline.line_count(),
        empty = outline.is_empty(),
        simple = options.simple,
        class_only = options.class_only,
        "rendered outline"
    );
    Ok(renderer::fence(&outline.to_string(), language))
}
