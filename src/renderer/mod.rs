//! Outline renderer
//!
//! Turns a symbol tree into indented pseudo-code, one line per visible
//! symbol, with braces around the members of each symbol.

pub mod config;
pub mod outline;

pub use config::RenderOptions;
pub use outline::{build_blocks, render_nodes, Outline, OutlineBlock};

/// Opening fence and language tag placed before the outline by default
pub const DEFAULT_FENCE_LANGUAGE: &str = "js";

/// Wrap an outline body in a fenced code block
pub fn fence(body: &str, language: &str) -> String {
    format!("```{}\n\n{}\n\n```", language, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence() {
        assert_eq!(fence("class Foo\n", "js"), "```js\n\nclass Foo\n\n\n```");
        assert_eq!(fence("", "ts"), "```ts\n\n\n\n```");
    }
}
