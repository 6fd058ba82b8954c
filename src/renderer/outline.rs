//! Outline generation from symbol trees
//!
//! Rendering happens in two passes. [`build_blocks`] walks the symbol tree,
//! applies the visibility rules and formats each visible symbol into an
//! [`OutlineBlock`]. [`Outline`]'s `Display` impl then writes the blocks out,
//! opening a brace after every block that has rendered children.

use std::fmt;

use crate::error::RenderError;
use crate::styles::StyleTable;
use crate::symbols::SymbolNode;

use super::RenderOptions;

/// One rendered symbol line and the rendered members beneath it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineBlock {
    /// Nesting level; the line is indented by this many tabs
    pub depth: usize,
    /// Formatted `<prefix> <name><suffix>` text, without indentation
    pub line: String,
    pub children: Vec<OutlineBlock>,
}

impl OutlineBlock {
    fn write_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tabs = "\t".repeat(self.depth);
        if self.children.is_empty() {
            return writeln!(f, "{}{}", tabs, self.line);
        }
        writeln!(f, "{}{} {{", tabs, self.line)?;
        for child in &self.children {
            child.write_to(f)?;
        }
        writeln!(f, "{}}}", tabs)
    }
}

/// A rendered outline body, before fencing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    pub blocks: Vec<OutlineBlock>,
}

impl Outline {
    /// Build the outline of a top-level symbol list
    pub fn build(
        symbols: &[SymbolNode],
        options: RenderOptions,
        styles: &StyleTable,
    ) -> Result<Self, RenderError> {
        let blocks = build_blocks(symbols, 0, false, options, styles)?;
        Ok(Self { blocks })
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total number of rendered lines, closing braces excluded
    pub fn line_count(&self) -> usize {
        fn count(blocks: &[OutlineBlock]) -> usize {
            blocks.iter().map(|b| 1 + count(&b.children)).sum()
        }
        count(&self.blocks)
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            block.write_to(f)?;
        }
        Ok(())
    }
}

/// Build outline blocks for `nodes` at the given nesting level
///
/// `is_outer_container` is true when the parent of `nodes` is a container
/// kind, which restricts the members shown. A symbol whose own line is
/// filtered out takes its whole subtree with it: there is no header line to
/// hang a brace block from.
pub fn build_blocks(
    nodes: &[SymbolNode],
    depth: usize,
    is_outer_container: bool,
    options: RenderOptions,
    styles: &StyleTable,
) -> Result<Vec<OutlineBlock>, RenderError> {
    let mut blocks = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !is_visible(node, depth, is_outer_container, options) {
            continue;
        }

        let line = styles.lookup(node.kind)?.format(&node.name);

        let collapsed = options.simple && node.kind.is_callable();
        let children = if collapsed || !node.has_children() {
            Vec::new()
        } else {
            build_blocks(
                &node.children,
                depth + 1,
                node.kind.is_container(),
                options,
                styles,
            )?
        };

        blocks.push(OutlineBlock {
            depth,
            line,
            children,
        });
    }

    Ok(blocks)
}

fn is_visible(
    node: &SymbolNode,
    depth: usize,
    is_outer_container: bool,
    options: RenderOptions,
) -> bool {
    if is_outer_container && !node.kind.allowed_in_container() {
        return false;
    }
    if options.class_only && depth == 0 {
        return node.kind.is_container();
    }
    true
}

/// Render `nodes` at the given nesting level to text
///
/// Returns the empty string when nothing is visible.
pub fn render_nodes(
    nodes: &[SymbolNode],
    depth: usize,
    is_outer_container: bool,
    options: RenderOptions,
    styles: &StyleTable,
) -> Result<String, RenderError> {
    let blocks = build_blocks(nodes, depth, is_outer_container, options, styles)?;
    Ok(Outline { blocks }.to_string())
}
