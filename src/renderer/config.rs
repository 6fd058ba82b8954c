//! Options controlling which symbols the outline shows

/// Filtering options for one outline render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Collapse functions and methods: their members are never rendered
    pub simple: bool,

    /// Show only container kinds at the top level
    pub class_only: bool,
}

impl RenderOptions {
    /// Create options with every filter off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether function and method bodies are collapsed
    pub fn with_simple(mut self, simple: bool) -> Self {
        self.simple = simple;
        self
    }

    /// Set whether only top-level containers are shown
    pub fn with_class_only(mut self, class_only: bool) -> Self {
        self.class_only = class_only;
        self
    }
}
