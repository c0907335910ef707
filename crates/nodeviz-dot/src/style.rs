//! Default visual styling for rendered documents.

/// Default attribute list applied to every node unless overridden.
pub const DEFAULT_NODE_STYLE: &str =
    r##"shape=box, style=filled, fillcolor="#e0e0e0", fontname="Arial""##;

/// Default attribute list applied to every edge unless overridden.
pub const DEFAULT_EDGE_STYLE: &str = r##"color="#555555", fontname="Arial""##;

/// Visual defaults emitted as the graph-wide `node [...]` and `edge [...]`
/// declarations.
///
/// An explicit value passed to the renderer rather than ambient constants,
/// so two renders with different styles can coexist in one process.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Raw attribute list for the `node [...]` default declaration.
    pub node_defaults: String,
    /// Raw attribute list for the `edge [...]` default declaration.
    pub edge_defaults: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_defaults: DEFAULT_NODE_STYLE.to_string(),
            edge_defaults: DEFAULT_EDGE_STYLE.to_string(),
        }
    }
}

impl RenderStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_defaults(mut self, attrs: impl Into<String>) -> Self {
        self.node_defaults = attrs.into();
        self
    }

    pub fn with_edge_defaults(mut self, attrs: impl Into<String>) -> Self {
        self.edge_defaults = attrs.into();
        self
    }
}
