//! GraphModel -> DOT document serialization.

use std::fmt::Write;

use nodeviz_core::GraphModel;
use nodeviz_error::{Error, Result};
use tracing::debug;

use crate::dot::escape_quotes;
use crate::style::RenderStyle;

/// Render a model to a DOT document with the default styling.
pub fn render_graph(model: &GraphModel) -> Result<String> {
    render_graph_with_style(model, &RenderStyle::default())
}

/// Render a model to a DOT document.
///
/// Nodes are keyed by their positional identifier (`n0`, `n1`, ... in input
/// order) and edges reference nodes through those identifiers, resolved via
/// a first-occurrence-wins name lookup. An edge endpoint that resolves to no
/// node aborts with a `NodeNotFound` error and no document is returned; a
/// validated model never hits this, the check guards models built by hand.
pub fn render_graph_with_style(model: &GraphModel, style: &RenderStyle) -> Result<String> {
    let estimated_size = model.nodes().len() * 120 + model.edges().len() * 48 + 256;
    let mut output = String::with_capacity(estimated_size);
    let metadata = model.metadata();

    let _ = writeln!(output, "digraph {} {{", metadata.name);
    if let Some(color) = present(&metadata.background_color) {
        let _ = writeln!(output, "  bgcolor=\"{color}\";");
    }
    if let Some(font) = present(&metadata.font_name) {
        let _ = writeln!(output, "  fontname=\"{font}\";");
    }
    let _ = writeln!(output, "  node [{}];", style.node_defaults);
    let _ = writeln!(output, "  edge [{}];", style.edge_defaults);

    for (position, node) in model.nodes().iter().enumerate() {
        let _ = writeln!(
            output,
            "  n{position} [label=\"{}\", URL=\"{}\", tooltip=\"{}\"];",
            node.name,
            node.url,
            escape_quotes(&node.synopsis)
        );
    }

    let index = model.node_index();
    for edge in model.edges() {
        let from = index.get(edge.from.as_str()).ok_or_else(|| {
            Error::node_not_found(&edge.from).with_operation("render::render_graph")
        })?;
        let to = index.get(edge.to.as_str()).ok_or_else(|| {
            Error::node_not_found(&edge.to).with_operation("render::render_graph")
        })?;

        let _ = write!(output, "  n{from} -> n{to}");
        write_edge_attrs(&mut output, edge);
        output.push_str(";\n");
    }

    output.push_str("}\n");
    debug!(
        nodes = model.nodes().len(),
        edges = model.edges().len(),
        bytes = output.len(),
        "rendered dot document"
    );
    Ok(output)
}

/// Append the optional edge attribute list.
///
/// Present attributes are composed as an ordered list of (key, value) pairs
/// and joined once, always in label, color, style order. No list is emitted
/// when every attribute is absent.
fn write_edge_attrs(output: &mut String, edge: &nodeviz_core::EdgeRecord) {
    let attrs: Vec<(&str, &str)> = [
        ("label", &edge.relation),
        ("color", &edge.color),
        ("style", &edge.style),
    ]
    .into_iter()
    .filter_map(|(key, value)| present(value).map(|v| (key, v)))
    .collect();

    if attrs.is_empty() {
        return;
    }

    output.push_str(" [");
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{key}=\"{value}\"");
    }
    output.push(']');
}

/// Treat both `None` and blank strings as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
