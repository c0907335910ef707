//! Core processing pipeline: read records → build model → render document.

use std::time::Instant;

use tracing::info;

use nodeviz_core::{GraphModel, Result};
use nodeviz_dot::render_graph;

use crate::NodevizOptions;
use crate::input::{load_edges, load_nodes};

/// Build the DOT document for the configured inputs.
///
/// This is the transactional half of the pipeline: any record, reference,
/// or render failure aborts here, before the external renderer is touched.
pub fn build_document(opts: &NodevizOptions) -> Result<String> {
    let parse_start = Instant::now();
    let nodes = load_nodes(&opts.nodes_file)?;
    let edges = load_edges(&opts.edges_file)?;
    info!(
        "Record parsing: {:.2}s ({} nodes, {} edges)",
        parse_start.elapsed().as_secs_f64(),
        nodes.len(),
        edges.len()
    );

    let model = GraphModel::build(opts.metadata(), nodes, edges)?;

    let render_start = Instant::now();
    let document = render_graph(&model)?;
    info!(
        "Document rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );

    Ok(document)
}
