//! Record file reading.

use std::fs;

use nodeviz_core::{EdgeRecord, NodeRecord, Result, parse_edge_records, parse_node_records};
use nodeviz_error::Error;

/// Read and parse the node record file.
pub fn load_nodes(path: &str) -> Result<Vec<NodeRecord>> {
    let text = read_records(path)?;
    parse_node_records(&text).map_err(|e| e.with_context("file", path))
}

/// Read and parse the edge record file.
pub fn load_edges(path: &str) -> Result<Vec<EdgeRecord>> {
    let text = read_records(path)?;
    parse_edge_records(&text).map_err(|e| e.with_context("file", path))
}

fn read_records(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::from(e)
            .with_operation("input::read_records")
            .with_context("file", path)
    })
}
