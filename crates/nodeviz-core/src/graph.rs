//! The validated graph aggregate consumed by the DOT renderer.

use std::collections::HashMap;

use nodeviz_error::{Error, Result};
use tracing::debug;

use crate::record::{EdgeRecord, GraphMetadata, NodeRecord};

/// A complete graph: metadata plus ordered node and edge sequences.
///
/// Built once from caller-supplied records, immutable afterwards. Node input
/// order determines the positional identifier (`n0`, `n1`, ...) each node
/// receives in the rendered document, so the sequences are kept exactly as
/// supplied. Duplicate node names are allowed; name lookup resolves to the
/// first occurrence.
#[derive(Debug, Clone)]
pub struct GraphModel {
    metadata: GraphMetadata,
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
}

impl GraphModel {
    /// Build a model, validating that every edge endpoint names a known node.
    ///
    /// Edges are checked only for referential integrity; duplicates and
    /// self-loops pass through untouched. The first edge with an unresolved
    /// endpoint aborts construction with a `NodeNotFound` error naming the
    /// missing node, before any rendering work can start.
    pub fn build(
        metadata: GraphMetadata,
        nodes: Vec<NodeRecord>,
        edges: Vec<EdgeRecord>,
    ) -> Result<Self> {
        let index = first_occurrence_index(&nodes);
        for edge in &edges {
            for endpoint in [&edge.from, &edge.to] {
                if !index.contains_key(endpoint.as_str()) {
                    return Err(Error::node_not_found(endpoint)
                        .with_operation("graph::build")
                        .with_context("edge", format!("{} -> {}", edge.from, edge.to)));
                }
            }
        }

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            graph = %metadata.name,
            "graph model built"
        );
        Ok(Self {
            metadata,
            nodes,
            edges,
        })
    }

    pub fn metadata(&self) -> &GraphMetadata {
        &self.metadata
    }

    /// Nodes in input order; a node's position is its rendered identifier.
    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    /// Edges in input order.
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Derive the name -> position lookup used to resolve edge endpoints.
    ///
    /// First occurrence wins for duplicate names. The map is recomputed on
    /// demand and never stored on the model.
    pub fn node_index(&self) -> HashMap<&str, usize> {
        first_occurrence_index(&self.nodes)
    }
}

fn first_occurrence_index(nodes: &[NodeRecord]) -> HashMap<&str, usize> {
    let mut index = HashMap::with_capacity(nodes.len());
    for (position, node) in nodes.iter().enumerate() {
        index.entry(node.name.as_str()).or_insert(position);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeviz_error::ErrorKind;

    fn node(name: &str) -> NodeRecord {
        NodeRecord {
            name: name.to_string(),
            path: format!("./{name}"),
            synopsis: String::new(),
            url: String::new(),
        }
    }

    fn edge(from: &str, to: &str) -> EdgeRecord {
        EdgeRecord {
            from: from.to_string(),
            to: to.to_string(),
            relation: None,
            color: None,
            style: None,
        }
    }

    #[test]
    fn test_build_valid_model() {
        let model = GraphModel::build(
            GraphMetadata::default(),
            vec![node("main"), node("pkg1")],
            vec![edge("main", "pkg1")],
        )
        .unwrap();

        assert_eq!(model.nodes().len(), 2);
        assert_eq!(model.edges().len(), 1);
    }

    #[test]
    fn test_build_rejects_unknown_endpoint() {
        let err = GraphModel::build(
            GraphMetadata::default(),
            vec![node("main")],
            vec![edge("main", "ghost")],
        )
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NodeNotFound);
        assert!(err.message().contains("ghost"));
        assert!(err.context().contains(&("node", "ghost".to_string())));
    }

    #[test]
    fn test_build_permits_self_loops_and_duplicates() {
        let model = GraphModel::build(
            GraphMetadata::default(),
            vec![node("main")],
            vec![edge("main", "main"), edge("main", "main")],
        )
        .unwrap();

        assert_eq!(model.edges().len(), 2);
    }

    #[test]
    fn test_node_index_first_occurrence_wins() {
        let model = GraphModel::build(
            GraphMetadata::default(),
            vec![node("main"), node("dup"), node("dup")],
            vec![edge("main", "dup")],
        )
        .unwrap();

        let index = model.node_index();
        assert_eq!(index["main"], 0);
        assert_eq!(index["dup"], 1);
    }

    #[test]
    fn test_node_index_preserves_input_order() {
        let names = ["c", "a", "b"];
        let model = GraphModel::build(
            GraphMetadata::default(),
            names.iter().map(|n| node(n)).collect(),
            Vec::new(),
        )
        .unwrap();

        let index = model.node_index();
        for (position, name) in names.iter().enumerate() {
            assert_eq!(index[name], position);
        }
    }
}
