//! Graph data model for nodeviz.
//!
//! This crate owns the in-memory representation of a graph: the flat
//! [`NodeRecord`]/[`EdgeRecord`] records parsed from text, the graph-level
//! [`GraphMetadata`], and the validated [`GraphModel`] aggregate that the
//! DOT renderer consumes.
//!
//! # Module Structure
//!
//! - [`record`]: record types and line-oriented parsing of the flat formats
//! - [`graph`]: the `GraphModel` aggregate and referential validation

pub mod graph;
pub mod record;

pub use graph::GraphModel;
pub use nodeviz_error::{Error, ErrorKind, Result};
pub use record::{EdgeRecord, GraphMetadata, NodeRecord, parse_edge_records, parse_node_records};
