//! Record types and line-oriented parsing of the two flat input formats.
//!
//! Nodes come one per line with `|`-separated fields (`name|path|synopsis|url`),
//! edges with `,`-separated fields (`from,to[,relation,color,style]`). Blank
//! lines and lines starting with `#` are skipped; every field is trimmed.

use nodeviz_error::{Error, Result};
use tracing::debug;

/// One graph node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    /// Unique identifier, doubles as the rendered label. Never empty.
    pub name: String,
    /// Auxiliary metadata, retained but not used by rendering.
    pub path: String,
    /// Free text shown as the node tooltip.
    pub synopsis: String,
    /// Link target, embedded verbatim.
    pub url: String,
}

/// One directed relationship between two named nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    /// Optional edge label.
    pub relation: Option<String>,
    /// Optional per-edge color override.
    pub color: Option<String>,
    /// Optional per-edge style override.
    pub style: Option<String>,
}

/// Graph-level attributes.
///
/// `name` is emitted verbatim as the graph identifier in the rendered
/// document; callers own its validity as a bare identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphMetadata {
    pub name: String,
    pub background_color: Option<String>,
    pub font_name: Option<String>,
}

/// Iterate content lines: 1-based line number plus trimmed text, with blank
/// lines and `#` comments filtered out.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Parse the `name|path|synopsis|url` node record format.
///
/// Every content line must carry exactly 4 fields and a non-empty name.
pub fn parse_node_records(text: &str) -> Result<Vec<NodeRecord>> {
    let mut records = Vec::new();
    for (line_no, line) in content_lines(text) {
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(Error::record_invalid(format!(
                "expected 'name|path|synopsis|url', got {} fields",
                fields.len()
            ))
            .with_operation("record::parse_node_records")
            .with_context("line", line_no.to_string())
            .with_context("record", line));
        }
        if fields[0].is_empty() {
            return Err(Error::record_invalid("node name must not be empty")
                .with_operation("record::parse_node_records")
                .with_context("line", line_no.to_string()));
        }
        records.push(NodeRecord {
            name: fields[0].to_string(),
            path: fields[1].to_string(),
            synopsis: fields[2].to_string(),
            url: fields[3].to_string(),
        });
    }
    debug!(records = records.len(), "parsed node records");
    Ok(records)
}

/// Parse the `from,to[,relation,color,style]` edge record format.
///
/// The two endpoint fields are required; the trailing three are optional
/// and map to `None` when absent or blank.
pub fn parse_edge_records(text: &str) -> Result<Vec<EdgeRecord>> {
    let mut records = Vec::new();
    for (line_no, line) in content_lines(text) {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 2 {
            return Err(
                Error::record_invalid("expected 'from,to[,relation,color,style]'")
                    .with_operation("record::parse_edge_records")
                    .with_context("line", line_no.to_string())
                    .with_context("record", line),
            );
        }
        records.push(EdgeRecord {
            from: fields[0].to_string(),
            to: fields[1].to_string(),
            relation: optional_field(&fields, 2),
            color: optional_field(&fields, 3),
            style: optional_field(&fields, 4),
        });
    }
    debug!(records = records.len(), "parsed edge records");
    Ok(records)
}

fn optional_field(fields: &[&str], index: usize) -> Option<String> {
    fields
        .get(index)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
