//! DOT serialization for nodeviz graph models.
//!
//! This crate turns a validated [`GraphModel`](nodeviz_core::GraphModel)
//! into the textual directed-graph document consumed by the external layout
//! renderer. Serialization is pure and deterministic: no I/O, identical
//! input always yields an identical document.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT format utilities and helpers
//! - [`style`]: default node/edge styling passed to the renderer
//! - [`render`]: the `GraphModel` -> document serialization

mod dot;
mod render;
mod style;

pub use dot::escape_quotes;
pub use render::{render_graph, render_graph_with_style};
pub use style::RenderStyle;
