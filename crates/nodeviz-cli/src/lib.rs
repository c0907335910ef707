//! nodeviz command-line interface.
//!
pub mod config;
pub mod input;
pub mod pipeline;
pub mod renderer;

use std::time::Instant;

use tracing::info;

use nodeviz_core::{GraphMetadata, Result};
use nodeviz_error::Error;

pub use config::{DEFAULT_CONFIG_TEMPLATE, FileConfig};
pub use pipeline::build_document;

/// Options for running nodeviz.
pub struct NodevizOptions {
    pub nodes_file: String,
    pub edges_file: String,
    pub graph_name: String,
    pub background_color: Option<String>,
    pub font_name: Option<String>,
    /// When set, the DOT document is also written here for debugging.
    pub dot_file: Option<String>,
}

impl NodevizOptions {
    pub fn metadata(&self) -> GraphMetadata {
        GraphMetadata {
            name: self.graph_name.clone(),
            background_color: self.background_color.clone(),
            font_name: self.font_name.clone(),
        }
    }
}

/// Main entry point: build the DOT document and rasterize it to SVG bytes.
///
/// The document is fully built and validated before the external renderer
/// is invoked; any record or reference failure never reaches a subprocess.
pub fn run_main(opts: &NodevizOptions) -> Result<Vec<u8>> {
    let document = build_document(opts)?;

    if let Some(path) = &opts.dot_file {
        std::fs::write(path, &document).map_err(|e| {
            Error::from(e)
                .with_operation("run_main")
                .with_context("file", path.clone())
        })?;
        info!(path, "dot document written");
    }

    let raster_start = Instant::now();
    let svg = renderer::rasterize_svg(&document)?;
    info!(
        "External rendering: {:.2}s",
        raster_start.elapsed().as_secs_f64()
    );
    Ok(svg)
}
