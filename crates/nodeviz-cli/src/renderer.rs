//! External layout renderer invocation and SVG payload extraction.

use std::io::Write as _;
use std::process::{Command, Stdio};

use nodeviz_error::{Error, Result};
use tracing::debug;

/// Command invoked to lay out and rasterize the document.
const RENDERER_COMMAND: &str = "dot";

/// Fixed marker where the SVG payload starts in the renderer output.
const SVG_MARKER: &[u8] = b"<svg";

/// Pipe the DOT document through the external renderer and return the SVG
/// payload.
pub fn rasterize_svg(document: &str) -> Result<Vec<u8>> {
    let mut child = Command::new(RENDERER_COMMAND)
        .arg("-Tsvg")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            Error::render_failed(format!("failed to spawn '{RENDERER_COMMAND}'"))
                .with_operation("renderer::rasterize_svg")
                .set_source(e)
        })?;

    {
        let stdin = child.stdin.as_mut().ok_or_else(|| {
            Error::render_failed("renderer stdin unavailable")
                .with_operation("renderer::rasterize_svg")
        })?;
        stdin.write_all(document.as_bytes()).map_err(|e| {
            Error::render_failed("failed to write document to renderer")
                .with_operation("renderer::rasterize_svg")
                .set_source(e)
        })?;
    }

    let output = child.wait_with_output().map_err(|e| {
        Error::render_failed("failed to collect renderer output")
            .with_operation("renderer::rasterize_svg")
            .set_source(e)
    })?;

    if !output.status.success() {
        return Err(Error::render_failed(format!(
            "renderer exited with {}",
            output.status
        ))
        .with_operation("renderer::rasterize_svg")
        .with_context(
            "stderr",
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    debug!(bytes = output.stdout.len(), "renderer output collected");
    extract_svg(&output.stdout).map(<[u8]>::to_vec)
}

/// Slice the SVG payload out of the renderer output stream.
///
/// The payload begins at the first occurrence of `<svg`; everything before
/// the marker (XML prologue, DOCTYPE) is discarded.
pub fn extract_svg(output: &[u8]) -> Result<&[u8]> {
    let start = output
        .windows(SVG_MARKER.len())
        .position(|window| window == SVG_MARKER)
        .ok_or_else(|| {
            Error::render_failed("'<svg' marker not found in renderer output")
                .with_operation("renderer::extract_svg")
        })?;
    Ok(&output[start..])
}
