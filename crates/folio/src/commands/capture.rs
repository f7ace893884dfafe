//! Project figure capture command.

use std::path::Path;

use anyhow::Result;
use folio_capture::Rasterizer;

use crate::config;

/// Run the capture command.
pub fn run(config_path: &Path) -> Result<()> {
    let capture = config::load(config_path)?.capture;

    if capture.targets.is_empty() {
        tracing::warn!("No capture targets configured");
        return Ok(());
    }

    tracing::info!(
        "Capturing {} pages at {}x{}...",
        capture.targets.len(),
        capture.width,
        capture.height
    );

    let rasterizer = Rasterizer::launch(&capture)?;
    rasterizer.capture_all(&capture.targets)?;

    Ok(())
}
