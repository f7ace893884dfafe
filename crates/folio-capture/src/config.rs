//! Capture settings, read from the `[capture]` table of `folio.toml`.

use std::path::PathBuf;

use serde::Deserialize;

/// Viewport, scale and the pages to capture.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaptureConfig {
    /// Viewport width in CSS pixels
    pub width: u32,

    /// Viewport height in CSS pixels
    pub height: u32,

    /// Device scale factor. 2 is enough for the web, 3 is sharp on high-DPI
    /// displays, 4 mostly grows the file.
    pub scale: f64,

    pub targets: Vec<CaptureTarget>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 900,
            scale: 3.0,
            targets: vec![
                CaptureTarget::new(
                    "projects/alzheimers.html",
                    "assets/research/research_alzheimers.png",
                ),
                CaptureTarget::new("projects/copd.html", "assets/research/research_copd.png"),
            ],
        }
    }
}

/// An HTML file and the PNG it is captured to.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaptureTarget {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl CaptureTarget {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
        }
    }
}
