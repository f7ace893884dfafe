//! Renders generated HTML pages to PNG images with headless Chrome.
//!
//! Used for the research project figures: each target page is opened from
//! disk, measured, and captured as one full-height screenshot at a fixed
//! device scale.

pub mod config;
pub mod rasterizer;

pub use config::{CaptureConfig, CaptureTarget};
pub use rasterizer::{file_url, CaptureError, PageMetrics, Rasterizer};
