//! Headless Chrome screenshots of local HTML files.

use std::fs;
use std::path::{Path, PathBuf};

use headless_chrome::protocol::cdp::{Emulation, Page};
use headless_chrome::{Browser, LaunchOptions};

use crate::config::{CaptureConfig, CaptureTarget};

/// Errors that can occur while capturing a page.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("{} not found: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load {url}: {message}")]
    Navigate { url: String, message: String },

    #[error("Screenshot of {url} failed: {message}")]
    Screenshot { url: String, message: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `file://` URL for a local file, resolved to an absolute path.
pub fn file_url(path: &Path) -> Result<String, CaptureError> {
    let absolute = fs::canonicalize(path).map_err(|source| CaptureError::Source {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format!("file://{}", absolute.display()))
}

/// Device metrics for a full-page screenshot: the configured width, the page
/// height (never less than the viewport) and the device scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

impl PageMetrics {
    /// Metrics for a page whose measured `scrollHeight` is `measured`. An
    /// unmeasurable page keeps the viewport height.
    pub fn full_page(measured: Option<f64>, width: u32, height: u32, scale: f64) -> Self {
        let page_height = measured
            .filter(|h| h.is_finite() && *h > 0.0)
            .map(|h| h.ceil().min(f64::from(u32::MAX)) as u32)
            .unwrap_or(height)
            .max(height);

        Self {
            width,
            height: page_height,
            scale,
        }
    }

    fn device_override(&self) -> Emulation::SetDeviceMetricsOverride {
        Emulation::SetDeviceMetricsOverride {
            width: self.width,
            height: self.height,
            device_scale_factor: self.scale,
            mobile: false,
            scale: None,
            screen_width: None,
            screen_height: None,
            position_x: None,
            position_y: None,
            dont_set_visible_size: None,
            screen_orientation: None,
            viewport: None,
            display_feature: None,
            device_posture: None,
        }
    }
}

/// A running headless browser with a fixed viewport.
pub struct Rasterizer {
    browser: Browser,
    width: u32,
    height: u32,
    scale: f64,
}

impl Rasterizer {
    /// Launch headless Chrome sized to the configured viewport.
    pub fn launch(config: &CaptureConfig) -> Result<Self, CaptureError> {
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((config.width, config.height)))
            .build()
            .map_err(|e| CaptureError::Launch(format!("invalid launch options: {}", e)))?;

        let browser = Browser::new(launch_options).map_err(|e| CaptureError::Launch(e.to_string()))?;

        Ok(Self {
            browser,
            width: config.width,
            height: config.height,
            scale: config.scale,
        })
    }

    /// Capture every target in order, stopping at the first failure.
    pub fn capture_all(&self, targets: &[CaptureTarget]) -> Result<(), CaptureError> {
        for target in targets {
            self.capture(target)?;
        }
        Ok(())
    }

    /// Open `target.source`, screenshot the full page height and write the
    /// PNG to `target.output`.
    pub fn capture(&self, target: &CaptureTarget) -> Result<(), CaptureError> {
        let url = file_url(&target.source)?;
        tracing::debug!("Capturing {}", url);

        let navigate_err = |e: &dyn std::fmt::Display| CaptureError::Navigate {
            url: url.clone(),
            message: e.to_string(),
        };

        let tab = self.browser.new_tab().map_err(|e| navigate_err(&e))?;
        tab.navigate_to(&url).map_err(|e| navigate_err(&e))?;
        tab.wait_until_navigated().map_err(|e| navigate_err(&e))?;

        let measured = tab
            .evaluate("document.documentElement.scrollHeight", false)
            .ok()
            .and_then(|result| result.value)
            .and_then(|value| value.as_f64());
        let metrics = PageMetrics::full_page(measured, self.width, self.height, self.scale);
        tracing::debug!("Page size {}x{} at {}x", metrics.width, metrics.height, metrics.scale);

        let screenshot_err = |e: &dyn std::fmt::Display| CaptureError::Screenshot {
            url: url.clone(),
            message: e.to_string(),
        };

        // Grow the viewport to the whole page so nothing below the fold is
        // clipped, and render at the device scale.
        tab.call_method(metrics.device_override())
            .map_err(|e| screenshot_err(&e))?;

        let png = tab
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| screenshot_err(&e))?;

        if let Some(parent) = target.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| CaptureError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&target.output, png).map_err(|source| CaptureError::Write {
            path: target.output.clone(),
            source,
        })?;

        if let Err(e) = tab.close(true) {
            tracing::debug!("Failed to close tab: {}", e);
        }

        tracing::info!("Saved: {} ({}x resolution)", target.output.display(), self.scale);
        Ok(())
    }
}
