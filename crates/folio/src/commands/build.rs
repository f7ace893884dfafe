//! Page build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_static::{BuildConfig, PageKind, StaticBuilder};

use crate::config;

/// Command-line overrides for the `[site]` table.
#[derive(Debug, Default)]
pub struct BuildArgs {
    pub page: Option<PageKind>,
    pub content_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub minify: bool,
}

/// Run the build command.
pub fn run(config_path: &Path, args: BuildArgs) -> Result<()> {
    let site = config::load(config_path)?.site;

    let config = BuildConfig {
        content_dir: args.content_dir.unwrap_or(site.content_dir),
        output_dir: args.output.unwrap_or(site.output_dir),
        minify: args.minify || site.minify,
    };

    let builder = StaticBuilder::new(config);
    let results = match args.page {
        Some(kind) => vec![builder.build_page(kind)?],
        None => builder.build_all()?,
    };

    for result in &results {
        tracing::debug!(
            "Built {} ({} bytes) in {}ms",
            result.output_path.display(),
            result.bytes,
            result.duration_ms
        );
    }

    Ok(())
}
