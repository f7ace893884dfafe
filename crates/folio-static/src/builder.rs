//! Page build driver.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use folio_content::{
    load_json, BiographyContent, ContentError, PublicationsContent, ResearchContent,
    SidebarConfig, TeachingContent,
};

use crate::render::{render, Page, PageKind, RenderError};
use crate::shell::Shell;
use crate::templates::TemplateEngine;

/// Sidebar document shared by every page.
pub const SIDEBAR_FILE: &str = "sidebar.json";

/// Configuration for building pages.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding `sidebar.json` and the content documents
    pub content_dir: PathBuf,

    /// Directory the HTML files are written to
    pub output_dir: PathBuf,

    /// Minify the inline stylesheet
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            minify: false,
        }
    }
}

/// Result of building one page.
#[derive(Debug)]
pub struct BuildResult {
    pub page: PageKind,

    /// Written file
    pub output_path: PathBuf,

    /// Size of the written document
    pub bytes: usize,

    /// Build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("{} not found.", path.display())]
    MissingInput { path: PathBuf },

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    /// A required input file does not exist.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, BuildError::MissingInput { .. })
    }
}

/// Builds portfolio pages from their content documents.
pub struct StaticBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build every page in order, stopping at the first failure.
    pub fn build_all(&self) -> Result<Vec<BuildResult>, BuildError> {
        PageKind::ALL
            .into_iter()
            .map(|kind| self.build_page(kind))
            .collect()
    }

    /// Build a single page.
    pub fn build_page(&self, kind: PageKind) -> Result<BuildResult, BuildError> {
        match kind {
            PageKind::Biography => self.build::<BiographyContent>(),
            PageKind::Research => self.build::<ResearchContent>(),
            PageKind::Publications => self.build::<PublicationsContent>(),
            PageKind::Teaching => self.build::<TeachingContent>(),
        }
    }

    fn build<P: Page>(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let kind = P::KIND;

        let sidebar_path = self.config.content_dir.join(SIDEBAR_FILE);
        let content_path = self.config.content_dir.join(kind.content_file());
        require_file(&sidebar_path)?;
        require_file(&content_path)?;

        tracing::info!("Loading sidebar from {}...", sidebar_path.display());
        let sidebar: SidebarConfig = load_json(&sidebar_path)?;

        tracing::info!("Loading content from {}...", content_path.display());
        let content: P = load_json(&content_path)?;

        tracing::info!("Building {}...", kind.output_file());
        let shell = Shell::new(&self.templates, &sidebar).with_minify(self.config.minify);
        let html = render(&shell, &content)?;

        let output_path = self.config.output_dir.join(kind.output_file());
        fs::create_dir_all(&self.config.output_dir).map_err(|source| BuildError::Write {
            path: self.config.output_dir.clone(),
            source,
        })?;

        tracing::info!("Writing to {}...", output_path.display());
        fs::write(&output_path, &html).map_err(|source| BuildError::Write {
            path: output_path.clone(),
            source,
        })?;

        tracing::info!("Done!");

        Ok(BuildResult {
            page: kind,
            output_path,
            bytes: html.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

fn require_file(path: &Path) -> Result<(), BuildError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(BuildError::MissingInput {
            path: path.to_path_buf(),
        })
    }
}
