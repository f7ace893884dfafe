//! Per-page renderers.
//!
//! Each page type maps one content document to a complete HTML document.
//!
//! The fragment functions in the submodules (`biography::affiliation`,
//! `publications::paper`, `teaching::role`, ...) are public API for rendering
//! a single content item on its own, e.g. to embed one paper elsewhere. Full
//! pages include the same fragment templates, so a fragment renders exactly
//! as it appears inside its page.

use std::fmt;
use std::str::FromStr;

use folio_content::PageContent;
use serde::Serialize;

use crate::shell::Shell;
use crate::templates::TemplateEngine;

pub mod biography;
pub mod publications;
pub mod research;
pub mod teaching;

/// The four content pages of a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Biography,
    Research,
    Publications,
    Teaching,
}

impl PageKind {
    /// All pages in build order.
    pub const ALL: [PageKind; 4] = [
        PageKind::Biography,
        PageKind::Research,
        PageKind::Publications,
        PageKind::Teaching,
    ];

    /// Identifier used for the active navigation entry and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            PageKind::Biography => "bio",
            PageKind::Research => "research",
            PageKind::Publications => "publications",
            PageKind::Teaching => "teaching",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            PageKind::Biography => "Biography",
            PageKind::Research => "Research",
            PageKind::Publications => "Publications",
            PageKind::Teaching => "Teaching",
        }
    }

    /// Content document read for this page.
    pub fn content_file(self) -> &'static str {
        match self {
            PageKind::Biography => "content_index.json",
            PageKind::Research => "content_research.json",
            PageKind::Publications => "content_publications.json",
            PageKind::Teaching => "content_teaching.json",
        }
    }

    /// Generated file name, also the navigation target.
    pub fn output_file(self) -> &'static str {
        match self {
            PageKind::Biography => "index.html",
            PageKind::Research => "research.html",
            PageKind::Publications => "publications.html",
            PageKind::Teaching => "teaching.html",
        }
    }

    /// Page template.
    pub fn template(self) -> &'static str {
        match self {
            PageKind::Biography => "biography.html",
            PageKind::Research => "research.html",
            PageKind::Publications => "publications.html",
            PageKind::Teaching => "teaching.html",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|k| k.id()).collect();
            format!("unknown page '{}', expected one of: {}", s, known.join(", "))
        })
    }
}

/// A content document that renders to a page.
pub trait Page: PageContent + Serialize {
    const KIND: PageKind;
}

/// Render a complete document for `content`.
pub fn render<P: Page>(shell: &Shell<'_>, content: &P) -> Result<String, RenderError> {
    shell.render_page(P::KIND, content.meta(), content)
}

/// Render a single fragment template.
pub(crate) fn fragment<S: Serialize>(
    engine: &TemplateEngine,
    template: &str,
    ctx: S,
) -> Result<String, RenderError> {
    engine
        .render(template, ctx)
        .map_err(|e| RenderError::new(template, e))
}

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
#[error("Failed to render template {template}: {source}")]
pub struct RenderError {
    pub template: String,
    pub source: minijinja::Error,
}

impl RenderError {
    pub(crate) fn new(template: &str, source: minijinja::Error) -> Self {
        Self {
            template: template.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_ids() {
        assert_eq!("research".parse::<PageKind>(), Ok(PageKind::Research));
        assert_eq!(PageKind::from_id("bio"), Some(PageKind::Biography));
        assert_eq!(PageKind::from_id("cv"), None);

        let err = "blog".parse::<PageKind>().unwrap_err();
        assert!(err.contains("bio, research, publications, teaching"));
    }

    #[test]
    fn maps_pages_to_files() {
        let files: Vec<(&str, &str)> = PageKind::ALL
            .iter()
            .map(|k| (k.content_file(), k.output_file()))
            .collect();

        assert_eq!(
            files,
            vec![
                ("content_index.json", "index.html"),
                ("content_research.json", "research.html"),
                ("content_publications.json", "publications.html"),
                ("content_teaching.json", "teaching.html"),
            ]
        );
    }
}
