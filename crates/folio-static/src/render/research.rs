//! Research page (`research.html`).

use folio_content::{Project, ResearchContent};
use minijinja::context;

use super::{fragment, Page, PageKind, RenderError};
use crate::templates::TemplateEngine;

impl Page for ResearchContent {
    const KIND: PageKind = PageKind::Research;
}

/// One project: title, optional image, description paragraphs.
pub fn project(engine: &TemplateEngine, project: &Project) -> Result<String, RenderError> {
    fragment(engine, "fragments/project.html", context! { project })
}
