//! Biography page (`index.html`).

use folio_content::{Affiliation, BiographyContent, Degree, NewsItem, Sponsor};
use minijinja::context;

use super::{fragment, Page, PageKind, RenderError};
use crate::templates::TemplateEngine;

impl Page for BiographyContent {
    const KIND: PageKind = PageKind::Biography;
}

/// One affiliation block. Image logos become a background image, anything
/// else an icon glyph.
pub fn affiliation(engine: &TemplateEngine, affiliation: &Affiliation) -> Result<String, RenderError> {
    fragment(engine, "fragments/affiliation.html", context! { affiliation })
}

pub fn degree(engine: &TemplateEngine, degree: &Degree) -> Result<String, RenderError> {
    fragment(engine, "fragments/degree.html", context! { degree })
}

pub fn news_item(engine: &TemplateEngine, item: &NewsItem) -> Result<String, RenderError> {
    fragment(engine, "fragments/news.html", context! { item })
}

pub fn sponsor(engine: &TemplateEngine, sponsor: &Sponsor) -> Result<String, RenderError> {
    fragment(engine, "fragments/sponsor.html", context! { sponsor })
}
