//! Publications page (`publications.html`).
//!
//! Papers are grouped by year. Conference abstracts share the paper markup
//! but never show a thumbnail, and their section is omitted entirely when
//! there are none.

use folio_content::{LinkRef, Paper, PublicationsContent, YearGroup};
use minijinja::context;

use super::{fragment, Page, PageKind, RenderError};
use crate::templates::TemplateEngine;

impl Page for PublicationsContent {
    const KIND: PageKind = PageKind::Publications;
}

/// One paper. With `show_image`, a missing image falls back to the shared
/// placeholder.
pub fn paper(engine: &TemplateEngine, paper: &Paper, show_image: bool) -> Result<String, RenderError> {
    fragment(engine, "fragments/paper.html", context! { paper, show_image })
}

/// A year heading followed by its papers. Groups without a year get no heading.
pub fn year_group(
    engine: &TemplateEngine,
    group: &YearGroup,
    show_image: bool,
) -> Result<String, RenderError> {
    fragment(engine, "fragments/year_group.html", context! { group, show_image })
}

/// `[label]` links separated by ` / `, led by a single space. Renders
/// nothing when there are no links.
pub fn intro_links(engine: &TemplateEngine, links: &[LinkRef]) -> Result<String, RenderError> {
    fragment(engine, "fragments/intro_links.html", context! { links })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::render::render;
    use crate::shell::Shell;
    use folio_content::PAPER_PLACEHOLDER;
    use pretty_assertions::assert_eq;

    fn link(label: &str, url: &str) -> LinkRef {
        LinkRef {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    fn bare_paper() -> Paper {
        Paper {
            title: "Untitled Preprint".to_string(),
            authors: String::new(),
            venue: "arXiv".to_string(),
            image: None,
            links: vec![],
        }
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let engine = TemplateEngine::new();

        let html = paper(&engine, &bare_paper(), true).unwrap();

        assert!(html.contains(&format!(
            r#"<img src="{}" alt="Untitled Preprint">"#,
            PAPER_PLACEHOLDER
        )));
    }

    #[test]
    fn abstracts_have_no_image() {
        let engine = TemplateEngine::new();
        let mut item = bare_paper();
        item.image = Some("assets/pubs/poster.png".to_string());

        let html = paper(&engine, &item, false).unwrap();

        assert!(html.starts_with(r#"<div class="paper-item no-image">"#));
        assert!(!html.contains("paper-image"));
        assert!(!html.contains("poster.png"));
    }

    #[test]
    fn separates_paper_links() {
        let engine = TemplateEngine::new();
        let mut item = bare_paper();
        item.links = vec![
            link("paper", "https://doi.org/10.1000/1"),
            link("code", "https://github.com/janedoe/nodule"),
        ];

        let html = paper(&engine, &item, true).unwrap();

        assert!(html.contains(
            r#"<a href="https://doi.org/10.1000/1" class="paper-link" target="_blank" rel="noopener">[paper]</a> | <a href="https://github.com/janedoe/nodule" class="paper-link" target="_blank" rel="noopener">[code]</a>"#
        ));
    }

    #[test]
    fn year_heading_is_optional() {
        let engine = TemplateEngine::new();
        let mut group = YearGroup {
            year: Some("2021 & Earlier".to_string()),
            papers: vec![bare_paper()],
        };

        let html = year_group(&engine, &group, true).unwrap();
        assert!(html.contains(r#"<h2 class="year-heading">2021 &amp; Earlier</h2>"#));

        group.year = None;
        let html = year_group(&engine, &group, true).unwrap();
        assert!(html.contains(r#"<div class="year-section no-year">"#));
        assert!(!html.contains("year-heading"));
        assert_eq!(html.matches(r#"<div class="paper-item">"#).count(), 1);
    }

    #[test]
    fn joins_intro_links() {
        let engine = TemplateEngine::new();
        let links = vec![
            link("Google Scholar", "https://scholar.google.com/citations?user=abc"),
            link("ORCID", "https://orcid.org/0000"),
        ];

        let html = intro_links(&engine, &links).unwrap();

        assert_eq!(
            html,
            r#" <a href="https://scholar.google.com/citations?user=abc" target="_blank" rel="noopener">[Google Scholar]</a> / <a href="https://orcid.org/0000" target="_blank" rel="noopener">[ORCID]</a>"#
        );
    }

    #[test]
    fn intro_without_links_has_no_trailing_space() {
        let engine = TemplateEngine::new();
        let sidebar = fixtures::sidebar();
        let mut content: PublicationsContent = fixtures::parse(fixtures::PUBLICATIONS);
        content.intro.links.clear();

        let html = render(&Shell::new(&engine, &sidebar), &content).unwrap();

        assert!(html.contains("<p>Full list on</p>"));
        assert_eq!(intro_links(&engine, &[]).unwrap(), "");
    }

    #[test]
    fn page_embeds_fragment_output() {
        let engine = TemplateEngine::new();
        let sidebar = fixtures::sidebar();
        let content: PublicationsContent = fixtures::parse(fixtures::PUBLICATIONS);

        let html = render(&Shell::new(&engine, &sidebar), &content).unwrap();

        let group = year_group(&engine, &content.publications[0], true).unwrap();
        assert!(html.contains(&group));
        let links = intro_links(&engine, &content.intro.links).unwrap();
        assert!(html.contains(&format!("<p>Full list on{}</p>", links)));
    }

    #[test]
    fn omits_empty_abstracts_section() {
        let engine = TemplateEngine::new();
        let sidebar = fixtures::sidebar();
        let content: PublicationsContent = fixtures::parse(fixtures::PUBLICATIONS);

        let html = render(&Shell::new(&engine, &sidebar), &content).unwrap();

        assert_eq!(html.matches("<html").count(), 1);
        assert_eq!(html.matches("<head>").count(), 1);
        assert_eq!(html.matches("<body>").count(), 1);
        assert!(html.contains(r#"<a href="publications.html" class="active">Publications</a>"#));
        assert!(!html.contains("Selected Conference Abstracts"));
        assert!(html.contains(r#"<h2 class="year-heading">2024</h2>"#));
        assert_eq!(html.matches(r#"<div class="paper-image">"#).count(), 2);
        assert!(html.contains(r#"<img src="assets/pubs/nodule.png" alt="Deep Lung Nodule Detection">"#));
        assert!(html.contains(PAPER_PLACEHOLDER));
        assert!(html.contains("[Google Scholar]</a> / <a"));
    }

    #[test]
    fn renders_abstracts_without_images() {
        let engine = TemplateEngine::new();
        let sidebar = fixtures::sidebar();
        let mut content: PublicationsContent = fixtures::parse(fixtures::PUBLICATIONS);
        content.conference_abstracts = vec![YearGroup {
            year: Some("2023".to_string()),
            papers: vec![bare_paper(), bare_paper()],
        }];

        let html = render(&Shell::new(&engine, &sidebar), &content).unwrap();

        assert!(html.contains(r#"<h1 class="section-title">Selected Conference Abstracts</h1>"#));
        assert_eq!(html.matches(r#"<div class="paper-item no-image">"#).count(), 2);
        assert_eq!(html.matches(r#"<div class="paper-image">"#).count(), 2);

        let divider = html.find("Selected Conference Abstracts").unwrap();
        assert!(html[divider..].contains(r#"<h2 class="year-heading">2023</h2>"#));
        assert!(!html[divider..].contains("paper-image"));
    }
}
