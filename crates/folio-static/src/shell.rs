//! Markup shared by every page: head, navigation bar, sidebar, footer and
//! the client-side script.

use folio_content::{PageMeta, SidebarConfig};
use minijinja::context;
use serde::Serialize;

use crate::assets::AssetPipeline;
use crate::render::{PageKind, RenderError};
use crate::templates::TemplateEngine;

/// A navigation item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavItem {
    /// Display label
    pub label: String,
    /// Link target
    pub href: String,
    /// Whether this is the active page
    pub active: bool,
    /// Open in a new browsing context
    pub new_tab: bool,
}

/// Builds the shared page shell from the sidebar document.
pub struct Shell<'a> {
    engine: &'a TemplateEngine,
    sidebar: &'a SidebarConfig,
    minify: bool,
}

impl<'a> Shell<'a> {
    pub fn new(engine: &'a TemplateEngine, sidebar: &'a SidebarConfig) -> Self {
        Self {
            engine,
            sidebar,
            minify: false,
        }
    }

    /// Minify the inline style block.
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Base stylesheet with the sidebar's theme colours filled in.
    pub fn base_css(&self) -> Result<String, RenderError> {
        let theme = &self.sidebar.theme;
        self.render(
            "base.css",
            context! {
                light => theme.light(),
                dark => theme.dark(),
            },
        )
    }

    /// `<head>` element with the base CSS followed by `page_css`.
    pub fn head(&self, title: &str, description: &str, page_css: &str) -> Result<String, RenderError> {
        let css = format!("{}\n{}", self.base_css()?, page_css);
        let css = if self.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Keeping unminified CSS: {}", e);
                css
            })
        } else {
            css
        };

        self.render(
            "head.html",
            context! {
                title,
                description,
                css,
            },
        )
    }

    /// Navigation entries with `active` marked. Identifiers other than the
    /// four content pages mark nothing.
    pub fn nav_items(&self, active: &str) -> Vec<NavItem> {
        let active = PageKind::from_id(active);

        let mut items: Vec<NavItem> = PageKind::ALL
            .into_iter()
            .map(|kind| NavItem {
                label: kind.label().to_string(),
                href: kind.output_file().to_string(),
                active: Some(kind) == active,
                new_tab: false,
            })
            .collect();

        items.push(NavItem {
            label: "CV".to_string(),
            href: self.sidebar.cv_file.clone(),
            active: false,
            new_tab: true,
        });

        items
    }

    /// The navigation bar.
    pub fn nav(&self, active: &str) -> Result<String, RenderError> {
        self.render(
            "nav.html",
            context! {
                brand => &self.sidebar.nav_brand,
                items => self.nav_items(active),
            },
        )
    }

    /// The left sidebar.
    pub fn sidebar(&self) -> Result<String, RenderError> {
        self.render(
            "sidebar.html",
            context! {
                profile => &self.sidebar.profile,
                links => &self.sidebar.sidebar_links,
            },
        )
    }

    pub fn footer(&self) -> Result<String, RenderError> {
        self.render("footer.html", context! { footer => &self.sidebar.footer })
    }

    pub fn script(&self) -> &'static str {
        AssetPipeline::script()
    }

    /// Assemble a full document for `kind` around its page context.
    pub fn render_page<C: Serialize>(
        &self,
        kind: PageKind,
        meta: &PageMeta,
        content: &C,
    ) -> Result<String, RenderError> {
        let head = self.head(&meta.title, &meta.description, AssetPipeline::page_css(kind))?;
        let nav = self.nav(kind.id())?;
        let sidebar = self.sidebar()?;
        let footer = self.footer()?;

        self.render(
            kind.template(),
            context! {
                head,
                nav,
                sidebar,
                footer,
                script => self.script(),
                content,
            },
        )
    }

    fn render<S: Serialize>(&self, template: &str, ctx: S) -> Result<String, RenderError> {
        self.engine
            .render(template, ctx)
            .map_err(|e| RenderError::new(template, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use folio_content::parse_json;
    use std::path::Path;

    fn sidebar_from(source: &str) -> SidebarConfig {
        parse_json(source, Path::new("sidebar.json")).unwrap()
    }

    #[test]
    fn marks_exactly_one_active_entry() {
        let engine = TemplateEngine::new();
        let sidebar = fixtures::sidebar();
        let shell = Shell::new(&engine, &sidebar);

        let nav = shell.nav("research").unwrap();

        assert_eq!(nav.matches(r#"class="active""#).count(), 1);
        assert!(nav.contains(r#"<a href="research.html" class="active">Research</a>"#));
    }

    #[test]
    fn unknown_page_marks_nothing() {
        let engine = TemplateEngine::new();
        let sidebar = fixtures::sidebar();
        let shell = Shell::new(&engine, &sidebar);

        for id in ["cv", "blog", ""] {
            let nav = shell.nav(id).unwrap();
            assert_eq!(nav.matches(r#"class="active""#).count(), 0, "{id}");
        }
    }

    #[test]
    fn cv_opens_in_new_tab() {
        let engine = TemplateEngine::new();
        let sidebar = fixtures::sidebar();
        let shell = Shell::new(&engine, &sidebar);

        let items = shell.nav_items("bio");
        assert_eq!(items.len(), 5);
        assert_eq!(
            items[4],
            NavItem {
                label: "CV".to_string(),
                href: "files/jane_doe_cv.pdf".to_string(),
                active: false,
                new_tab: true,
            }
        );

        let nav = shell.nav("bio").unwrap();
        assert!(nav.contains(
            r#"<a href="files/jane_doe_cv.pdf" target="_blank" rel="noopener">CV</a>"#
        ));
    }

    #[test]
    fn renders_bio_lines() {
        let engine = TemplateEngine::new();
        let sidebar = sidebar_from(
            r#"{
  "nav_brand": "J",
  "profile": { "name": "J", "bio_lines": ["A", "B"] },
  "footer": { "copyright_year": 2025, "copyright_name": "J" }
}"#,
        );

        let html = Shell::new(&engine, &sidebar).sidebar().unwrap();

        assert_eq!(html.matches(r#"<span class="bio-line">"#).count(), 2);
        assert!(html.contains(r#"<span class="bio-line">A</span><span class="bio-line">B</span>"#));
        assert!(!html.contains(r#"<p class="author__bio">"#));
    }

    #[test]
    fn renders_bio_paragraph() {
        let engine = TemplateEngine::new();
        let sidebar = sidebar_from(
            r#"{
  "nav_brand": "J",
  "profile": { "name": "J", "bio": "Researcher in imaging." },
  "footer": { "copyright_year": 2025, "copyright_name": "J" }
}"#,
        );

        let html = Shell::new(&engine, &sidebar).sidebar().unwrap();

        assert!(html.contains(r#"<p class="author__bio">Researcher in imaging.</p>"#));
        assert!(!html.contains("bio-line"));
    }

    #[test]
    fn falls_back_to_avatar_icon() {
        let engine = TemplateEngine::new();
        let sidebar = sidebar_from(
            r#"{
  "nav_brand": "J",
  "profile": { "name": "J" },
  "footer": { "copyright_year": 2025, "copyright_name": "J" }
}"#,
        );

        let html = Shell::new(&engine, &sidebar).sidebar().unwrap();

        assert!(html.contains(r#"<i class="fas fa-user"></i>"#));
        assert!(!html.contains("<img"));
        assert!(!html.contains("author__bio"));
    }

    #[test]
    fn renders_sidebar_links() {
        let engine = TemplateEngine::new();
        let sidebar = fixtures::sidebar();

        let html = Shell::new(&engine, &sidebar).sidebar().unwrap();

        assert!(html.contains(r#"<img src="assets/img/profile.jpg" alt="Jane Doe">"#));
        assert!(html.contains(
            r#"<li><a href="https://github.com/janedoe" target="_blank" rel="noopener"><i class="fab fa-github" aria-hidden="true"></i> GitHub</a></li>"#
        ));
        assert!(html.contains(
            r#"<li><i class="fas fa-map-marker-alt" aria-hidden="true"></i> Nashville, TN</li>"#
        ));
    }

    #[test]
    fn renders_footer() {
        let engine = TemplateEngine::new();
        let sidebar = fixtures::sidebar();

        let html = Shell::new(&engine, &sidebar).footer().unwrap();

        assert!(html.contains("© 2025 Jane Doe."));
    }

    #[test]
    fn head_uses_theme_defaults() {
        let engine = TemplateEngine::new();
        let sidebar = fixtures::sidebar();
        let shell = Shell::new(&engine, &sidebar);

        let head = shell.head("Bio", "About me", ".page { color: red; }").unwrap();

        assert!(head.contains("<title>Bio</title>"));
        assert!(head.contains(r#"<meta name="description" content="About me">"#));
        assert!(head.contains("--accent-color: #0D9488;"));
        assert!(head.contains("--accent-color: #2DD4BF;"));
        assert!(head.contains("font-awesome/6.5.1/css/all.min.css"));
        assert!(head.contains("academicons.min.css"));

        let base_end = head.find("--action-link-hover: #93C5FD;").unwrap();
        let page_css = head.find(".page { color: red; }").unwrap();
        assert!(page_css > base_end);
        assert_eq!(head.matches("<style>").count(), 1);
    }

    #[test]
    fn head_uses_configured_theme() {
        let engine = TemplateEngine::new();
        let sidebar = sidebar_from(
            r##"{
  "nav_brand": "J",
  "profile": { "name": "J" },
  "footer": { "copyright_year": 2025, "copyright_name": "J" },
  "theme": {
    "light": { "accent_color": "#800020", "link_color": "#1a0dab" },
    "dark": { "link_hover": "#ffffff" }
  }
}"##,
        );

        let css = Shell::new(&engine, &sidebar).base_css().unwrap();

        assert!(css.contains("--accent-color: #800020;"));
        assert!(css.contains("--action-link-color: #1a0dab;"));
        assert!(css.contains("--action-link-hover: #ffffff;"));
        assert!(!css.contains("#0D9488"));
    }

    #[test]
    fn minifies_style_block() {
        let engine = TemplateEngine::new();
        let sidebar = fixtures::sidebar();
        let shell = Shell::new(&engine, &sidebar).with_minify(true);

        let head = shell.head("Bio", "About me", ".page-only {\n  color: red;\n}").unwrap();

        let start = head.find("<style>").unwrap();
        let end = head.find("</style>").unwrap();
        let css = head[start + "<style>".len()..end].trim();
        assert!(!css.contains('\n'));
        assert!(css.contains(".page-only"));
    }
}
