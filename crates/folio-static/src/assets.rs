//! Inline CSS and JavaScript shared by the generated pages.

use crate::render::PageKind;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Source of the base stylesheet template. Rendered with the resolved
    /// `light` and `dark` palettes.
    pub fn base_css_template() -> &'static str {
        BASE_CSS
    }

    /// Stylesheet appended after the base CSS for one page.
    pub fn page_css(kind: PageKind) -> &'static str {
        match kind {
            PageKind::Biography => BIOGRAPHY_CSS,
            PageKind::Research => RESEARCH_CSS,
            PageKind::Publications => PUBLICATIONS_CSS,
            PageKind::Teaching => TEACHING_CSS,
        }
    }

    /// Client-side script: mobile navigation and the persisted theme toggle.
    pub fn script() -> &'static str {
        SCRIPT
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const BASE_CSS: &str = r#"
    /* Variables */
    :root {
      --primary-color: #494e52;
      --link-color: #494e52;
      --link-hover: #000000;
      --text-color: #494e52;
      --text-muted: #494e52;
      --bg-color: #ffffff;
      --bg-sidebar: #ffffff;
      --border-color: #e0e0e0;
      --shadow: 0 1px 1px rgba(0,0,0,0.125);
      --sidebar-width: 260px;
      --nav-height: 50px;
      --accent-color: {{ light.accent_color }};
      --accent-hover: {{ light.accent_hover }};
      --action-link-color: {{ light.link_color }};
      --action-link-hover: {{ light.link_hover }};
    }

    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    html { scroll-behavior: smooth; }
    body {
      font-family: 'Roboto', -apple-system, BlinkMacSystemFont, sans-serif;
      font-size: 16px;
      line-height: 1.6;
      color: var(--text-color);
      background-color: var(--bg-color);
    }

    a { color: var(--link-color); text-decoration: none; transition: color 0.2s ease; }
    a:hover { color: var(--link-hover); text-decoration: underline; }

    /* Navigation bar */
    nav {
      position: fixed;
      top: 0;
      left: 0;
      right: 0;
      height: var(--nav-height);
      background: var(--bg-color);
      border-bottom: 1px solid var(--border-color);
      z-index: 1000;
      display: flex;
      align-items: center;
      justify-content: center;
    }

    .nav-container {
      width: 100%;
      max-width: 1400px;
      padding: 0 1.5rem;
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .nav-brand {
      font-family: 'Roboto Slab', serif;
      font-size: 1.1rem;
      font-weight: 700;
      color: var(--text-color);
      letter-spacing: -0.5px;
    }
    .nav-brand:hover { text-decoration: none; color: var(--link-color); }

    .nav-links { display: flex; gap: 1.5rem; list-style: none; }
    .nav-links a {
      color: var(--text-muted);
      font-size: 0.85rem;
      font-weight: 400;
      text-transform: uppercase;
      letter-spacing: 0.5px;
    }
    .nav-links a:hover, .nav-links a.active { color: var(--text-color); text-decoration: none; }

    .nav-toggle {
      display: none;
      background: none;
      border: none;
      font-size: 1.25rem;
      cursor: pointer;
      color: var(--text-color);
    }

    .theme-toggle {
      background: none;
      border: none;
      cursor: pointer;
      font-size: 1rem;
      color: var(--text-muted);
      padding: 0.4rem;
      border-radius: 50%;
    }
    .theme-toggle:hover { color: var(--text-color); }

    /* Layout */
    .page-wrapper {
      display: flex;
      margin-top: var(--nav-height);
      min-height: calc(100vh - var(--nav-height));
      max-width: 1400px;
      margin-left: auto;
      margin-right: auto;
    }

    /* Sidebar */
    .sidebar {
      width: var(--sidebar-width);
      flex-shrink: 0;
      background: var(--bg-color);
      border-right: 1px solid var(--border-color);
    }

    .sidebar-content {
      position: sticky;
      top: calc(var(--nav-height) + 1rem);
      padding: 1.5rem 1rem;
    }

    .author__avatar {
      display: block;
      width: 180px;
      height: 180px;
      margin: 0 0 0.75rem 0;
    }

    .author__avatar img {
      width: 100%;
      height: 100%;
      border-radius: 50%;
      object-fit: cover;
      border: 1px solid var(--border-color);
      padding: 3px;
      background: var(--bg-color);
    }

    .author__avatar > i {
      font-size: 6rem;
      color: var(--text-muted);
    }

    .author__content { text-align: left; margin-bottom: 1rem; }

    .author__name {
      font-family: 'Roboto Slab', serif;
      font-size: 1.1rem;
      font-weight: 700;
      color: var(--text-color);
      margin-bottom: 0.25rem;
    }

    .author__bio { font-size: 0.85rem; color: var(--text-color); line-height: 1.5; }
    .author__bio .bio-line { display: block; margin-bottom: 0; }

    .author__urls-wrapper { margin-top: 1rem; }
    .author__urls { list-style: none; font-size: 0.8rem; }
    .author__urls li { white-space: nowrap; padding: 0.2rem 0; color: var(--text-muted); }
    .author__urls li i {
      width: 1.25em;
      text-align: center;
      margin-right: 0.4rem;
      color: var(--text-muted);
    }
    .author__urls a { color: var(--text-color); }
    .author__urls a:hover { color: var(--link-color); text-decoration: underline; }
    .author__urls a i { color: var(--text-muted); }

    /* Main content */
    .main-content { flex: 1; padding: 2rem 3rem 2rem 2.5rem; }

    .main-content h2 {
      font-family: 'Roboto Slab', serif;
      font-size: 1.4rem;
      font-weight: 700;
      color: var(--text-color);
      margin-bottom: 0.6rem;
      padding-bottom: 0.4rem;
      border-bottom: 1px solid var(--border-color);
    }

    .section { margin-bottom: 2rem; }

    .section > p {
      color: var(--text-color);
      margin-bottom: 1.25rem;
      text-align: justify;
      font-size: 1.05rem;
      line-height: 1.7;
    }

    /* Footer */
    footer {
      padding: 1.25rem 1.5rem;
      background: var(--bg-color);
      border-top: 1px solid var(--border-color);
      text-align: center;
    }

    .footer-text { color: var(--text-muted); font-size: 0.8rem; }
    .footer-text a { color: var(--text-muted); }

    /* Dark mode */
    [data-theme="dark"] {
      --primary-color: #e2e2e2;
      --link-color: #e2e2e2;
      --link-hover: #ffffff;
      --text-color: #e2e2e2;
      --text-muted: #e2e2e2;
      --bg-color: #252a34;
      --bg-sidebar: #252a34;
      --border-color: #3a3f4b;
      --accent-color: {{ dark.accent_color }};
      --accent-hover: {{ dark.accent_hover }};
      --action-link-color: {{ dark.link_color }};
      --action-link-hover: {{ dark.link_hover }};
    }

    @media (max-width: 900px) {
      .page-wrapper { flex-direction: column; }

      .sidebar {
        width: 100%;
        border-right: none;
        border-bottom: 1px solid var(--border-color);
      }

      .sidebar-content {
        position: static;
        padding: 1.25rem;
        display: flex;
        flex-direction: column;
        align-items: center;
      }

      .author__avatar { width: 100px; height: 100px; }

      .author__urls {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 0.5rem 1rem;
      }

      .main-content { padding: 1.5rem; max-width: 100%; }
    }

    @media (max-width: 768px) {
      .nav-links {
        display: none;
        position: absolute;
        top: var(--nav-height);
        left: 0;
        right: 0;
        background: var(--bg-color);
        flex-direction: column;
        padding: 1rem 1.5rem;
        gap: 0.75rem;
        border-bottom: 1px solid var(--border-color);
        box-shadow: var(--shadow);
      }
      .nav-links.active { display: flex; }
      .nav-toggle { display: block; }
    }
"#;

const BIOGRAPHY_CSS: &str = r#"
    /* Affiliations */
    .affiliation-item {
      display: flex;
      gap: 0.5rem;
      align-items: stretch;
      margin-bottom: 0.5rem;
    }

    .affiliation-logo {
      width: 100px;
      min-height: 100px;
      flex-shrink: 0;
      background-size: contain;
      background-repeat: no-repeat;
      background-position: center;
    }

    .affiliation-logo i { font-size: 1.5rem; color: var(--text-muted); }

    .affiliation-info h3 {
      font-family: 'Roboto Slab', serif;
      font-size: 1rem;
      font-weight: 700;
      color: var(--text-color);
      margin: 0;
      line-height: 1.4;
    }

    .affiliation-info p { margin: 0; font-size: 0.9rem; line-height: 1.4; }
    .affiliation-info .role { color: var(--text-color); }
    .affiliation-info .department { color: var(--text-muted); }

    /* Degrees */
    .degrees-list { list-style: disc; padding-left: 1.5rem; margin: 0; }
    .degrees-list li { margin-bottom: 0.5rem; font-size: 1rem; line-height: 1.5; }

    /* News */
    .news-container {
      max-height: 350px;
      overflow-y: auto;
      border: 1px solid var(--border-color);
      padding: 0.75rem 1rem;
      border-radius: 4px;
    }

    .news-list { list-style: none; padding-left: 0; margin: 0; }
    .news-item { padding: 0.3rem 0; line-height: 1.5; font-size: 0.9rem; }
    .news-date { font-weight: 700; color: var(--text-color); }
    .news-date::after { content: ": "; }
    .news-content { color: var(--text-color); }

    .section p a { color: var(--action-link-color); }
    .section p a:hover { color: var(--action-link-hover); text-decoration: underline; }

    /* Sponsors */
    .sponsors-grid {
      display: flex;
      flex-wrap: wrap;
      gap: 1.5rem 2.5rem;
      align-items: center;
      justify-content: flex-start;
    }

    .sponsor-logo { height: 40px; width: auto; max-width: 280px; object-fit: contain; }

    [data-theme="dark"] .sponsor-logo { filter: invert(1) hue-rotate(180deg); }
"#;

const RESEARCH_CSS: &str = r#"
    .research-intro { margin-bottom: 2rem; }

    .research-intro h1 {
      font-family: 'Roboto Slab', serif;
      font-size: 1.6rem;
      font-weight: 700;
      color: var(--text-color);
      margin-bottom: 0.75rem;
    }

    .research-interests {
      color: var(--text-color);
      font-size: 1rem;
      font-style: italic;
      margin-bottom: 1.5rem;
      padding-bottom: 1rem;
      border-bottom: 1px solid var(--border-color);
    }

    .projects-heading {
      font-family: 'Roboto Slab', serif;
      font-size: 1.4rem;
      font-weight: 700;
      color: var(--text-color);
      margin-bottom: 1.5rem;
      padding-bottom: 0.4rem;
      border-bottom: 1px solid var(--border-color);
    }

    .project-item {
      margin-bottom: 2.5rem;
      padding-bottom: 2rem;
      border-bottom: 1px solid var(--border-color);
    }

    .project-item:last-child { border-bottom: none; margin-bottom: 0; padding-bottom: 0; }

    .project-title {
      font-family: 'Roboto Slab', serif;
      font-size: 1.15rem;
      font-weight: 600;
      color: #800020;
      margin-bottom: 1rem;
      line-height: 1.4;
    }

    .project-content { display: block; }

    .project-image {
      float: left;
      width: 700px;
      margin-right: 1.5rem;
      margin-bottom: 0.75rem;
      border-radius: 4px;
      overflow: hidden;
      border: 1px solid var(--border-color);
    }

    .project-image img { width: 100%; height: auto; display: block; }

    .project-description p {
      color: var(--text-color);
      font-size: 0.95rem;
      line-height: 1.7;
      margin-bottom: 0.75rem;
      text-align: justify;
    }

    .project-description p:last-child { margin-bottom: 0; }

    .project-content::after { content: ""; display: table; clear: both; }

    @media (max-width: 900px) {
      .project-image {
        float: none;
        width: 100%;
        max-width: 520px;
        margin-right: 0;
        margin-bottom: 1rem;
      }
    }
"#;

const PUBLICATIONS_CSS: &str = r#"
    .section-divider { margin-top: 0.75rem; margin-bottom: 0.3rem; }

    .section-title {
      font-family: 'Roboto Slab', serif;
      font-size: 1.3rem;
      font-weight: 700;
      color: var(--text-color);
      margin-bottom: 0.15rem;
    }

    .pub-intro { margin-bottom: 0.75rem; }

    .pub-intro h1 {
      font-family: 'Roboto Slab', serif;
      font-size: 1.4rem;
      font-weight: 700;
      color: var(--text-color);
      margin-bottom: 0.2rem;
    }

    .pub-intro p { color: var(--text-color); font-size: 0.9rem; margin-bottom: 0; }
    .pub-intro a { color: var(--text-color); font-weight: 500; }
    .pub-intro a:hover { text-decoration: underline; }

    .year-section { margin-bottom: 1rem; }

    .year-heading {
      font-family: 'Roboto Slab', serif;
      font-size: 1.2rem;
      font-weight: 700;
      color: var(--text-color);
      margin-bottom: 0.2rem;
      padding-bottom: 0.1rem;
      border-bottom: 1px solid var(--border-color);
    }

    .year-section.no-year { margin-top: 0.5rem; }

    .paper-item { display: flex; gap: 0.75rem; padding: 0.4rem 0; }
    .paper-item.no-image { gap: 0; padding: 0.3rem 0; }
    .paper-item:last-child { padding-bottom: 0; }

    .paper-image {
      width: 100px;
      height: 65px;
      flex-shrink: 0;
      overflow: hidden;
      border-radius: 4px;
      border: 1px solid var(--border-color);
      background: var(--bg-color);
    }

    .paper-image img { width: 100%; height: 100%; object-fit: cover; }

    .paper-content { flex: 1; min-width: 0; }
    .paper-content p { margin-bottom: 0; text-align: left; }

    .paper-content .paper-title {
      font-family: 'Roboto Slab', serif;
      font-size: 0.95rem;
      font-weight: 600;
      color: var(--accent-color);
      margin-bottom: 0;
      line-height: 1.35;
    }

    .paper-content .paper-authors {
      font-size: 0.8rem;
      color: var(--text-color);
      margin-bottom: 0;
      line-height: 1.35;
    }

    .paper-content .paper-venue {
      font-size: 0.8rem;
      color: var(--text-color);
      font-style: italic;
      margin-bottom: 0;
    }

    .paper-links { font-size: 0.75rem; }
    .paper-link { color: var(--action-link-color); margin-right: 0.25rem; }
    .paper-link:hover { color: var(--action-link-hover); text-decoration: underline; }

    @media (max-width: 600px) {
      .paper-item { flex-direction: column; }
      .paper-image { width: 100%; height: 150px; }
    }
"#;

const TEACHING_CSS: &str = r#"
    .section-heading {
      font-family: 'Roboto Slab', serif;
      font-size: 1.4rem;
      font-weight: 700;
      color: var(--text-color);
      margin-bottom: 0.6rem;
      padding-bottom: 0.4rem;
      border-bottom: 1px solid var(--border-color);
    }

    .philosophy-section, .courses-section, .mentoring-section { margin-bottom: 2rem; }

    .philosophy-text {
      color: var(--text-color);
      font-size: 1rem;
      line-height: 1.7;
      text-align: justify;
    }

    .role-section {
      margin-bottom: 0.75rem;
      padding-bottom: 0.75rem;
      border-bottom: 1px solid var(--border-color);
    }

    .role-section:last-child { border-bottom: none; padding-bottom: 0; }

    .course-list { list-style: none; padding-left: 0; margin: 0; }

    .course-list-item {
      padding: 0.05rem 0;
      padding-left: 1rem;
      position: relative;
      font-size: 0.9rem;
    }

    .course-list-item::before {
      content: "\2022";
      position: absolute;
      left: 0;
      color: var(--text-color);
    }

    .course-code { font-weight: 600; color: var(--text-color); margin-right: 0.25rem; }
    .course-name { color: var(--text-color); }
    .course-semesters { color: var(--text-color); font-size: 0.85rem; margin-left: 0.25rem; }

    .course-host {
      color: var(--text-muted);
      font-size: 0.85rem;
      margin-left: 0.25rem;
      font-style: italic;
    }

    .role-description {
      font-size: 0.9rem;
      color: var(--text-color);
      line-height: 1.6;
      margin: 0.2rem 0;
    }

    .role-meta { font-size: 0.85rem; color: var(--text-muted); margin-top: 0.15rem; }
    .role-title, .role-institution, .role-department { font-weight: 400; }
    .role-title { color: var(--text-color); }
    .role-period { color: var(--text-muted); }

    .mentoring-category { margin-bottom: 0.75rem; }

    .category-heading {
      font-family: 'Roboto Slab', serif;
      font-size: 1rem;
      font-weight: 600;
      color: var(--accent-color);
      margin-bottom: 0.5rem;
    }

    .student-item {
      margin-bottom: 0.75rem;
      padding-left: 1rem;
      border-left: 2px solid var(--border-color);
    }

    .student-name { font-weight: 600; color: var(--text-color); }
    .student-program { font-size: 0.85rem; color: var(--text-color); }
    .student-institution { font-size: 0.85rem; color: var(--text-color); font-style: italic; }
"#;

// Theme values are restricted to THEMES; anything else in storage falls back
// to DEFAULT_THEME.
const SCRIPT: &str = r#"
    (function() {
      'use strict';

      const THEMES = { light: 'fas fa-moon', dark: 'fas fa-sun' };
      const DEFAULT_THEME = 'light';
      const STORAGE_KEY = 'theme';

      const navToggle = document.querySelector('.nav-toggle');
      const navLinks = document.querySelector('.nav-links');

      if (navToggle && navLinks) {
        navToggle.addEventListener('click', () => navLinks.classList.toggle('active'));
        navLinks.querySelectorAll('a').forEach(link => {
          link.addEventListener('click', () => navLinks.classList.remove('active'));
        });
      }

      const themeToggle = document.querySelector('.theme-toggle');
      const themeIcon = themeToggle ? themeToggle.querySelector('i') : null;

      function applyTheme(theme) {
        document.documentElement.setAttribute('data-theme', theme);
        if (themeIcon) {
          themeIcon.className = THEMES[theme];
        }
      }

      const saved = localStorage.getItem(STORAGE_KEY);
      let current = Object.prototype.hasOwnProperty.call(THEMES, saved) ? saved : DEFAULT_THEME;
      applyTheme(current);

      if (themeToggle) {
        themeToggle.addEventListener('click', () => {
          current = current === 'dark' ? 'light' : 'dark';
          localStorage.setItem(STORAGE_KEY, current);
          applyTheme(current);
        });
      }
    })();
"#;
