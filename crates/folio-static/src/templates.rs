//! Template engine for rendering portfolio pages.

use folio_content::PAPER_PLACEHOLDER;
use minijinja::{
    escape_formatter, AutoEscape, Environment, Error, ErrorKind, Output, State, Value,
};
use serde::Serialize;

use crate::assets::AssetPipeline;

/// Template engine using minijinja.
///
/// Templates ending in `.html` auto-escape interpolated strings. Markup fields
/// are passed through with the `safe` filter.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_formatter(html_formatter);
        env.add_global("paper_placeholder", PAPER_PLACEHOLDER);

        env.add_template("base.css", AssetPipeline::base_css_template())
            .expect("Failed to add base stylesheet template");

        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .expect("Failed to add built-in template");
        }

        Self { env }
    }

    /// Render a named template.
    pub fn render<S: Serialize>(&self, template: &str, ctx: S) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;
        tmpl.render(ctx)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Like minijinja's default formatter, but leaves `/` alone so paths and URLs
/// stay readable in the output.
fn html_formatter(out: &mut Output<'_>, state: &State<'_, '_>, value: &Value) -> Result<(), Error> {
    if matches!(state.auto_escape(), AutoEscape::None) || value.is_safe() {
        return escape_formatter(out, state, value);
    }

    match value.as_str() {
        Some(text) => out
            .write_str(&escape_html(text))
            .map_err(|_| Error::new(ErrorKind::WriteFailure, "failed to write template output")),
        None => escape_formatter(out, state, value),
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const TEMPLATES: [(&str, &str); 21] = [
    ("head.html", HEAD_TEMPLATE),
    ("nav.html", NAV_TEMPLATE),
    ("sidebar.html", SIDEBAR_TEMPLATE),
    ("footer.html", FOOTER_TEMPLATE),
    ("page.html", PAGE_TEMPLATE),
    ("biography.html", BIOGRAPHY_TEMPLATE),
    ("research.html", RESEARCH_TEMPLATE),
    ("publications.html", PUBLICATIONS_TEMPLATE),
    ("teaching.html", TEACHING_TEMPLATE),
    ("fragments/affiliation.html", AFFILIATION_FRAGMENT),
    ("fragments/degree.html", DEGREE_FRAGMENT),
    ("fragments/news.html", NEWS_FRAGMENT),
    ("fragments/sponsor.html", SPONSOR_FRAGMENT),
    ("fragments/project.html", PROJECT_FRAGMENT),
    ("fragments/paper.html", PAPER_FRAGMENT),
    ("fragments/year_group.html", YEAR_GROUP_FRAGMENT),
    ("fragments/intro_links.html", INTRO_LINKS_FRAGMENT),
    ("fragments/course.html", COURSE_FRAGMENT),
    ("fragments/role.html", ROLE_FRAGMENT),
    ("fragments/student.html", STUDENT_FRAGMENT),
    ("fragments/mentoring.html", MENTORING_FRAGMENT),
];

const HEAD_TEMPLATE: &str = r##"<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="description" content="{{ description }}">
  <title>{{ title }}</title>

  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700&family=Roboto+Slab:wght@400;500;700&display=swap" rel="stylesheet">
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/gh/jpswalsh/academicons@1/css/academicons.min.css">

  <style>
{{ css | safe }}
  </style>
</head>"##;

const NAV_TEMPLATE: &str = r##"<nav>
    <div class="nav-container">
      <a href="index.html" class="nav-brand">{{ brand }}</a>
      <button class="nav-toggle" aria-label="Toggle navigation">
        <i class="fas fa-bars"></i>
      </button>
      <ul class="nav-links">
      {%- for item in items %}
        <li><a href="{{ item.href }}"{% if item.active %} class="active"{% endif %}{% if item.new_tab %} target="_blank" rel="noopener"{% endif %}>{{ item.label }}</a></li>
      {%- endfor %}
      </ul>
      <button class="theme-toggle" aria-label="Toggle dark mode">
        <i class="fas fa-moon"></i>
      </button>
    </div>
  </nav>"##;

const SIDEBAR_TEMPLATE: &str = r##"<aside class="sidebar">
      <div class="sidebar-content">
        <div class="author__avatar">
          {% if profile.image %}<img src="{{ profile.image }}" alt="{{ profile.name }}">{% else %}<i class="fas fa-user"></i>{% endif %}
        </div>
        <div class="author__content">
          <h3 class="author__name">{{ profile.name }}</h3>
          {%- if profile.bio.kind == "lines" %}
          <div class="author__bio">{% for line in profile.bio.value %}<span class="bio-line">{{ line | safe }}</span>{% endfor %}</div>
          {%- elif profile.bio.kind == "paragraph" %}
          <p class="author__bio">{{ profile.bio.value | safe }}</p>
          {%- endif %}
        </div>
        <div class="author__urls-wrapper">
          <ul class="author__urls">
          {%- for link in links %}
            {% if link.url -%}
            <li><a href="{{ link.url }}" target="_blank" rel="noopener"><i class="{{ link.icon }}" aria-hidden="true"></i> {{ link.label }}</a></li>
            {%- else -%}
            <li><i class="{{ link.icon }}" aria-hidden="true"></i> {{ link.label }}</li>
            {%- endif %}
          {%- endfor %}
          </ul>
        </div>
      </div>
    </aside>"##;

const FOOTER_TEMPLATE: &str = r##"<footer>
    <p class="footer-text">
      © {{ footer.copyright_year }} {{ footer.copyright_name }}.
    </p>
  </footer>"##;

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
{{ head | safe }}
<body>
  {{ nav | safe }}

  <div class="page-wrapper">
    {{ sidebar | safe }}

    <main class="main-content">
{% block content %}{% endblock %}
    </main>
  </div>

  {{ footer | safe }}

  <script>{{ script | safe }}</script>
</body>
</html>
"##;

const BIOGRAPHY_TEMPLATE: &str = r##"{% extends "page.html" %}

{% block content %}
      <section class="section">
        <h2>Biography</h2>
        {%- for paragraph in content.bio %}
        <p>{{ paragraph | safe }}</p>
        {%- endfor %}
      </section>

      <section class="section">
        <h2>Current Affiliations</h2>
        {%- for affiliation in content.affiliations %}
        {% include "fragments/affiliation.html" %}
        {%- endfor %}
      </section>

      <section class="section">
        <h2>Degrees</h2>
        <ul class="degrees-list">
          {%- for degree in content.degrees %}
          {% include "fragments/degree.html" %}
          {%- endfor %}
        </ul>
      </section>

      <section class="section">
        <h2>News</h2>
        <div class="news-container">
          <ul class="news-list">
            {%- for item in content.news %}
            {% include "fragments/news.html" %}
            {%- endfor %}
          </ul>
        </div>
      </section>

      <section class="section">
        <h2>Affiliations &amp; Sponsors</h2>
        <div class="sponsors-grid">
          {%- for sponsor in content.sponsors %}
          {% include "fragments/sponsor.html" %}
          {%- endfor %}
        </div>
      </section>
{% endblock %}"##;

const RESEARCH_TEMPLATE: &str = r##"{% extends "page.html" %}

{% block content %}
      <div class="research-intro">
        <h1>Research Interests</h1>
        <p class="research-interests">{{ content.interests | join(", ") }}</p>
      </div>

      <h2 class="projects-heading">Research Projects</h2>
      {%- for project in content.projects %}
      {% include "fragments/project.html" %}
      {%- endfor %}
{% endblock %}"##;

const PUBLICATIONS_TEMPLATE: &str = r##"{% extends "page.html" %}

{% block content %}
      <div class="pub-intro">
        <h1>{{ content.intro.title }}</h1>
        <p>{{ content.intro.description | safe }}{% with links = content.intro.links %}{% include "fragments/intro_links.html" %}{% endwith %}</p>
      </div>
      {%- with show_image = true %}
      {%- for group in content.publications %}
      {% include "fragments/year_group.html" %}
      {%- endfor %}
      {%- endwith %}
      {%- if content.conference_abstracts %}

      <div class="section-divider">
        <h1 class="section-title">Selected Conference Abstracts</h1>
      </div>
      {%- with show_image = false %}
      {%- for group in content.conference_abstracts %}
      {% include "fragments/year_group.html" %}
      {%- endfor %}
      {%- endwith %}
      {%- endif %}
{% endblock %}"##;

const TEACHING_TEMPLATE: &str = r##"{% extends "page.html" %}

{% block content %}
      {%- if content.philosophy %}
      <section class="philosophy-section">
        <h2 class="section-heading">Teaching Philosophy</h2>
        <p class="philosophy-text">{{ content.philosophy | safe }}</p>
      </section>
      {%- endif %}

      <section class="courses-section">
        <h2 class="section-heading">Courses</h2>
        {%- for role in content.courses %}
        {% include "fragments/role.html" %}
        {%- endfor %}
      </section>

      <section class="mentoring-section">
        <h2 class="section-heading">Mentoring</h2>
        {%- for category in content.mentoring %}
        {% include "fragments/mentoring.html" %}
        {%- endfor %}
      </section>
{% endblock %}"##;

const AFFILIATION_FRAGMENT: &str = r##"<div class="affiliation-item">
          {% if affiliation.logo.kind == "image" -%}
          <div class="affiliation-logo" style="background-image: url('{{ affiliation.logo.value }}');"></div>
          {%- else -%}
          <div class="affiliation-logo"><i class="fas {{ affiliation.logo.value }}"></i></div>
          {%- endif %}
          <div class="affiliation-info">
            <h3>{{ affiliation.institution }}</h3>
            <p class="role">{{ affiliation.role }}</p>
            <p class="department">{% for line in affiliation.department %}{% if not loop.first %}<br>{% endif %}{{ line }}{% endfor %}</p>
          </div>
        </div>"##;

const DEGREE_FRAGMENT: &str = r##"<li><strong>{{ degree.degree }}, {{ degree.field }},</strong> {{ degree.institution }}, {{ degree.location }}</li>"##;

const NEWS_FRAGMENT: &str = r##"<li class="news-item">
              <span class="news-date">{{ item.date }}</span><span class="news-content">{{ item.content | safe }}</span>
            </li>"##;

const SPONSOR_FRAGMENT: &str = r##"<img src="{{ sponsor.logo }}" alt="{{ sponsor.name }}" class="sponsor-logo">"##;

const PROJECT_FRAGMENT: &str = r##"<div class="project-item">
        <h3 class="project-title">{{ project.title }}</h3>
        <div class="project-content">
          {%- if project.image %}
          <div class="project-image">
            <img src="{{ project.image }}" alt="{{ project.title }}">
          </div>
          {%- endif %}
          <div class="project-description">
            {%- for paragraph in project.description %}
            <p>{{ paragraph | safe }}</p>
            {%- endfor %}
          </div>
        </div>
      </div>"##;

const PAPER_FRAGMENT: &str = r##"<div class="paper-item{% if not show_image %} no-image{% endif %}">
          {%- if show_image %}
          <div class="paper-image">
            <img src="{{ paper.image or paper_placeholder }}" alt="{{ paper.title }}">
          </div>
          {%- endif %}
          <div class="paper-content">
            <h3 class="paper-title">{{ paper.title }}</h3>
            <p class="paper-authors">{{ paper.authors }}</p>
            <p class="paper-venue">{{ paper.venue }}</p>
            <div class="paper-links">
              {% for link in paper.links %}{% if not loop.first %} | {% endif %}<a href="{{ link.url }}" class="paper-link" target="_blank" rel="noopener">[{{ link.label }}]</a>{% endfor %}
            </div>
          </div>
        </div>"##;

const YEAR_GROUP_FRAGMENT: &str = r##"{% if group.year -%}
      <div class="year-section">
        <h2 class="year-heading">{{ group.year }}</h2>
      {%- else -%}
      <div class="year-section no-year">
      {%- endif %}
        {%- for paper in group.papers %}
        {% include "fragments/paper.html" %}
        {%- endfor %}
      </div>"##;

const INTRO_LINKS_FRAGMENT: &str = r##"{% for link in links %}{% if loop.first %} {% else %} / {% endif %}<a href="{{ link.url }}" target="_blank" rel="noopener">[{{ link.label }}]</a>{% endfor %}"##;

const COURSE_FRAGMENT: &str = r##"<li class="course-list-item">
            <span class="course-code">{{ course.code }}</span>
            <span class="course-name">{{ course.name }}</span>
            <span class="course-semesters">({{ course.semesters | join(", ") }})</span>{% if course.host %} <span class="course-host">[Host: {{ course.host }}]</span>{% endif %}
          </li>"##;

const ROLE_FRAGMENT: &str = r##"<div class="role-section">
        <ul class="course-list">
          {%- for course in role.courses_list %}
          {% include "fragments/course.html" %}
          {%- endfor %}
        </ul>
        <p class="role-description">{{ role.description | safe }}</p>
        <div class="role-meta">
          <span class="role-title">{{ role.role }}</span>,
          {% if role.department %}<span class="role-department">{{ role.department }}</span>, {% endif %}<span class="role-institution">{{ role.institution }}</span>,
          <span class="role-location">{{ role.location }}</span>
          <span class="role-period">({{ role.period }})</span>
        </div>
      </div>"##;

const STUDENT_FRAGMENT: &str = r##"<div class="student-item">
            <div class="student-name">{{ student.name }}</div>
            <div class="student-program">{{ student.program }} ({{ student.period }})</div>
            <div class="student-institution">{{ student.institution }}</div>
          </div>"##;

const MENTORING_FRAGMENT: &str = r##"<div class="mentoring-category">
          <h4 class="category-heading">{{ category.kind }}</h4>
          {%- for student in category.students %}
          {% include "fragments/student.html" %}
          {%- endfor %}
        </div>"##;
