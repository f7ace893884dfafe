//! Scaffold a starter portfolio in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const STARTER_FILES: [(&str, &str); 6] = [
    ("folio.toml", DEFAULT_CONFIG),
    ("sidebar.json", DEFAULT_SIDEBAR),
    ("content_index.json", DEFAULT_BIOGRAPHY),
    ("content_research.json", DEFAULT_RESEARCH),
    ("content_publications.json", DEFAULT_PUBLICATIONS),
    ("content_teaching.json", DEFAULT_TEACHING),
];

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    let created = scaffold(Path::new("."), yes)?;

    if created == 0 {
        tracing::warn!("All starter files already exist. Use --yes to overwrite.");
        return Ok(());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'folio build' to generate the pages.");

    Ok(())
}

/// Write the starter files into `dir`, keeping existing ones unless
/// `overwrite`. Returns the number of files written.
pub fn scaffold(dir: &Path, overwrite: bool) -> Result<usize> {
    let mut created = 0;

    for (name, source) in STARTER_FILES {
        let path = dir.join(name);
        if path.exists() && !overwrite {
            tracing::debug!("Keeping existing {}", name);
            continue;
        }

        fs::write(&path, source).with_context(|| format!("Failed to write {}", name))?;
        tracing::info!("Created {}", name);
        created += 1;
    }

    Ok(created)
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[site]
# Directory holding sidebar.json and the content_*.json documents
content_dir = "."

# Directory the HTML pages are written to
output_dir = "."

# Minify the inline stylesheet
minify = false

[capture]
# Viewport and device scale for project figures
width = 1200
height = 900
scale = 3.0

[[capture.targets]]
source = "projects/alzheimers.html"
output = "assets/research/research_alzheimers.png"

[[capture.targets]]
source = "projects/copd.html"
output = "assets/research/research_copd.png"
"#;

const DEFAULT_SIDEBAR: &str = r##"{
  "nav_brand": "Your Name",
  "profile": {
    "name": "Your Name",
    "image": "assets/img/profile.jpg",
    "bio_lines": ["Your Position", "Your Institution"]
  },
  "sidebar_links": [
    { "icon": "fas fa-map-marker-alt", "label": "City, State" },
    { "icon": "fas fa-envelope", "label": "Email", "url": "mailto:you@example.edu" },
    { "icon": "ai ai-google-scholar", "label": "Google Scholar", "url": "https://scholar.google.com/" },
    { "icon": "fab fa-github", "label": "GitHub", "url": "https://github.com/" }
  ],
  "footer": { "copyright_year": 2025, "copyright_name": "Your Name" },
  "theme": {
    "light": { "accent_color": "#0D9488", "accent_hover": "#0F766E" },
    "dark": { "accent_color": "#2DD4BF", "accent_hover": "#5EEAD4" }
  },
  "cv_file": "cv.pdf"
}
"##;

const DEFAULT_BIOGRAPHY: &str = r#"{
  "meta": {
    "title": "Your Name | Biography",
    "description": "Biography of Your Name"
  },
  "bio": [
    "Write a short introduction here. Inline <a href=\"https://example.edu\">links</a> are allowed."
  ],
  "affiliations": [
    {
      "institution": "Your Institution",
      "role": "Your Position",
      "department": ["Your Department"],
      "logo_icon": "fa-university"
    }
  ],
  "degrees": [
    { "degree": "Ph.D.", "field": "Your Field", "institution": "Your University", "location": "City, State" }
  ],
  "news": [
    { "date": "Jan 2025", "content": "Started a new position." }
  ],
  "sponsors": []
}
"#;

const DEFAULT_RESEARCH: &str = r#"{
  "meta": {
    "title": "Your Name | Research",
    "description": "Research projects of Your Name"
  },
  "interests": ["Interest One", "Interest Two"],
  "projects": [
    {
      "title": "Project Title",
      "image": "assets/research/research_alzheimers.png",
      "description": ["Describe the project here."]
    }
  ]
}
"#;

const DEFAULT_PUBLICATIONS: &str = r#"{
  "meta": {
    "title": "Your Name | Publications",
    "description": "Publications of Your Name"
  },
  "intro": {
    "title": "Publications",
    "description": "A full list is available on",
    "links": [
      { "label": "Google Scholar", "url": "https://scholar.google.com/" }
    ]
  },
  "publications": [
    {
      "year": 2025,
      "papers": [
        {
          "title": "Paper Title",
          "authors": "Your Name, Coauthor Name",
          "venue": "Conference 2025",
          "links": [
            { "label": "paper", "url": "https://doi.org/" }
          ]
        }
      ]
    }
  ],
  "conference_abstracts": []
}
"#;

const DEFAULT_TEACHING: &str = r#"{
  "meta": {
    "title": "Your Name | Teaching",
    "description": "Teaching and mentoring of Your Name"
  },
  "courses": [
    {
      "role": "Teaching Assistant",
      "institution": "Your University",
      "department": "Your Department",
      "location": "City, State",
      "period": "2020-2022",
      "description": "Describe the role here.",
      "courses_list": [
        { "code": "CS 101", "name": "Introduction to Computing", "semesters": ["Fall 2020", "Fall 2021"] }
      ]
    }
  ],
  "mentoring": [
    {
      "type": "Graduate Students",
      "students": [
        { "name": "Student Name", "program": "M.S. Program", "period": "2023-2024", "institution": "Your University" }
      ]
    }
  ]
}
"#;
