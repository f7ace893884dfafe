//! Sample documents shared by the unit tests.

use std::fs;
use std::path::Path;

use folio_content::{parse_json, Document, SidebarConfig};

pub const SIDEBAR: &str = r#"{
  "nav_brand": "Jane Doe",
  "profile": {
    "name": "Jane Doe",
    "image": "assets/img/profile.jpg",
    "bio_lines": ["Postdoctoral Fellow", "Vanderbilt University"]
  },
  "sidebar_links": [
    { "icon": "fab fa-github", "label": "GitHub", "url": "https://github.com/janedoe" },
    { "icon": "fas fa-map-marker-alt", "label": "Nashville, TN" }
  ],
  "footer": { "copyright_year": 2025, "copyright_name": "Jane Doe" },
  "cv_file": "files/jane_doe_cv.pdf"
}"#;

pub const BIOGRAPHY: &str = r#"{
  "meta": { "title": "Jane Doe | Biography", "description": "Biography of Jane Doe" },
  "bio": ["I study <a href=\"https://example.org/lungs\">lung imaging</a>."],
  "affiliations": [
    {
      "institution": "Vanderbilt University",
      "role": "Postdoctoral Fellow",
      "department": ["Department of Computer Science", "Medical Image Computing Lab"],
      "logo_icon": "assets/img/vu.svg"
    },
    { "institution": "VA Medical Center", "role": "Research Affiliate" }
  ],
  "degrees": [
    { "degree": "Ph.D.", "field": "Computer Science", "institution": "Vanderbilt University", "location": "Nashville, TN" }
  ],
  "news": [
    { "date": "Jan 2025", "content": "Paper accepted at <em>MICCAI</em>." }
  ],
  "sponsors": [
    { "name": "NIH", "logo": "assets/img/nih.png" }
  ]
}"#;

pub const RESEARCH: &str = r#"{
  "meta": { "title": "Jane Doe | Research", "description": "Research projects" },
  "interests": ["Medical imaging", "Deep learning"],
  "projects": [
    {
      "title": "Lung Cancer Screening",
      "image": "assets/research/lung.png",
      "description": ["First paragraph.", "Second paragraph."]
    },
    { "title": "COPD Phenotyping", "description": ["Only paragraph."] }
  ]
}"#;

pub const PUBLICATIONS: &str = r#"{
  "meta": { "title": "Jane Doe | Publications", "description": "Publications" },
  "intro": {
    "title": "Publications",
    "description": "Full list on",
    "links": [
      { "label": "Google Scholar", "url": "https://scholar.google.com/citations?user=abc" },
      { "label": "Semantic Scholar", "url": "https://www.semanticscholar.org/author/1" }
    ]
  },
  "publications": [
    {
      "year": 2024,
      "papers": [
        {
          "title": "Deep Lung Nodule Detection",
          "authors": "J. Doe, A. Smith",
          "venue": "MICCAI 2024",
          "image": "assets/pubs/nodule.png",
          "links": [
            { "label": "paper", "url": "https://doi.org/10.1000/1" },
            { "label": "code", "url": "https://github.com/janedoe/nodule" }
          ]
        },
        { "title": "Untitled Preprint", "venue": "arXiv" }
      ]
    }
  ]
}"#;

pub const TEACHING: &str = r#"{
  "meta": { "title": "Jane Doe | Teaching", "description": "Teaching and mentoring" },
  "courses": [
    {
      "role": "Teaching Assistant",
      "institution": "Vanderbilt University",
      "department": "Department of EECS",
      "location": "Nashville, TN",
      "period": "2019-2021",
      "description": "Led weekly lab sections.",
      "courses_list": [
        { "code": "EECE 2323", "name": "Digital Logic", "semesters": ["Fall 2019", "Fall 2020"] },
        { "code": "CS 8395", "name": "Deep Learning", "semesters": ["Spring 2021"], "host": "Dr. Smith" }
      ]
    },
    {
      "role": "Guest Lecturer",
      "institution": "Belmont University",
      "location": "Nashville, TN",
      "period": "2022",
      "description": "Lectures on imaging.",
      "courses_list": []
    }
  ],
  "mentoring": [
    {
      "type": "Graduate Students",
      "students": [
        { "name": "Alex Kim", "program": "M.S. Computer Science", "period": "2023-2024", "institution": "Vanderbilt University" }
      ]
    }
  ]
}"#;

pub fn parse<T: Document>(source: &str) -> T {
    parse_json(source, Path::new("fixture.json")).unwrap()
}

pub fn sidebar() -> SidebarConfig {
    parse(SIDEBAR)
}

/// Write the sidebar and all four content documents into `dir`.
pub fn write_site(dir: &Path) {
    fs::write(dir.join("sidebar.json"), SIDEBAR).unwrap();
    fs::write(dir.join("content_index.json"), BIOGRAPHY).unwrap();
    fs::write(dir.join("content_research.json"), RESEARCH).unwrap();
    fs::write(dir.join("content_publications.json"), PUBLICATIONS).unwrap();
    fs::write(dir.join("content_teaching.json"), TEACHING).unwrap();
}
