//! Per-page content documents.

use serde::{Deserialize, Deserializer, Serialize};

use crate::de::{non_empty, optional_label};
use crate::load::{Document, FieldError};

/// Thumbnail rendered for papers that do not provide one.
pub const PAPER_PLACEHOLDER: &str = "assets/img/pub_placeholder.png";

const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".svg", ".gif", ".webp"];

/// `<title>` and meta description of a page.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// A document that renders to one page.
pub trait PageContent: Document {
    fn meta(&self) -> &PageMeta;
}

fn validate_meta(meta: &PageMeta) -> Result<(), FieldError> {
    FieldError::require("meta.title", &meta.title)?;
    FieldError::require("meta.description", &meta.description)
}

macro_rules! page_content {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PageContent for $ty {
                fn meta(&self) -> &PageMeta {
                    &self.meta
                }
            }

            impl Document for $ty {
                fn validate(&self) -> Result<(), FieldError> {
                    validate_meta(&self.meta)
                }
            }
        )+
    };
}

page_content!(
    BiographyContent,
    ResearchContent,
    PublicationsContent,
    TeachingContent,
);

/// A labeled hyperlink.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LinkRef {
    pub label: String,
    pub url: String,
}

// Biography

/// `content_index.json`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct BiographyContent {
    pub meta: PageMeta,
    /// Paragraphs of inline markup
    pub bio: Vec<String>,
    pub affiliations: Vec<Affiliation>,
    #[serde(default)]
    pub degrees: Vec<Degree>,
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Affiliation {
    pub institution: String,
    pub role: String,
    /// Rendered one per line
    #[serde(default)]
    pub department: Vec<String>,
    #[serde(default, rename(deserialize = "logo_icon"))]
    pub logo: Logo,
}

/// An affiliation logo: an image file, or an icon class such as `fa-university`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Logo {
    Image(String),
    Icon(String),
}

impl Default for Logo {
    fn default() -> Self {
        Logo::Icon("fa-university".to_string())
    }
}

impl From<String> for Logo {
    fn from(value: String) -> Self {
        if value.trim().is_empty() {
            return Logo::default();
        }
        let lower = value.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            Logo::Image(value)
        } else {
            Logo::Icon(value)
        }
    }
}

impl<'de> Deserialize<'de> for Logo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Logo::from)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Degree {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NewsItem {
    pub date: String,
    /// Inline markup
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Sponsor {
    pub name: String,
    pub logo: String,
}

// Research

/// `content_research.json`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResearchContent {
    pub meta: PageMeta,
    pub interests: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub image: Option<String>,
    /// Paragraphs of inline markup
    pub description: Vec<String>,
}

// Publications

/// `content_publications.json`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PublicationsContent {
    pub meta: PageMeta,
    pub intro: PublicationsIntro,
    pub publications: Vec<YearGroup>,
    #[serde(default)]
    pub conference_abstracts: Vec<YearGroup>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PublicationsIntro {
    pub title: String,
    /// Inline markup
    pub description: String,
    #[serde(default)]
    pub links: Vec<LinkRef>,
}

/// Papers published in one year or era.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct YearGroup {
    /// `2024`, `"2021 & Earlier"`, or absent for a header-less block
    #[serde(default, deserialize_with = "optional_label")]
    pub year: Option<String>,
    pub papers: Vec<Paper>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Paper {
    pub title: String,
    #[serde(default)]
    pub authors: String,
    pub venue: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub image: Option<String>,
    #[serde(default)]
    pub links: Vec<LinkRef>,
}

// Teaching

/// `content_teaching.json`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TeachingContent {
    pub meta: PageMeta,
    /// Inline markup
    #[serde(default, deserialize_with = "non_empty")]
    pub philosophy: Option<String>,
    pub courses: Vec<RoleGroup>,
    pub mentoring: Vec<MentoringCategory>,
}

/// A teaching appointment and the courses taught in it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RoleGroup {
    pub role: String,
    pub institution: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub department: Option<String>,
    pub location: String,
    pub period: String,
    /// Inline markup
    pub description: String,
    pub courses_list: Vec<Course>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Course {
    pub code: String,
    pub name: String,
    pub semesters: Vec<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub host: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MentoringCategory {
    #[serde(rename(deserialize = "type"))]
    pub kind: String,
    pub students: Vec<StudentMentee>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StudentMentee {
    pub name: String,
    pub program: String,
    pub period: String,
    pub institution: String,
}
