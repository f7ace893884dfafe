//! Typed content schema for folio portfolio pages.
//!
//! This crate parses the shared `sidebar.json` document and the per-page JSON
//! documents into validated structures. Optional shapes in the JSON (a bio
//! paragraph or bio lines, an image logo or an icon logo) become sum types.

mod de;
pub mod load;
pub mod pages;
pub mod sidebar;

pub use load::{load_json, parse_json, ContentError, Document, FieldError};
pub use pages::{
    Affiliation, BiographyContent, Course, Degree, LinkRef, Logo, MentoringCategory, NewsItem,
    PageContent, PageMeta, Paper, Project, PublicationsContent, PublicationsIntro,
    ResearchContent, RoleGroup, Sponsor, StudentMentee, TeachingContent, YearGroup,
    PAPER_PLACEHOLDER,
};
pub use sidebar::{Bio, Footer, Palette, Profile, SidebarConfig, SidebarLink, ThemeColors, ThemeConfig};
