//! The shared sidebar document: identity, profile, links, footer and theme.

use serde::{Deserialize, Serialize};

use crate::de::{label, non_empty};
use crate::load::{Document, FieldError};

const DEFAULT_CV_FILE: &str = "cv.pdf";
const DEFAULT_LINK_ICON: &str = "fas fa-link";

/// Parsed `sidebar.json`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SidebarConfig {
    /// Brand text shown at the left of the navigation bar
    pub nav_brand: String,

    pub profile: Profile,

    #[serde(default)]
    pub sidebar_links: Vec<SidebarLink>,

    pub footer: Footer,

    /// Accent and link colours; missing values use the built-in palette
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Target of the CV navigation entry
    #[serde(default = "default_cv_file")]
    pub cv_file: String,
}

fn default_cv_file() -> String {
    DEFAULT_CV_FILE.to_string()
}

impl Document for SidebarConfig {
    fn validate(&self) -> Result<(), FieldError> {
        FieldError::require("nav_brand", &self.nav_brand)?;
        FieldError::require("profile.name", &self.profile.name)?;
        FieldError::require("cv_file", &self.cv_file)?;
        Ok(())
    }
}

/// Profile shown at the top of the sidebar.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(from = "RawProfile")]
pub struct Profile {
    pub name: String,
    /// Avatar image path; `None` renders a generic person glyph
    pub image: Option<String>,
    pub bio: Bio,
}

/// The two ways a profile bio can be written, or neither.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Bio {
    /// A single paragraph (`bio`)
    Paragraph(String),
    /// One short line per entry (`bio_lines`)
    Lines(Vec<String>),
    Absent,
}

#[derive(Deserialize)]
struct RawProfile {
    name: String,
    #[serde(default, deserialize_with = "non_empty")]
    image: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    bio_lines: Option<Vec<String>>,
}

impl From<RawProfile> for Profile {
    fn from(raw: RawProfile) -> Self {
        // bio_lines wins when both are given
        let bio = match (raw.bio_lines, raw.bio) {
            (Some(lines), _) if !lines.is_empty() => Bio::Lines(lines),
            (_, Some(text)) if !text.is_empty() => Bio::Paragraph(text),
            _ => Bio::Absent,
        };

        Self {
            name: raw.name,
            image: raw.image,
            bio,
        }
    }
}

/// An entry in the sidebar's vertical link list.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SidebarLink {
    /// Full icon class list, e.g. `fab fa-github`
    #[serde(default = "default_link_icon")]
    pub icon: String,

    #[serde(default)]
    pub label: String,

    /// Without a URL the entry renders as plain text
    #[serde(default, deserialize_with = "non_empty")]
    pub url: Option<String>,
}

fn default_link_icon() -> String {
    DEFAULT_LINK_ICON.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Footer {
    #[serde(deserialize_with = "label")]
    pub copyright_year: String,
    pub copyright_name: String,
}

/// Light and dark palettes as written in the sidebar document.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ThemeConfig {
    #[serde(default)]
    pub light: Palette,
    #[serde(default)]
    pub dark: Palette,
}

/// A partially specified palette.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Palette {
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub accent_hover: Option<String>,
    #[serde(default)]
    pub link_color: Option<String>,
    #[serde(default)]
    pub link_hover: Option<String>,
}

/// A fully resolved palette.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ThemeColors {
    pub accent_color: String,
    pub accent_hover: String,
    pub link_color: String,
    pub link_hover: String,
}

impl ThemeColors {
    pub fn light_defaults() -> Self {
        Self {
            accent_color: "#0D9488".to_string(),
            accent_hover: "#0F766E".to_string(),
            link_color: "#0066cc".to_string(),
            link_hover: "#004499".to_string(),
        }
    }

    pub fn dark_defaults() -> Self {
        Self {
            accent_color: "#2DD4BF".to_string(),
            accent_hover: "#5EEAD4".to_string(),
            link_color: "#60A5FA".to_string(),
            link_hover: "#93C5FD".to_string(),
        }
    }
}

impl Palette {
    /// Fill unset colours from `defaults`.
    pub fn resolve(&self, defaults: ThemeColors) -> ThemeColors {
        ThemeColors {
            accent_color: pick(&self.accent_color, defaults.accent_color),
            accent_hover: pick(&self.accent_hover, defaults.accent_hover),
            link_color: pick(&self.link_color, defaults.link_color),
            link_hover: pick(&self.link_hover, defaults.link_hover),
        }
    }
}

fn pick(value: &Option<String>, default: String) -> String {
    value.clone().unwrap_or(default)
}

impl ThemeConfig {
    pub fn light(&self) -> ThemeColors {
        self.light.resolve(ThemeColors::light_defaults())
    }

    pub fn dark(&self) -> ThemeColors {
        self.dark.resolve(ThemeColors::dark_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::parse_json;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn parse(source: &str) -> SidebarConfig {
        parse_json(source, Path::new("sidebar.json")).unwrap()
    }

    const MINIMAL: &str = r#"{
  "nav_brand": "Jane Doe",
  "profile": { "name": "Jane Doe" },
  "footer": { "copyright_year": 2025, "copyright_name": "Jane Doe" }
}"#;

    #[test]
    fn applies_defaults() {
        let sidebar = parse(MINIMAL);

        assert_eq!(sidebar.cv_file, "cv.pdf");
        assert_eq!(sidebar.profile.bio, Bio::Absent);
        assert_eq!(sidebar.profile.image, None);
        assert!(sidebar.sidebar_links.is_empty());
        assert_eq!(sidebar.footer.copyright_year, "2025");
        assert_eq!(sidebar.theme.light(), ThemeColors::light_defaults());
        assert_eq!(sidebar.theme.dark(), ThemeColors::dark_defaults());
    }

    #[test]
    fn prefers_bio_lines_over_bio() {
        let sidebar = parse(
            r#"{
  "nav_brand": "J",
  "profile": { "name": "J", "bio": "Para", "bio_lines": ["A", "B"] },
  "footer": { "copyright_year": "2025", "copyright_name": "J" }
}"#,
        );

        assert_eq!(
            sidebar.profile.bio,
            Bio::Lines(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn falls_back_to_bio_paragraph() {
        let sidebar = parse(
            r#"{
  "nav_brand": "J",
  "profile": { "name": "J", "bio": "Para", "bio_lines": [], "image": "" },
  "footer": { "copyright_year": "2025", "copyright_name": "J" }
}"#,
        );

        assert_eq!(sidebar.profile.bio, Bio::Paragraph("Para".to_string()));
        assert_eq!(sidebar.profile.image, None);
    }

    #[test]
    fn parses_links() {
        let sidebar = parse(
            r#"{
  "nav_brand": "J",
  "profile": { "name": "J" },
  "sidebar_links": [
    { "icon": "fab fa-github", "label": "GitHub", "url": "https://github.com/j" },
    { "label": "Nashville, TN", "url": "" }
  ],
  "footer": { "copyright_year": "2025", "copyright_name": "J" }
}"#,
        );

        assert_eq!(
            sidebar.sidebar_links,
            vec![
                SidebarLink {
                    icon: "fab fa-github".to_string(),
                    label: "GitHub".to_string(),
                    url: Some("https://github.com/j".to_string()),
                },
                SidebarLink {
                    icon: "fas fa-link".to_string(),
                    label: "Nashville, TN".to_string(),
                    url: None,
                },
            ]
        );
    }

    #[test]
    fn merges_partial_theme() {
        let sidebar = parse(
            r##"{
  "nav_brand": "J",
  "profile": { "name": "J" },
  "footer": { "copyright_year": "2025", "copyright_name": "J" },
  "theme": { "light": { "accent_color": "#800020" } }
}"##,
        );

        let light = sidebar.theme.light();
        assert_eq!(light.accent_color, "#800020");
        assert_eq!(light.link_color, "#0066cc");
        assert_eq!(sidebar.theme.dark(), ThemeColors::dark_defaults());
    }

    #[test]
    fn rejects_empty_name() {
        let result = parse_json::<SidebarConfig>(
            r#"{
  "nav_brand": "J",
  "profile": { "name": " " },
  "footer": { "copyright_year": "2025", "copyright_name": "J" }
}"#,
            Path::new("sidebar.json"),
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("profile.name must not be empty"));
    }
}
