//! Static page generator for folio portfolio sites.
//!
//! Renders the biography, research, publications and teaching pages from
//! their JSON content documents and the shared sidebar document.

pub mod assets;
pub mod builder;
pub mod render;
pub mod shell;
pub mod templates;

#[cfg(test)]
mod fixtures;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder, SIDEBAR_FILE};
pub use render::{PageKind, RenderError};
pub use shell::Shell;
pub use templates::TemplateEngine;
