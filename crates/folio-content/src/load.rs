//! Loading and validating content documents.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// A JSON document folio knows how to load.
pub trait Document: DeserializeOwned {
    /// Check invariants the schema alone cannot express.
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

/// A semantic problem with a single field of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path to the field, e.g. `profile.name`
    pub field: String,
    /// What is wrong with it
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Fail with `must not be empty` when `value` is blank.
    pub fn require(field: &str, value: &str) -> Result<(), FieldError> {
        if value.trim().is_empty() {
            return Err(Self::new(field, "must not be empty"));
        }
        Ok(())
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Errors that can occur when loading a content document.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {message} (line {line}, column {column})", path.display())]
    Parse {
        path: PathBuf,
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Invalid content in {}: {error}", path.display())]
    Invalid { path: PathBuf, error: FieldError },
}

impl ContentError {
    /// Path of the document that failed.
    pub fn path(&self) -> &Path {
        match self {
            ContentError::Read { path, .. }
            | ContentError::Parse { path, .. }
            | ContentError::Invalid { path, .. } => path,
        }
    }
}

/// Read, parse and validate a document from disk.
pub fn load_json<T: Document>(path: &Path) -> Result<T, ContentError> {
    let source = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_json(&source, path)
}

/// Parse and validate a document. `origin` is only used for error reporting.
pub fn parse_json<T: Document>(source: &str, origin: &Path) -> Result<T, ContentError> {
    let document: T = serde_json::from_str(source).map_err(|e| ContentError::Parse {
        path: origin.to_path_buf(),
        message: parse_message(&e),
        line: e.line(),
        column: e.column(),
    })?;

    document.validate().map_err(|error| ContentError::Invalid {
        path: origin.to_path_buf(),
        error,
    })?;

    Ok(document)
}

/// serde_json appends " at line X column Y" to its Display output; strip it
/// since the position is reported separately.
fn parse_message(error: &serde_json::Error) -> String {
    let full = error.to_string();
    match full.rfind(" at line ") {
        Some(pos) => full[..pos].to_string(),
        None => full,
    }
}
