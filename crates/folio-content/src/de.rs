//! Shared deserialization helpers.

use serde::{Deserialize, Deserializer};

/// A label authored either as a JSON string or a number (`2024` or `"2021 & Earlier"`).
#[derive(Deserialize)]
#[serde(untagged)]
enum Label {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        match label {
            Label::Text(text) => text,
            Label::Integer(n) => n.to_string(),
            Label::Float(n) => n.to_string(),
        }
    }
}

/// Deserialize an optional string, treating `""` like a missing key.
pub(crate) fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Deserialize a string-or-number label.
pub(crate) fn label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Label::deserialize(deserializer).map(String::from)
}

/// Deserialize an optional string-or-number label; empty strings become `None`.
pub(crate) fn optional_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Label>::deserialize(deserializer)?;
    Ok(value.map(String::from).filter(|s| !s.is_empty()))
}
