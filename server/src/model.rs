//! The `Todo` record and the request payloads that create or change it.
//!
//! Request bodies arrive wrapped in a `todo` envelope:
//! `{"todo": {"title": "...", "is_completed": false}}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Message reported whenever a title is missing, `null`, or only whitespace.
pub const TITLE_BLANK: &str = "Title can't be blank";

/// A single todo row as stored and as serialized on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The `{"todo": {...}}` envelope every write request is wrapped in.
#[derive(Debug, Deserialize)]
pub struct TodoParams<T> {
    pub todo: T,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    /// `None` covers both an absent key and an explicit `null`.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    /// Outer `None`: key absent, leave the title alone.
    /// `Some(None)`: explicit `null`, rejected as blank.
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

/// Marks a key as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Human-readable messages for every rule a write request broke.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("validation failed: {}", .0.join(", "))]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

/// Accept a title that still has visible characters once trimmed.
pub fn validate_title(title: Option<&str>) -> Result<&str, ValidationErrors> {
    match title {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(ValidationErrors(vec![TITLE_BLANK.to_string()])),
    }
}
