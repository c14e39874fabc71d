//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently so
//! the client core never links the server. Integration tests catch schema
//! drift between the two crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl CreateTodo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_completed: None,
        }
    }
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl UpdateTodo {
    pub fn completion(is_completed: bool) -> Self {
        Self {
            title: None,
            is_completed: Some(is_completed),
        }
    }
}

/// The `{"todo": {...}}` envelope write requests are sent in.
#[derive(Debug, Serialize)]
pub(crate) struct Envelope<'a, T> {
    pub todo: &'a T,
}

/// Body of a 422 response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub errors: Vec<String>,
}
