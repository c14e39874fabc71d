//! In-process `todos` table.
//!
//! Rows live in a `BTreeMap` keyed by id behind a tokio `RwLock`, so every
//! operation is atomic with respect to concurrent requests. Ids come from a
//! counter that only moves forward; a deleted id is never handed out again.

use std::{collections::BTreeMap, sync::Arc};

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::model::{validate_title, CreateTodo, Todo, UpdateTodo, ValidationErrors};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Couldn't find Todo with 'id'={0}")]
    NotFound(i64),

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Todo>,
    last_id: i64,
}

/// Shared handle to the todo table. Cloning is cheap and every clone sees the
/// same rows.
#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    table: Arc<RwLock<Table>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows, newest first.
    pub async fn list(&self) -> Vec<Todo> {
        let table = self.table.read().await;
        table.rows.values().rev().cloned().collect()
    }

    pub async fn get(&self, id: i64) -> Result<Todo, StoreError> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    pub async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn create(&self, input: CreateTodo) -> Result<Todo, StoreError> {
        let title = validate_title(input.title.as_deref())?.to_string();

        let mut table = self.table.write().await;
        table.last_id += 1;
        let now = Utc::now();
        let todo = Todo {
            id: table.last_id,
            title,
            is_completed: input.is_completed.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(todo.id, todo.clone());
        debug!(id = todo.id, "created todo");
        Ok(todo)
    }

    /// Apply the fields present in `input`. The row is left untouched when
    /// validation fails.
    pub async fn update(&self, id: i64, input: UpdateTodo) -> Result<Todo, StoreError> {
        let mut table = self.table.write().await;
        let todo = table.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        let title = match &input.title {
            Some(title) => Some(validate_title(title.as_deref())?.to_string()),
            None => None,
        };

        let mut changed = false;
        if let Some(title) = title {
            changed |= todo.title != title;
            todo.title = title;
        }
        if let Some(is_completed) = input.is_completed {
            changed |= todo.is_completed != is_completed;
            todo.is_completed = is_completed;
        }
        if changed {
            todo.updated_at = Utc::now();
        }
        debug!(id, changed, "updated todo");
        Ok(todo.clone())
    }

    pub async fn delete(&self, id: i64) -> Result<Todo, StoreError> {
        let mut table = self.table.write().await;
        let removed = table.rows.remove(&id).ok_or(StoreError::NotFound(id))?;
        debug!(id, "deleted todo");
        Ok(removed)
    }
}
