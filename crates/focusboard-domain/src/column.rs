use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

pub type ColumnId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    /// Slug of `name`; the key tasks are matched on.
    pub status: String,
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completion_column: Option<bool>,
}

impl Column {
    pub fn new(name: &str, order: i32) -> Self {
        let name = name.trim();
        Self {
            id: format!("column-{}", Uuid::now_v7().simple()),
            name: name.to_string(),
            status: slugify(name),
            order,
            is_completion_column: None,
        }
    }

    /// Built-in column whose id equals its status.
    pub fn builtin(status: &str, name: &str, order: i32) -> Self {
        Self {
            id: status.to_string(),
            name: name.to_string(),
            status: status.to_string(),
            order,
            is_completion_column: None,
        }
    }

    pub fn is_completion(&self) -> bool {
        self.is_completion_column.unwrap_or(false)
    }

    pub fn rename(&mut self, name: &str) {
        let name = name.trim();
        self.name = name.to_string();
        self.status = slugify(name);
    }
}

/// Lowercase `name` and collapse each whitespace run into a hyphen.
/// Statuses of every column flagged as a completion column.
pub fn completion_statuses(columns: &[Column]) -> HashSet<&str> {
    columns
        .iter()
        .filter(|c| c.is_completion())
        .map(|c| c.status.as_str())
        .collect()
}

pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
