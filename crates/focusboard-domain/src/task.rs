use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field_update::FieldUpdate;

pub type TaskId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-form; matches the `status` slug of the column it sits in.
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Fields supplied when creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: String,
    pub tags: Vec<String>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
    pub completed_at: FieldUpdate<DateTime<Utc>>,
}

impl Task {
    /// Build a task with a fresh time-ordered id and no completion date.
    pub fn new(fields: NewTask) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            title: fields.title.trim().to_string(),
            description: fields.description.trim().to_string(),
            status: fields.status,
            tags: normalize_tags(fields.tags),
            completed_at: None,
        }
    }

    pub fn update(&mut self, updates: TaskUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(status) = updates.status {
            self.status = status;
        }
        if let Some(tags) = updates.tags {
            self.tags = tags;
        }
        updates.completed_at.apply_to(&mut self.completed_at);
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Trim tags, drop blanks and duplicates while keeping first-seen order.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !normalized.iter().any(|t| t == tag) {
            normalized.push(tag.to_string());
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Task {
        Task::new(NewTask {
            title: "  Write report ".to_string(),
            description: " quarterly ".to_string(),
            status: "todo".to_string(),
            tags: vec!["work".into(), " work ".into(), "".into(), "urgent".into()],
        })
    }

    #[test]
    fn test_new_trims_and_dedups() {
        let task = sample();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "quarterly");
        assert_eq!(task.tags, vec!["work".to_string(), "urgent".to_string()]);
        assert!(task.completed_at.is_none());
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn test_update_is_shallow_merge() {
        let mut task = sample();
        task.update(TaskUpdate {
            title: Some("Renamed".to_string()),
            ..TaskUpdate::default()
        });
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.description, "quarterly");
        assert_eq!(task.status, "todo");
    }

    #[test]
    fn test_update_clears_completion() {
        let mut task = sample();
        task.completed_at = Some(Utc::now());
        task.update(TaskUpdate {
            completed_at: FieldUpdate::Clear,
            ..TaskUpdate::default()
        });
        assert!(!task.is_completed());
    }

    #[test]
    fn test_serialized_shape() {
        let mut task = sample();
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("completedAt").is_none());

        task.completed_at = Some(Utc::now());
        let json = serde_json::to_value(&task).unwrap();
        assert!(json["completedAt"].is_string());
        assert_eq!(json["tags"][0], "work");
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let task: Task =
            serde_json::from_str(r#"{"id":"1","title":"t","status":"todo"}"#).unwrap();
        assert!(task.tags.is_empty());
        assert_eq!(task.description, "");
        assert!(task.completed_at.is_none());
    }
}
