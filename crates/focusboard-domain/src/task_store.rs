use focusboard_core::{
    Clock, CompletionPolicy, FocusError, FocusResult, JsonStoreExt, SharedClock, SharedStore,
    StorageKey,
};

use crate::field_update::FieldUpdate;
use crate::settings::Settings;
use crate::task::{NewTask, Task, TaskUpdate};

/// Owns the task collection.
///
/// Every mutation writes the whole task array back to storage, whether or
/// not the targeted task existed.
pub struct TaskStore {
    storage: SharedStore,
    clock: SharedClock,
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn load(storage: SharedStore, clock: SharedClock) -> Self {
        let tasks = storage
            .load::<Vec<Task>>(StorageKey::Tasks)
            .unwrap_or_default();
        tracing::debug!("Loaded {} tasks", tasks.len());
        Self {
            storage,
            clock,
            tasks,
        }
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn with_status<'a>(&'a self, status: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| t.status == status)
    }

    /// Distinct tags across all tasks, sorted.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .tasks
            .iter()
            .flat_map(|t| t.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    pub fn add(&mut self, fields: NewTask) -> FocusResult<Task> {
        if fields.title.trim().is_empty() {
            return Err(FocusError::Validation(
                "Task title cannot be empty".to_string(),
            ));
        }
        let task = Task::new(fields);
        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;
        tracing::info!("Added task {} in '{}'", task.id, task.status);
        Ok(task)
    }

    /// Shallow-merge `updates` into the task. Returns whether it existed.
    pub fn update(&mut self, task_id: &str, updates: TaskUpdate) -> FocusResult<bool> {
        let mut next = self.tasks.clone();
        let found = match next.iter_mut().find(|t| t.id == task_id) {
            Some(task) => {
                task.update(updates);
                true
            }
            None => false,
        };
        self.commit(next)?;
        Ok(found)
    }

    pub fn remove(&mut self, task_id: &str) -> FocusResult<bool> {
        let mut next = self.tasks.clone();
        next.retain(|t| t.id != task_id);
        let removed = next.len() != self.tasks.len();
        self.commit(next)?;
        Ok(removed)
    }

    /// Move a task to `new_status`.
    ///
    /// The target column is looked up in `settings` at call time. Entering a
    /// completion column stamps `completed_at` with the current time; any
    /// other move leaves it alone unless `policy` says to clear it.
    pub fn move_task(
        &mut self,
        task_id: &str,
        new_status: &str,
        settings: &Settings,
        policy: CompletionPolicy,
    ) -> FocusResult<bool> {
        let entering_completion = settings
            .column_by_status(new_status)
            .is_some_and(|c| c.is_completion());

        let completed_at = if entering_completion {
            FieldUpdate::Set(self.clock.now())
        } else if policy == CompletionPolicy::ClearOnLeave {
            FieldUpdate::Clear
        } else {
            FieldUpdate::NoChange
        };

        tracing::debug!(
            "Moving task {} to '{}' (completion: {})",
            task_id,
            new_status,
            entering_completion
        );
        self.update(
            task_id,
            TaskUpdate {
                status: Some(new_status.to_string()),
                completed_at,
                ..TaskUpdate::default()
            },
        )
    }

    /// Drop all tasks from memory without writing.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Write `next` and only then adopt it, so a failed write leaves the
    /// in-memory list matching storage.
    fn commit(&mut self, next: Vec<Task>) -> FocusResult<()> {
        self.storage.save(StorageKey::Tasks, &next)?;
        self.tasks = next;
        Ok(())
    }
}
