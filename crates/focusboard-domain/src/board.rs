use focusboard_core::Clock;
use serde::Serialize;

use crate::column::Column;
use crate::settings::Settings;
use crate::task::Task;

/// Board as presented: columns in order, each with the tasks it shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    /// Tasks whose status matches no column.
    pub orphaned: Vec<Task>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub column: Column,
    pub tasks: Vec<Task>,
    /// Tasks in this column left off the board, e.g. completed on an
    /// earlier day.
    pub hidden: usize,
}

impl BoardView {
    /// Completion columns only show tasks completed today, plus tasks that
    /// were never stamped.
    pub fn build(settings: &Settings, tasks: &[Task], clock: &dyn Clock) -> Self {
        let today = clock.today();

        let columns = settings
            .sorted_columns()
            .into_iter()
            .map(|column| {
                let matching = tasks.iter().filter(|t| t.status == column.status);
                let mut shown = Vec::new();
                let mut hidden = 0;
                for task in matching {
                    let visible = !column.is_completion()
                        || task
                            .completed_at
                            .map_or(true, |at| clock.local_date(at) == today);
                    if visible {
                        shown.push(task.clone());
                    } else {
                        hidden += 1;
                    }
                }
                ColumnView {
                    column: column.clone(),
                    tasks: shown,
                    hidden,
                }
            })
            .collect();

        let orphaned = tasks
            .iter()
            .filter(|t| settings.column_by_status(&t.status).is_none())
            .cloned()
            .collect();

        Self { columns, orphaned }
    }

    pub fn column(&self, status: &str) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.column.status == status)
    }
}
