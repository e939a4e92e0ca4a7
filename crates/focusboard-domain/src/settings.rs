use serde::{Deserialize, Serialize};

use crate::column::Column;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub pomodoro_enabled: bool,
    pub columns: Vec<Column>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pomodoro_enabled: true,
            columns: default_columns(),
        }
    }
}

pub fn default_columns() -> Vec<Column> {
    vec![
        Column::builtin("todo", "Todo", 0),
        Column::builtin("doing", "Doing", 1),
        Column::builtin("done", "Done", 2),
    ]
}

/// Shallow partial update of [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub pomodoro_enabled: Option<bool>,
    pub columns: Option<Vec<Column>>,
}

impl Settings {
    pub fn update(&mut self, updates: SettingsUpdate) {
        if let Some(enabled) = updates.pomodoro_enabled {
            self.pomodoro_enabled = enabled;
        }
        if let Some(columns) = updates.columns {
            self.columns = columns;
        }
    }

    /// Repair a freshly loaded blob: missing fields already came from the
    /// defaults, and an empty column list is treated as missing.
    pub fn merged_over_defaults(mut self) -> Self {
        if self.columns.is_empty() {
            tracing::warn!("Saved settings had no columns, restoring defaults");
            self.columns = default_columns();
        }
        self
    }

    pub fn column_by_status(&self, status: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.status == status)
    }

    /// Columns in left-to-right board order.
    pub fn sorted_columns(&self) -> Vec<&Column> {
        let mut cols: Vec<_> = self.columns.iter().collect();
        cols.sort_by_key(|c| c.order);
        cols
    }
}
