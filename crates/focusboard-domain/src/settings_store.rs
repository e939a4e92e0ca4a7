use focusboard_core::{FocusResult, JsonStoreExt, SharedStore, SlugCollisionPolicy, StorageKey};

use crate::column::Column;
use crate::column_manager;
use crate::settings::{Settings, SettingsUpdate};

/// Owns the board columns and the Pomodoro toggle.
///
/// Every change writes the full settings blob back to storage.
pub struct SettingsStore {
    storage: SharedStore,
    settings: Settings,
    slug_policy: SlugCollisionPolicy,
}

impl SettingsStore {
    pub fn load(storage: SharedStore, slug_policy: SlugCollisionPolicy) -> Self {
        let settings = storage
            .load::<Settings>(StorageKey::Settings)
            .map(Settings::merged_over_defaults)
            .unwrap_or_default();
        Self {
            storage,
            settings,
            slug_policy,
        }
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    pub fn update(&mut self, updates: SettingsUpdate) -> FocusResult<()> {
        let mut next = self.settings.clone();
        next.update(updates);
        self.storage.save(StorageKey::Settings, &next)?;
        self.settings = next;
        Ok(())
    }

    pub fn set_pomodoro_enabled(&mut self, enabled: bool) -> FocusResult<()> {
        self.update(SettingsUpdate {
            pomodoro_enabled: Some(enabled),
            ..SettingsUpdate::default()
        })
    }

    /// Returns the new column, or `None` when the name was refused.
    pub fn add_column(&mut self, name: &str) -> FocusResult<Option<Column>> {
        match column_manager::add_column(&self.settings.columns, name, self.slug_policy) {
            Some((columns, column)) => {
                self.replace_columns(columns)?;
                tracing::info!("Added column '{}' ({})", column.name, column.status);
                Ok(Some(column))
            }
            None => Ok(None),
        }
    }

    /// Returns `false` when refused, e.g. for the last remaining column.
    pub fn delete_column(&mut self, column_id: &str) -> FocusResult<bool> {
        let updated = column_manager::delete_column(&self.settings.columns, column_id);
        self.apply(updated)
    }

    pub fn rename_column(&mut self, column_id: &str, name: &str) -> FocusResult<bool> {
        let updated =
            column_manager::rename_column(&self.settings.columns, column_id, name, self.slug_policy);
        self.apply(updated)
    }

    pub fn reorder_column(&mut self, dragged_id: &str, target_id: &str) -> FocusResult<bool> {
        let updated = column_manager::reorder_columns(&self.settings.columns, dragged_id, target_id);
        self.apply(updated)
    }

    pub fn toggle_completion(&mut self, column_id: &str) -> FocusResult<bool> {
        let updated = column_manager::toggle_completion(&self.settings.columns, column_id);
        self.apply(updated)
    }

    /// Back to first-run defaults in memory only.
    pub fn reset(&mut self) {
        self.settings = Settings::default();
    }

    fn apply(&mut self, updated: Option<Vec<Column>>) -> FocusResult<bool> {
        match updated {
            Some(columns) => {
                self.replace_columns(columns)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn replace_columns(&mut self, columns: Vec<Column>) -> FocusResult<()> {
        self.update(SettingsUpdate {
            columns: Some(columns),
            ..SettingsUpdate::default()
        })
    }
}
