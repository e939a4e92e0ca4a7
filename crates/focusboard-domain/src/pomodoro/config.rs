use focusboard_core::{FocusError, FocusResult, JsonStoreExt, KeyValueStore, StorageKey};
use serde::{Deserialize, Serialize};

use super::SessionKind;

const MINUTE: u32 = 60;

/// Interval lengths in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroConfig {
    pub work_time: u32,
    pub short_break: u32,
    pub long_break: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        PomodoroPreset::Default.config()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PomodoroPreset {
    Default,
    Focus,
    Calm,
}

impl PomodoroPreset {
    pub const ALL: [PomodoroPreset; 3] = [Self::Default, Self::Focus, Self::Calm];

    pub fn config(self) -> PomodoroConfig {
        let (work, short, long) = match self {
            Self::Default => (25, 5, 15),
            Self::Focus => (45, 10, 20),
            Self::Calm => (20, 8, 12),
        };
        PomodoroConfig {
            work_time: work * MINUTE,
            short_break: short * MINUTE,
            long_break: long * MINUTE,
        }
    }

    /// Translation key of the preset's label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Default => "pomodoro.default",
            Self::Focus => "pomodoro.focus",
            Self::Calm => "pomodoro.calm",
        }
    }
}

impl PomodoroConfig {
    pub fn duration_for(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Work => self.work_time,
            SessionKind::ShortBreak => self.short_break,
            SessionKind::LongBreak => self.long_break,
        }
    }

    /// Work 1-60 min, short break 1-30 min, long break 5-60 min.
    pub fn validate(&self) -> FocusResult<()> {
        check_range("workTime", self.work_time, 1, 60)?;
        check_range("shortBreak", self.short_break, 1, 30)?;
        check_range("longBreak", self.long_break, 5, 60)
    }

    /// Saved config, or the default when absent or malformed.
    pub fn load(storage: &dyn KeyValueStore) -> Self {
        storage
            .load::<PomodoroConfig>(StorageKey::PomodoroConfig)
            .unwrap_or_default()
    }

    pub fn save(&self, storage: &dyn KeyValueStore) -> FocusResult<()> {
        self.validate()?;
        storage.save(StorageKey::PomodoroConfig, self)
    }
}

fn check_range(field: &str, seconds: u32, min_minutes: u32, max_minutes: u32) -> FocusResult<()> {
    if seconds < min_minutes * MINUTE || seconds > max_minutes * MINUTE {
        return Err(FocusError::Validation(format!(
            "{} must be between {} and {} minutes",
            field, min_minutes, max_minutes
        )));
    }
    Ok(())
}
