#![recursion_limit = "256"]

pub mod app_state;
pub mod auth;
pub mod board;
pub mod column;
pub mod column_manager;
pub mod field_update;
pub mod i18n;
pub mod pomodoro;
pub mod report;
pub mod settings;
pub mod settings_store;
pub mod task;
pub mod task_store;
pub mod theme;

pub use app_state::AppState;
pub use auth::{
    AuthService, AuthState, CredentialVerifier, DemoCredentialVerifier, LoginOutcome, User,
};
pub use board::{BoardView, ColumnView};
pub use column::{slugify, Column, ColumnId};
pub use field_update::FieldUpdate;
pub use i18n::{Language, LanguageInfo, Localizer};
pub use pomodoro::{
    DailyStats, PomodoroConfig, PomodoroPreset, PomodoroSession, PomodoroTracker, SessionKind,
};
pub use report::{CompletedTask, CompletionReport, DayLabel, ReportSummary};
pub use settings::{Settings, SettingsUpdate};
pub use settings_store::SettingsStore;
pub use task::{NewTask, Task, TaskId, TaskUpdate};
pub use task_store::TaskStore;
pub use theme::{Theme, ThemeStore};
