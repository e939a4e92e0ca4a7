use focusboard_core::{AppConfig, FocusResult, SharedClock, SharedStore};
use std::sync::Arc;

use crate::auth::{AuthService, CredentialVerifier};
use crate::board::BoardView;
use crate::i18n::Localizer;
use crate::pomodoro::{PomodoroConfig, PomodoroTracker};
use crate::report::CompletionReport;
use crate::settings_store::SettingsStore;
use crate::task_store::TaskStore;
use crate::theme::ThemeStore;

/// Every store of the application, built once per process over one
/// storage handle and one clock.
pub struct AppState {
    pub settings: SettingsStore,
    pub tasks: TaskStore,
    pub pomodoro: PomodoroTracker,
    pub localizer: Localizer,
    pub theme: ThemeStore,
    pub auth: AuthService,
    storage: SharedStore,
    clock: SharedClock,
    config: AppConfig,
}

impl AppState {
    pub fn load(
        storage: SharedStore,
        clock: SharedClock,
        config: AppConfig,
        verifier: Arc<dyn CredentialVerifier>,
        system_locale: Option<String>,
    ) -> FocusResult<Self> {
        let settings = SettingsStore::load(storage.clone(), config.slug_collision);
        let tasks = TaskStore::load(storage.clone(), clock.clone());
        let pomodoro = PomodoroTracker::load(storage.clone(), clock.clone())?;
        let localizer = Localizer::load(storage.clone(), system_locale);
        let theme = ThemeStore::load(storage.clone());
        let auth = AuthService::load(storage.clone(), verifier)?;

        Ok(Self {
            settings,
            tasks,
            pomodoro,
            localizer,
            theme,
            auth,
            storage,
            clock,
            config,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    /// Move a task against the current column settings.
    pub fn move_task(&mut self, task_id: &str, new_status: &str) -> FocusResult<bool> {
        self.tasks.move_task(
            task_id,
            new_status,
            self.settings.get(),
            self.config.completion_policy,
        )
    }

    pub fn report(&self) -> CompletionReport {
        CompletionReport::build(
            self.tasks.list(),
            &self.settings.get().columns,
            self.clock.as_ref(),
        )
    }

    pub fn board(&self) -> BoardView {
        BoardView::build(self.settings.get(), self.tasks.list(), self.clock.as_ref())
    }

    pub fn pomodoro_config(&self) -> PomodoroConfig {
        PomodoroConfig::load(self.storage.as_ref())
    }

    pub fn save_pomodoro_config(&self, config: &PomodoroConfig) -> FocusResult<()> {
        config.save(self.storage.as_ref())
    }

    /// Sign out, wipe storage and return every store to first-run state.
    pub fn logout(&mut self) -> FocusResult<()> {
        self.auth.logout()?;
        self.settings.reset();
        self.tasks.clear();
        self.pomodoro.reset();
        self.localizer.reset();
        self.theme.reset();
        Ok(())
    }
}
