use focusboard_core::{AppConfig, FocusError, FocusResult, SharedStore, SystemClock};
use focusboard_domain::i18n::system_locale;
use focusboard_domain::{AppState, DemoCredentialVerifier, Task};
use focusboard_persistence::FileKeyValueStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub struct CliContext {
    pub app: AppState,
    data_dir: PathBuf,
}

impl CliContext {
    /// Open the data directory and load every store. `--data-dir` wins over
    /// the config file, which wins over the platform data directory.
    pub fn load(data_dir: Option<PathBuf>) -> FocusResult<Self> {
        let config = AppConfig::load();
        let data_dir = data_dir
            .or_else(|| config.effective_data_dir())
            .ok_or_else(|| {
                FocusError::Internal(
                    "No data directory available; pass --data-dir".to_string(),
                )
            })?;
        tracing::debug!("Using data directory {}", data_dir.display());

        let storage: SharedStore = Arc::new(FileKeyValueStore::open(&data_dir)?);
        let verifier = Arc::new(DemoCredentialVerifier::new(Duration::from_millis(
            config.login_delay_ms,
        )));

        let app = AppState::load(
            storage,
            Arc::new(SystemClock),
            config,
            verifier,
            system_locale(),
        )?;

        Ok(Self { app, data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn require_task(&self, id: &str) -> FocusResult<Task> {
        self.app
            .tasks
            .get(id)
            .cloned()
            .ok_or_else(|| FocusError::NotFound(format!("Task {}", id)))
    }

    pub fn require_column(&self, id: &str) -> FocusResult<()> {
        if self.app.settings.get().columns.iter().any(|c| c.id == id) {
            Ok(())
        } else {
            Err(FocusError::NotFound(format!("Column {}", id)))
        }
    }
}
