use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

/// What happens to `completed_at` when a task leaves a completion column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionPolicy {
    /// Leave the timestamp in place; the task keeps reporting its old completion date.
    #[default]
    Keep,
    /// Clear the timestamp whenever the task moves to a non-completion column.
    ClearOnLeave,
}

/// How column add/rename treat a slug that another column already owns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlugCollisionPolicy {
    /// Accept the collision; both columns then match the same tasks.
    #[default]
    Allow,
    /// Refuse the operation.
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub completion_policy: CompletionPolicy,
    #[serde(default)]
    pub slug_collision: SlugCollisionPolicy,
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

fn default_login_delay_ms() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            completion_policy: CompletionPolicy::default(),
            slug_collision: SlugCollisionPolicy::default(),
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/focusboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("focusboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("focusboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match std::fs::read_to_string(&config_path) {
                    Ok(content) => return Self::from_toml(&content),
                    Err(e) => tracing::warn!(
                        "Could not read config at {}: {}",
                        config_path.display(),
                        e
                    ),
                }
            }
        }
        Self::default()
    }

    /// Parse a config document, falling back to defaults when it is invalid.
    pub fn from_toml(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config: {}", e);
                Self::default()
            }
        }
    }

    /// Directory holding the persisted key-value entries.
    pub fn effective_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("focusboard")))
    }
}
