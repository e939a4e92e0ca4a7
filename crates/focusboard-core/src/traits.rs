use crate::FocusResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Keys of the independent persisted entries. There is no shared schema
/// version; each entry is read and written on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Tasks,
    Settings,
    PomodoroStats,
    PomodoroConfig,
    AuthUser,
    Language,
    Theme,
}

impl StorageKey {
    pub const ALL: [StorageKey; 7] = [
        StorageKey::Tasks,
        StorageKey::Settings,
        StorageKey::PomodoroStats,
        StorageKey::PomodoroConfig,
        StorageKey::AuthUser,
        StorageKey::Language,
        StorageKey::Theme,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "app-tasks",
            Self::Settings => "app-settings",
            Self::PomodoroStats => "pomodoro-stats",
            Self::PomodoroConfig => "pomodoro-config",
            Self::AuthUser => "auth-user",
            Self::Language => "app-language",
            Self::Theme => "app-theme",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String-keyed storage of serialized values. The only I/O boundary of the
/// application; implementations handle the backend (directory, memory, ...).
pub trait KeyValueStore: Send + Sync {
    /// Raw value stored under `key`, if any
    fn get_raw(&self, key: &str) -> FocusResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set_raw(&self, key: &str, value: &str) -> FocusResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> FocusResult<()>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// Typed JSON access on top of any [`KeyValueStore`].
pub trait JsonStoreExt {
    /// Load and decode the entry under `key`.
    ///
    /// Malformed JSON is logged and reported as absent so callers fall back
    /// to their defaults. Backend failures are logged the same way.
    fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T>;

    /// Encode `value` and store it under `key`.
    fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> FocusResult<()>;

    /// Remove the entry under `key`.
    fn clear(&self, key: StorageKey) -> FocusResult<()>;
}

impl<S: KeyValueStore + ?Sized> JsonStoreExt for S {
    fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let raw = match self.get_raw(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Could not read {}: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring malformed {} entry: {}", key, e);
                None
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> FocusResult<()> {
        let json = serde_json::to_string(value)?;
        tracing::debug!("Persisting {} ({} bytes)", key, json.len());
        self.set_raw(key.as_str(), &json)
    }

    fn clear(&self, key: StorageKey) -> FocusResult<()> {
        self.remove(key.as_str())
    }
}
