use focusboard_core::{FocusError, FocusResult, JsonStoreExt, SharedStore, StorageKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(FocusError::Validation(format!("Unknown theme: {}", other))),
        }
    }
}

pub struct ThemeStore {
    storage: SharedStore,
    theme: Theme,
}

impl ThemeStore {
    pub fn load(storage: SharedStore) -> Self {
        let theme = storage.load(StorageKey::Theme).unwrap_or_default();
        Self { storage, theme }
    }

    pub fn get(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) -> FocusResult<()> {
        self.storage.save(StorageKey::Theme, &theme)?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle(&mut self) -> FocusResult<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn reset(&mut self) {
        self.theme = Theme::default();
    }
}
