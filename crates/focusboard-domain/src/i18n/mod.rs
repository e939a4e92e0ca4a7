//! UI string lookup with a switchable active language.

mod tables;

use focusboard_core::{FocusError, FocusResult, JsonStoreExt, SharedStore, StorageKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Language {
    pub const ALL: [Language; 3] = [Self::PtBr, Self::EnUs, Self::EsEs];

    pub fn code(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
            Self::EsEs => "es-ES",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::PtBr => "Português",
            Self::EnUs => "English",
            Self::EsEs => "Español",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::PtBr => "🇧🇷",
            Self::EnUs => "🇺🇸",
            Self::EsEs => "🇪🇸",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Match a locale such as `en_GB.UTF-8` or `es-MX` by its language
    /// prefix.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let prefix = locale
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match prefix.as_str() {
            "pt" => Some(Self::PtBr),
            "en" => Some(Self::EnUs),
            "es" => Some(Self::EsEs),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = FocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| FocusError::Validation(format!("Unsupported language: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        Self {
            code: language.code(),
            name: language.display_name(),
            flag: language.flag(),
        }
    }
}

/// Locale reported by the environment, checked in POSIX precedence order.
pub fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}

pub struct Localizer {
    storage: SharedStore,
    language: Language,
    system_locale: Option<String>,
    notifier: broadcast::Sender<Language>,
}

impl Localizer {
    /// Resolve the active language: saved code, then the system locale's
    /// prefix, then pt-BR.
    pub fn load(storage: SharedStore, system_locale: Option<String>) -> Self {
        let language = Self::resolve(&storage, system_locale.as_deref());
        tracing::debug!("Active language {}", language);
        let (notifier, _) = broadcast::channel(8);
        Self {
            storage,
            language,
            system_locale,
            notifier,
        }
    }

    fn resolve(storage: &SharedStore, system_locale: Option<&str>) -> Language {
        let saved = storage
            .load::<String>(StorageKey::Language)
            .and_then(|code| Language::from_code(&code));
        saved
            .or_else(|| system_locale.and_then(Language::from_locale))
            .unwrap_or_default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up a dotted key in the active table. Unknown keys come back
    /// unchanged.
    pub fn translate(&self, key: &str) -> String {
        match lookup(self.language, key) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!("Translation key not found: {}", key);
                key.to_string()
            }
        }
    }

    pub fn has_key(&self, key: &str) -> bool {
        lookup(self.language, key).is_some()
    }

    /// Switch the active table, persist the choice and notify subscribers.
    pub fn set_language(&mut self, language: Language) -> FocusResult<()> {
        self.storage.save(StorageKey::Language, language.code())?;
        self.language = language;
        // No subscribers is fine.
        let _ = self.notifier.send(language);
        tracing::info!("Language set to {}", language);
        Ok(())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Language> {
        self.notifier.subscribe()
    }

    pub fn available_languages(&self) -> Vec<LanguageInfo> {
        Language::ALL.into_iter().map(LanguageInfo::from).collect()
    }

    /// Re-resolve as on a first run, ignoring any saved code.
    pub fn reset(&mut self) {
        self.language = self
            .system_locale
            .as_deref()
            .and_then(Language::from_locale)
            .unwrap_or_default();
    }
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    key.split('.')
        .try_fold(tables::table(language), |node: &'static Value, segment| {
            node.get(segment)
        })
        .and_then(Value::as_str)
}
