use crate::store::atomic_writer::AtomicWriter;
use focusboard_core::{FocusError, FocusResult, KeyValueStore};
use std::path::{Path, PathBuf};

/// Directory-backed key-value store
/// Each key lives in its own `<key>.json` file so entries stay independent
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl AsRef<Path>) -> FocusResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        tracing::debug!("Opened key-value store at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> FocusResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(FocusError::Validation(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_raw(&self, key: &str) -> FocusResult<Option<String>> {
        let path = self.entry_path(key)?;
        match AtomicWriter::read_optional(&path)? {
            Some(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| FocusError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> FocusResult<()> {
        let path = self.entry_path(key)?;
        AtomicWriter::write_atomic(&path, value.as_bytes())
    }

    fn remove(&self, key: &str) -> FocusResult<()> {
        let path = self.entry_path(key)?;
        AtomicWriter::remove_if_exists(&path)
    }
}
