use focusboard_core::{FocusError, FocusResult};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Atomic file writer that prevents torn entries
/// Uses write-to-temp-file → atomic-rename pattern
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically
    /// A crash mid-write leaves the previous contents intact
    pub fn write_atomic(path: &Path, data: &[u8]) -> FocusResult<()> {
        // Temp file in same directory so the rename stays on one filesystem
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;

        temp_file
            .persist(path)
            .map_err(|e| FocusError::Io(e.error))?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a whole file, `None` when it does not exist
    pub fn read_optional(path: &Path) -> FocusResult<Option<Vec<u8>>> {
        match std::fs::read(path) {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a file, ignoring one that is already gone
    pub fn remove_if_exists(path: &Path) -> FocusResult<()> {
        match std::fs::remove_file(path) {
            Ok(()) => {
                tracing::debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
