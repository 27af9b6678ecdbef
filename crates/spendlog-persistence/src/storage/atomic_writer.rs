use spendlog_core::SpendlogResult;
use std::io::Write;
use std::path::Path;

/// Atomic file writer that prevents data corruption
/// Uses write-to-temp-file → atomic-rename pattern for safety
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically
    /// Writes to a temporary file first, then atomically renames it
    /// This prevents corruption if the process crashes mid-write
    pub fn write_atomic(path: &Path, data: &[u8]) -> SpendlogResult<()> {
        // Create temp file in same directory to ensure same filesystem
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;

        // Atomic rename (atomic on POSIX systems)
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read all data from a file
    pub fn read_all(path: &Path) -> SpendlogResult<Vec<u8>> {
        let data = std::fs::read(path)?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}
