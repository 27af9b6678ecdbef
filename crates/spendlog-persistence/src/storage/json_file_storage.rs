use crate::storage::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStorage;
use spendlog_core::{SpendlogError, SpendlogResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// JSON file-based key-value storage
///
/// The file holds a single JSON object mapping keys to string values.
/// A missing file behaves like empty storage.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_entries(&self) -> SpendlogResult<BTreeMap<String, String>> {
        if !self.exists() {
            return Ok(BTreeMap::new());
        }
        let bytes = AtomicWriter::read_all(&self.path)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            SpendlogError::Serialization(format!("{}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> SpendlogResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> SpendlogResult<()> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(SpendlogError::Serialization(reason)) => {
                tracing::warn!("Replacing unreadable storage file: {}", reason);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        let json_bytes = serde_json::to_vec_pretty(&entries)
            .map_err(|e| SpendlogError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &json_bytes)?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );
        Ok(())
    }
}
