use crate::traits::KeyValueStorage;
use spendlog_core::{SpendlogError, SpendlogResult};
use std::collections::HashMap;

/// In-memory key-value storage with an optional byte quota.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that refuses writes once all values together exceed `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    pub fn used_bytes(&self) -> usize {
        self.entries.values().map(String::len).sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> SpendlogResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> SpendlogResult<()> {
        if let Some(quota) = self.quota {
            let replaced = self.entries.get(key).map_or(0, String::len);
            let needed = self.used_bytes() - replaced + value.len();
            if needed > quota {
                return Err(SpendlogError::QuotaExceeded { needed, quota });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
