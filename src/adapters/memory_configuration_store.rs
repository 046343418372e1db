use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::AppError;
use crate::ports::ConfigurationStore;

#[derive(Debug, Default)]
struct Entries {
    values: BTreeMap<String, String>,
    persisted: BTreeSet<String>,
}

/// In-memory configuration store for tests and embedding hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigurationStore {
    // Arc<Mutex> so clones observe each other's writes
    entries: Arc<Mutex<Entries>>,
}

impl MemoryConfigurationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with values, none of them flagged persistent.
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        {
            let mut entries = store.lock();
            for (key, value) in values {
                entries.values.insert(key.to_string(), value.to_string());
            }
        }
        store
    }

    pub fn is_persisted(&self, key: &str) -> bool {
        self.lock().persisted.contains(key)
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigurationStore for MemoryConfigurationStore {
    fn exists(&self, key: &str) -> bool {
        self.lock().values.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.lock().values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_persist(&self, key: &str, persist: bool) -> Result<(), AppError> {
        let mut entries = self.lock();
        if persist {
            entries.persisted.insert(key.to_string());
        } else {
            entries.persisted.remove(key);
        }
        Ok(())
    }
}
