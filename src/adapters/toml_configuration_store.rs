use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ConfigurationStore;

#[derive(Debug, Default)]
struct Entries {
    values: BTreeMap<String, String>,
    persisted: BTreeSet<String>,
}

/// Configuration store backed by a flat TOML table of string values.
///
/// Only keys flagged persistent are written to disk. Every key read from the file is
/// flagged persistent; keys set without the flag live for the process lifetime only.
#[derive(Debug)]
pub struct TomlConfigurationStore {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl TomlConfigurationStore {
    /// Open the store at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let mut entries = Entries::default();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let values: BTreeMap<String, String> = toml::from_str(&content)?;
            entries.persisted = values.keys().cloned().collect();
            entries.values = values;
            debug!("Loaded {} setting(s) from {}", entries.values.len(), path.display());
        }

        Ok(Self { path, entries: Mutex::new(entries) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn flush(&self, entries: &Entries) -> Result<(), AppError> {
        let persisted: BTreeMap<&str, &str> = entries
            .values
            .iter()
            .filter(|(key, _)| entries.persisted.contains(*key))
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(&persisted)?)?;
        debug!("Wrote {} setting(s) to {}", persisted.len(), self.path.display());
        Ok(())
    }
}

impl ConfigurationStore for TomlConfigurationStore {
    fn exists(&self, key: &str) -> bool {
        self.lock().values.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.lock();
        entries.values.insert(key.to_string(), value.to_string());
        if entries.persisted.contains(key) {
            self.flush(&entries)?;
        }
        Ok(())
    }

    fn set_persist(&self, key: &str, persist: bool) -> Result<(), AppError> {
        let mut entries = self.lock();
        let changed = if persist {
            entries.persisted.insert(key.to_string())
        } else {
            entries.persisted.remove(key)
        };
        if changed {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
