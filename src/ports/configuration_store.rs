use crate::domain::AppError;

/// Port for the host-owned key/value settings of the current project.
///
/// Each key carries its own persist flag; only persisted keys survive the session.
pub trait ConfigurationStore {
    /// Check whether a value has been written under `key`.
    fn exists(&self, key: &str) -> bool;

    /// Read the value under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Mark whether `key` persists across sessions.
    fn set_persist(&self, key: &str, persist: bool) -> Result<(), AppError>;
}
