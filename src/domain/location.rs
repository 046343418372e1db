use std::collections::BTreeSet;
use std::path::Path;

/// File names that identify a file inside an application directory rather than the application itself.
pub const DEFAULT_RECOGNIZED_APP_FILES: [&str; 4] =
    ["docker-compose.yml", "metadata.yml", "parameters.yml", "settings.yml"];

/// Configurable set of recognized metadata file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedAppFiles {
    names: BTreeSet<String>,
}

impl Default for RecognizedAppFiles {
    fn default() -> Self {
        Self::new(DEFAULT_RECOGNIZED_APP_FILES)
    }
}

impl RecognizedAppFiles {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.names.contains(file_name)
    }

    /// Application location for a picked file: the parent directory for recognized
    /// metadata files, the path itself otherwise. A bare recognized file name resolves to `.`.
    pub fn resolve(&self, picked: &Path) -> String {
        let recognized =
            picked.file_name().and_then(|name| name.to_str()).is_some_and(|name| self.contains(name));

        match picked.parent() {
            Some(parent) if recognized && parent.as_os_str().is_empty() => ".".to_string(),
            Some(parent) if recognized => parent.display().to_string(),
            _ => picked.display().to_string(),
        }
    }
}
