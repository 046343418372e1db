//! Tool configuration read from `.dapp/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AppError, DEFAULT_RECOGNIZED_APP_FILES, DOCKER_APP, RecognizedAppFiles};

/// Per-project state directory.
pub const STATE_DIR: &str = ".dapp";
pub const CONFIG_FILE: &str = "config.toml";
pub const SETTINGS_FILE: &str = "settings.toml";

/// Environment variable overriding the executable name.
pub const EXECUTABLE_ENV: &str = "DAPP_EXECUTABLE";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    executable: Option<String>,
    recognized_app_files: Option<Vec<String>>,
}

/// Resolved tool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub executable: String,
    pub recognized_app_files: RecognizedAppFiles,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            executable: DOCKER_APP.to_string(),
            recognized_app_files: RecognizedAppFiles::new(DEFAULT_RECOGNIZED_APP_FILES),
        }
    }
}

impl ToolConfig {
    /// Load `<project>/.dapp/config.toml` if present, then apply the environment override.
    pub fn load(project_dir: &Path) -> Result<Self, AppError> {
        let path = config_path(project_dir);
        let mut config = if path.exists() {
            debug!("Reading tool configuration from {}", path.display());
            Self::parse(&fs::read_to_string(&path)?)?
        } else {
            Self::default()
        };

        if let Some(executable) = std::env::var_os(EXECUTABLE_ENV) {
            let executable = executable.to_string_lossy().into_owned();
            if !executable.trim().is_empty() {
                config.executable = executable;
            }
        }

        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(executable) = file.executable {
            if executable.trim().is_empty() {
                return Err(AppError::config_error("executable must be a non-empty string"));
            }
            config.executable = executable;
        }
        if let Some(names) = file.recognized_app_files {
            if names.iter().any(|name| name.trim().is_empty()) {
                return Err(AppError::config_error(
                    "recognized_app_files entries must be non-empty strings",
                ));
            }
            config.recognized_app_files = RecognizedAppFiles::new(names);
        }

        Ok(config)
    }
}

pub fn config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(STATE_DIR).join(CONFIG_FILE)
}

pub fn settings_path(project_dir: &Path) -> PathBuf {
    project_dir.join(STATE_DIR).join(SETTINGS_FILE)
}
