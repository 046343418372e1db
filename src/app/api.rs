//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against a project directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::adapters::{
    CancelTriggers, StdProcessExecutor, TerminalHost, TomlConfigurationStore, spawn_watcher,
};
use crate::app::config::{self, ToolConfig};
use crate::app::dispatch::{self, CommandId};
use crate::app::{AppContext, settings_store};
use crate::domain::{CancellationToken, RenderOptions};

pub use crate::app::dispatch::CANCELLED_EXIT_CODE;
pub use crate::domain::{AppError, AppSettings};

/// Per-run options collected by the caller.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub render: RenderOptions,
    /// Cancel the tool run after this long.
    pub timeout: Option<Duration>,
    /// Cancel the tool run on Ctrl+C instead of exiting.
    pub cancel_on_interrupt: bool,
}

type ProjectContext = AppContext<TomlConfigurationStore, StdProcessExecutor, TerminalHost>;

/// Create an `AppContext` for the project at `project_dir`.
fn create_context(
    project_dir: PathBuf,
    host: TerminalHost,
    options: RunOptions,
) -> Result<ProjectContext, AppError> {
    let store = TomlConfigurationStore::open(config::settings_path(&project_dir))?;
    let tool_config = ToolConfig::load(&project_dir)?;
    debug!("Using executable '{}' from {}", tool_config.executable, project_dir.display());

    let cancel = CancellationToken::new();
    spawn_watcher(
        cancel.clone(),
        CancelTriggers { timeout: options.timeout, ctrl_c: options.cancel_on_interrupt },
    )?;

    Ok(AppContext::new(store, StdProcessExecutor::new(), host, tool_config)
        .with_project_dir(project_dir)
        .with_render_options(options.render)
        .with_cancellation(cancel))
}

/// Run a command in the current directory.
pub fn run(id: CommandId, host: TerminalHost, options: RunOptions) -> Result<i32, AppError> {
    run_at(std::env::current_dir()?, id, host, options)
}

/// Run a command for the project at `project_dir`.
///
/// Errors raised by the command itself are shown through `host` and reflected in the
/// exit code; only failures to set up the project surface as `Err`.
pub fn run_at(
    project_dir: impl Into<PathBuf>,
    id: CommandId,
    host: TerminalHost,
    options: RunOptions,
) -> Result<i32, AppError> {
    let ctx = create_context(project_dir.into(), host, options)?;
    Ok(dispatch::dispatch(&ctx, id))
}

/// Read the stored settings for the project at `project_dir`.
pub fn load_settings_at(project_dir: &Path) -> Result<AppSettings, AppError> {
    let store = TomlConfigurationStore::open(config::settings_path(project_dir))?;
    Ok(settings_store::load(&store))
}
