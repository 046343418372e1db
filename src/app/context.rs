use std::path::{Path, PathBuf};

use crate::app::config::ToolConfig;
use crate::domain::{CancellationToken, CommandInvocation, RenderOptions};
use crate::ports::{ConfigurationStore, HostUi, ProcessExecutor};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ConfigurationStore, E: ProcessExecutor, H: HostUi> {
    store: S,
    executor: E,
    host: H,
    config: ToolConfig,
    project_dir: Option<PathBuf>,
    render_options: RenderOptions,
    cancel: CancellationToken,
}

impl<S: ConfigurationStore, E: ProcessExecutor, H: HostUi> AppContext<S, E, H> {
    /// Create a new application context.
    pub fn new(store: S, executor: E, host: H, config: ToolConfig) -> Self {
        Self {
            store,
            executor,
            host,
            config,
            project_dir: None,
            render_options: RenderOptions::default(),
            cancel: CancellationToken::new(),
        }
    }

    /// Run the tool from `dir` (the project root).
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = Some(dir.into());
        self
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn project_dir(&self) -> Option<&Path> {
        self.project_dir.as_deref()
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Build an invocation of the configured executable from the project root.
    pub fn invocation(&self, arguments: Vec<String>) -> CommandInvocation {
        CommandInvocation::new(&self.config.executable, arguments, self.project_dir.clone())
    }
}
