use std::path::{Path, PathBuf};

/// Default name of the external tool.
pub const DOCKER_APP: &str = "docker-app";

/// One run of the external tool: executable, discrete argument tokens, working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    executable: String,
    arguments: Vec<String>,
    working_directory: Option<PathBuf>,
}

impl CommandInvocation {
    pub fn new(
        executable: impl Into<String>,
        arguments: Vec<String>,
        working_directory: Option<PathBuf>,
    ) -> Self {
        Self { executable: executable.into(), arguments, working_directory }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref()
    }

    /// Space-joined rendering for logs. Not suitable for shell evaluation.
    pub fn display(&self) -> String {
        std::iter::once(self.executable.as_str())
            .chain(self.arguments.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Which pipe a captured line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Captured outcome of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code, `-1` when the process was terminated by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Standard error followed by standard output.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stderr, self.stdout)
    }
}
