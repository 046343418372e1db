//! Shared testing harness for `dapp` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variable naming the file the fake tool records its arguments to.
pub(crate) const ARGS_FILE_ENV: &str = "DAPP_TEST_ARGS";

/// Testing harness providing an isolated project and a fake `docker-app`.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create test bin directory");

        Self { root, work_dir, bin_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Create a directory next to the project, for running `dapp` from elsewhere.
    pub(crate) fn sibling_dir(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).expect("Failed to create sibling directory");
        dir
    }

    /// Location string `select` stores for `relative`, picked from `base`.
    pub(crate) fn absolute_from(base: &Path, relative: &str) -> String {
        let base = base.canonicalize().expect("Failed to canonicalize base directory");
        base.join(relative).display().to_string()
    }

    /// Path the fake tool is installed at (whether or not it exists yet).
    pub(crate) fn tool_path(&self) -> PathBuf {
        self.bin_dir.join("docker-app")
    }

    /// Build a command for invoking the compiled `dapp` binary within the project.
    ///
    /// The executable override always points at [`Self::tool_path`], so a docker-app
    /// installed on the host is never reached.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dapp").expect("Failed to locate dapp binary");
        cmd.current_dir(&self.work_dir)
            .env("DAPP_EXECUTABLE", self.tool_path())
            .env(ARGS_FILE_ENV, self.args_file())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Like [`Self::cli`], but resolve `docker-app` through `PATH` with the fake tool first.
    pub(crate) fn cli_with_tool_on_path(&self) -> Command {
        let mut paths = vec![self.bin_dir.clone()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        let path = std::env::join_paths(paths).expect("Failed to build PATH");

        let mut cmd = self.cli();
        cmd.env_remove("DAPP_EXECUTABLE").env("PATH", path);
        cmd
    }

    fn args_file(&self) -> PathBuf {
        self.root.path().join("tool-args.txt")
    }

    /// Arguments of the last fake-tool run, one per line as received.
    pub(crate) fn recorded_args(&self) -> Option<Vec<String>> {
        let content = fs::read_to_string(self.args_file()).ok()?;
        Some(content.lines().map(str::to_string).collect())
    }

    /// Path to `.dapp/settings.toml`.
    pub(crate) fn settings_path(&self) -> PathBuf {
        self.work_dir.join(".dapp").join("settings.toml")
    }

    /// Seed the settings file.
    pub(crate) fn write_settings(&self, content: &str) {
        let path = self.settings_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create .dapp");
        fs::write(path, content).expect("Failed to write settings.toml");
    }

    pub(crate) fn read_settings(&self) -> toml::Table {
        let content = fs::read_to_string(self.settings_path()).expect("settings.toml should exist");
        content.parse().expect("settings.toml should be valid TOML")
    }

    /// Seed `.dapp/config.toml`.
    pub(crate) fn write_config(&self, content: &str) {
        let path = self.work_dir.join(".dapp").join("config.toml");
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create .dapp");
        fs::write(path, content).expect("Failed to write config.toml");
    }
}
