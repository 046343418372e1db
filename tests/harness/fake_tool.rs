//! Shell-script stand-in for the docker-app executable.

use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use super::TestContext;
use super::test_context::ARGS_FILE_ENV;

impl TestContext {
    /// Install a fake `docker-app` that records its arguments and then runs `body`.
    pub(crate) fn install_tool(&self, body: &str) {
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"${}\"\n{}\n",
            ARGS_FILE_ENV, body
        );
        let path = self.tool_path();
        fs::write(&path, script).expect("Failed to write fake docker-app");

        #[cfg(unix)]
        {
            let mut permissions = fs::metadata(&path).unwrap().permissions();
            permissions.set_mode(0o755);
            fs::set_permissions(&path, permissions).unwrap();
        }
    }

    /// Install a fake `docker-app` that prints `stdout`/`stderr` and exits with `code`.
    pub(crate) fn install_tool_output(&self, stdout: &str, stderr: &str, code: i32) {
        let mut body = String::new();
        for line in stdout.lines() {
            body.push_str(&format!("echo '{}'\n", line));
        }
        for line in stderr.lines() {
            body.push_str(&format!("echo '{}' >&2\n", line));
        }
        body.push_str(&format!("exit {}", code));
        self.install_tool(&body);
    }
}
