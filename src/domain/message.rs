//! User-visible text produced from invocation results.

use super::error::AppError;
use super::invocation::CommandResult;

pub const LAUNCH_FAILURE_PREFIX: &str = "Cannot run docker-app: ";

pub fn launch_failure(details: &str) -> String {
    format!("{LAUNCH_FAILURE_PREFIX}{details}")
}

/// Framed outcome of `docker-app init`.
pub fn init_outcome(result: &CommandResult) -> String {
    let header =
        if result.success() { "Application created!" } else { "Error creating application:" };
    format!("{header}\n{}", result.combined())
}

/// Unframed outcome of render-like subcommands.
pub fn tool_output(result: &CommandResult) -> String {
    result.combined()
}

/// Banner written to the log before a deploy starts.
pub fn deploy_banner(command_line: &str) -> String {
    format!("Deploy command: {command_line}")
}

pub fn exit_code_line(exit_code: i32) -> String {
    format!("docker-app exited with code {exit_code}")
}

pub fn location_set(location: &str) -> String {
    format!("Docker Application set to {location}")
}

pub const LOCATION_UNSET: &str = "Docker Application unset";

pub const SETTINGS_SAVED: &str = "Settings saved";

/// Message shown for an error caught at the command boundary. `None` means stay silent.
pub fn for_error(err: &AppError) -> Option<String> {
    match err {
        AppError::Cancelled => None,
        AppError::Launch { details, .. } => Some(launch_failure(details)),
        other => Some(other.to_string()),
    }
}
