use std::cell::RefCell;

use crate::domain::{AppError, CancellationToken, CommandInvocation, CommandResult, OutputStream};
use crate::ports::ProcessExecutor;

/// What the scripted executor does when invoked.
pub enum Script {
    Exit(CommandResult),
    LaunchFailure(String),
}

/// Executor double that records invocations and replays a canned result.
///
/// Output lines are forwarded to the caller's sink (stdout first, then stderr).
pub struct ScriptedExecutor {
    script: Script,
    pub invocations: RefCell<Vec<CommandInvocation>>,
}

impl ScriptedExecutor {
    pub fn exiting(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self::new(Script::Exit(CommandResult {
            exit_code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }))
    }

    pub fn failing_to_launch(details: &str) -> Self {
        Self::new(Script::LaunchFailure(details.to_string()))
    }

    fn new(script: Script) -> Self {
        Self { script, invocations: RefCell::new(Vec::new()) }
    }

    pub fn invocations(&self) -> Vec<CommandInvocation> {
        self.invocations.borrow().clone()
    }

    pub fn last_arguments(&self) -> Option<Vec<String>> {
        self.invocations.borrow().last().map(|inv| inv.arguments().to_vec())
    }
}

impl ProcessExecutor for ScriptedExecutor {
    fn execute(
        &self,
        invocation: &CommandInvocation,
        on_line: &mut dyn FnMut(OutputStream, &str),
        cancel: &CancellationToken,
    ) -> Result<CommandResult, AppError> {
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        self.invocations.borrow_mut().push(invocation.clone());

        match &self.script {
            Script::LaunchFailure(details) => Err(AppError::Launch {
                executable: invocation.executable().to_string(),
                details: details.clone(),
            }),
            Script::Exit(result) => {
                for line in result.stdout.lines() {
                    on_line(OutputStream::Stdout, line);
                }
                for line in result.stderr.lines() {
                    on_line(OutputStream::Stderr, line);
                }
                Ok(result.clone())
            }
        }
    }
}
