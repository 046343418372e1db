use crate::domain::{AppError, CancellationToken, CommandInvocation, CommandResult, OutputStream};

/// Port for running the external tool with captured output.
pub trait ProcessExecutor {
    /// Run `invocation` to completion.
    ///
    /// `on_line` receives every output line (without its terminator) as soon as it is read.
    /// Fails with [`AppError::Launch`] when the executable cannot be started and with
    /// [`AppError::Cancelled`] when `cancel` fires before the process exits.
    fn execute(
        &self,
        invocation: &CommandInvocation,
        on_line: &mut dyn FnMut(OutputStream, &str),
        cancel: &CancellationToken,
    ) -> Result<CommandResult, AppError>;
}
