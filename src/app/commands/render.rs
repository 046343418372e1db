//! Render, inspect and validate: run once, show stderr + stdout as one message.

use tracing::debug;

use crate::app::{AppContext, settings_store};
use crate::domain::{
    AppError, CommandResult, inspect_args, message, render_args, validate_args,
};
use crate::ports::{ConfigurationStore, HostUi, ProcessExecutor};

pub const RENDER_TITLE: &str = "Docker Application Render";
pub const INSPECT_TITLE: &str = "Docker Application Inspect";
pub const VALIDATE_TITLE: &str = "Docker Application Validate";

pub fn render<S, E, H>(ctx: &AppContext<S, E, H>) -> Result<CommandResult, AppError>
where
    S: ConfigurationStore,
    E: ProcessExecutor,
    H: HostUi,
{
    let settings = settings_store::load(ctx.store());
    run_and_show(ctx, render_args(&settings, ctx.render_options()), RENDER_TITLE)
}

pub fn inspect<S, E, H>(ctx: &AppContext<S, E, H>) -> Result<CommandResult, AppError>
where
    S: ConfigurationStore,
    E: ProcessExecutor,
    H: HostUi,
{
    let settings = settings_store::load(ctx.store());
    run_and_show(ctx, inspect_args(&settings), INSPECT_TITLE)
}

pub fn validate<S, E, H>(ctx: &AppContext<S, E, H>) -> Result<CommandResult, AppError>
where
    S: ConfigurationStore,
    E: ProcessExecutor,
    H: HostUi,
{
    let settings = settings_store::load(ctx.store());
    run_and_show(ctx, validate_args(&settings), VALIDATE_TITLE)
}

fn run_and_show<S, E, H>(
    ctx: &AppContext<S, E, H>,
    arguments: Vec<String>,
    title: &str,
) -> Result<CommandResult, AppError>
where
    S: ConfigurationStore,
    E: ProcessExecutor,
    H: HostUi,
{
    let invocation = ctx.invocation(arguments);
    let result = ctx.executor().execute(&invocation, &mut |_, _| {}, ctx.cancellation())?;
    debug!("'{}' exited with code {}", invocation.display(), result.exit_code);

    ctx.host().show(title, &message::tool_output(&result));
    Ok(result)
}
