use tracing::info;

use crate::app::{AppContext, settings_store};
use crate::domain::{AppError, CommandResult, deploy_args, message};
use crate::ports::{ConfigurationStore, HostUi, ProcessExecutor};

/// Deploy the selected application, streaming tool output into the log pane.
pub fn execute<S, E, H>(ctx: &AppContext<S, E, H>) -> Result<CommandResult, AppError>
where
    S: ConfigurationStore,
    E: ProcessExecutor,
    H: HostUi,
{
    let settings = settings_store::load(ctx.store());
    let invocation = ctx.invocation(deploy_args(&settings));
    let host = ctx.host();

    host.append_line(&message::deploy_banner(&invocation.display()));
    host.activate();

    let result = ctx.executor().execute(
        &invocation,
        &mut |_, line| host.append_line(line),
        ctx.cancellation(),
    )?;

    if !result.success() {
        host.append_line(&message::exit_code_line(result.exit_code));
    }
    info!("Deploy finished with exit code {}", result.exit_code);
    Ok(result)
}
