use crate::app::{AppContext, settings_store};
use crate::domain::{AppError, AppSettings, message};
use crate::ports::{ConfigurationStore, DialogOutcome, HostUi, ProcessExecutor};

pub const TITLE: &str = "Docker Application Settings";

/// Present the settings dialog and persist the confirmed values.
///
/// Returns the saved settings, or `None` when the dialog was cancelled.
pub fn execute<S, E, H>(ctx: &AppContext<S, E, H>) -> Result<Option<AppSettings>, AppError>
where
    S: ConfigurationStore,
    E: ProcessExecutor,
    H: HostUi,
{
    let current = settings_store::load(ctx.store());
    let updated = match ctx.host().settings_dialog(&current)? {
        DialogOutcome::Confirmed(settings) => settings,
        DialogOutcome::Cancelled => return Ok(None),
    };

    settings_store::save(ctx.store(), &updated)?;
    ctx.host().show(TITLE, message::SETTINGS_SAVED);
    Ok(Some(settings_store::load(ctx.store())))
}
