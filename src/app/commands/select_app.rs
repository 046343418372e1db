use crate::app::{AppContext, settings_store};
use crate::domain::{AppError, message};
use crate::ports::{ConfigurationStore, HostUi, ProcessExecutor};

pub const TITLE: &str = "Docker Application selection";
pub const PICKER_TITLE: &str = "Select Docker Application file or metadata file";

/// Pick the application the other commands operate on.
///
/// Picking a recognized metadata file selects its directory; cancelling unsets the location.
/// Returns the stored location, `None` when unset.
pub fn execute<S, E, H>(ctx: &AppContext<S, E, H>) -> Result<Option<String>, AppError>
where
    S: ConfigurationStore,
    E: ProcessExecutor,
    H: HostUi,
{
    let location = ctx
        .host()
        .pick_file(PICKER_TITLE)?
        .map(|picked| ctx.config().recognized_app_files.resolve(&picked));

    let text = match &location {
        Some(location) => {
            settings_store::save_app_location(ctx.store(), location)?;
            message::location_set(location)
        }
        None => {
            settings_store::save_app_location(ctx.store(), "")?;
            message::LOCATION_UNSET.to_string()
        }
    };

    ctx.host().show(TITLE, &text);
    Ok(location)
}
