use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, CommandResult, NewAppSettings, init_args, message};
use crate::ports::{ConfigurationStore, DialogOutcome, HostUi, ProcessExecutor};

pub const TITLE: &str = "Create Application";

/// Outcome of the new-application flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewAppOutcome {
    /// The dialog was dismissed; nothing ran.
    Cancelled,
    Finished { result: CommandResult, created_files: Vec<PathBuf> },
}

impl NewAppOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            NewAppOutcome::Cancelled => 0,
            NewAppOutcome::Finished { result, .. } => result.exit_code,
        }
    }
}

/// Collect application details, run `docker-app init`, and report the outcome.
pub fn execute<S, E, H>(ctx: &AppContext<S, E, H>) -> Result<NewAppOutcome, AppError>
where
    S: ConfigurationStore,
    E: ProcessExecutor,
    H: HostUi,
{
    let settings = match ctx.host().new_app_dialog()? {
        DialogOutcome::Confirmed(settings) => settings,
        DialogOutcome::Cancelled => return Ok(NewAppOutcome::Cancelled),
    };

    let invocation = ctx.invocation(init_args(&settings)?);
    let result = ctx.executor().execute(&invocation, &mut |_, _| {}, ctx.cancellation())?;
    ctx.host().show(TITLE, &message::init_outcome(&result));

    let created_files = match ctx.project_dir() {
        Some(dir) if result.success() => created_files(dir, &settings)?,
        _ => Vec::new(),
    };
    for file in &created_files {
        info!("Created {}", file.display());
    }

    Ok(NewAppOutcome::Finished { result, created_files })
}

/// Files making up `<name>.dockerapp` under the project root: the directory contents,
/// or the single file itself.
fn created_files(project_dir: &Path, settings: &NewAppSettings) -> Result<Vec<PathBuf>, AppError> {
    let path = project_dir.join(format!("{}.dockerapp", settings.app_name()));

    if path.is_dir() {
        let mut files = Vec::new();
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    } else if path.is_file() {
        Ok(vec![path])
    } else {
        Ok(Vec::new())
    }
}
