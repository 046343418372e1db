//! Command identifiers and the table routing them to handlers.
//!
//! Every command runs through [`dispatch`], which turns handler errors into a
//! user-facing message instead of letting them escape to the caller.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::app::AppContext;
use crate::app::commands::{self, deploy, new_app, render, select_app, settings};
use crate::domain::{AppError, message};
use crate::ports::{ConfigurationStore, HostUi, ProcessExecutor};

/// Exit code reported when a run was cancelled.
pub const CANCELLED_EXIT_CODE: i32 = 130;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Deploy,
    Render,
    Inspect,
    Validate,
    NewApp,
    Settings,
    SelectApp,
}

impl CommandId {
    pub const ALL: [CommandId; 7] = [
        CommandId::Deploy,
        CommandId::Render,
        CommandId::Inspect,
        CommandId::Validate,
        CommandId::NewApp,
        CommandId::Settings,
        CommandId::SelectApp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandId::Deploy => "deploy",
            CommandId::Render => "render",
            CommandId::Inspect => "inspect",
            CommandId::Validate => "validate",
            CommandId::NewApp => "new-app",
            CommandId::Settings => "settings",
            CommandId::SelectApp => "select-app",
        }
    }

    /// Title used for messages this command shows.
    pub fn title(&self) -> &'static str {
        match self {
            CommandId::Deploy => commands::DEPLOY_TITLE,
            CommandId::Render => render::RENDER_TITLE,
            CommandId::Inspect => render::INSPECT_TITLE,
            CommandId::Validate => render::VALIDATE_TITLE,
            CommandId::NewApp => new_app::TITLE,
            CommandId::Settings => settings::TITLE,
            CommandId::SelectApp => select_app::TITLE,
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| AppError::UnknownCommand(s.to_string()))
    }
}

pub type Handler<S, E, H> = fn(&AppContext<S, E, H>) -> Result<i32, AppError>;

/// The command table: one handler per identifier.
pub fn handler<S, E, H>(id: CommandId) -> Handler<S, E, H>
where
    S: ConfigurationStore,
    E: ProcessExecutor,
    H: HostUi,
{
    match id {
        CommandId::Deploy => |ctx| deploy::execute(ctx).map(|r| r.exit_code),
        CommandId::Render => |ctx| render::render(ctx).map(|r| r.exit_code),
        CommandId::Inspect => |ctx| render::inspect(ctx).map(|r| r.exit_code),
        CommandId::Validate => |ctx| render::validate(ctx).map(|r| r.exit_code),
        CommandId::NewApp => |ctx| new_app::execute(ctx).map(|o| o.exit_code()),
        CommandId::Settings => |ctx| settings::execute(ctx).map(|_| 0),
        CommandId::SelectApp => |ctx| select_app::execute(ctx).map(|_| 0),
    }
}

/// Run `id` and return its exit code.
///
/// Errors are shown through the host under the command's title; a cancelled run
/// shows nothing.
pub fn dispatch<S, E, H>(ctx: &AppContext<S, E, H>, id: CommandId) -> i32
where
    S: ConfigurationStore,
    E: ProcessExecutor,
    H: HostUi,
{
    debug!("Running command '{}'", id);
    match handler::<S, E, H>(id)(ctx) {
        Ok(code) => code,
        Err(AppError::Cancelled) => {
            debug!("Command '{}' cancelled", id);
            CANCELLED_EXIT_CODE
        }
        Err(err) => {
            warn!("Command '{}' failed: {}", id, err);
            if let Some(text) = message::for_error(&err) {
                ctx.host().show(id.title(), &text);
            }
            1
        }
    }
}
