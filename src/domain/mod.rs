pub mod arguments;
pub mod error;
pub mod invocation;
pub mod location;
pub mod message;
pub mod settings;

pub use arguments::{
    RenderOptions, deploy_args, init_args, inspect_args, render_args, validate_args,
};
pub use error::AppError;
pub use invocation::{CommandInvocation, CommandResult, DOCKER_APP, OutputStream};
pub use location::{DEFAULT_RECOGNIZED_APP_FILES, RecognizedAppFiles};
pub use settings::{AppSettings, NewAppSettings, Orchestrator, SettingsOverrides};

pub use tokio_util::sync::CancellationToken;
