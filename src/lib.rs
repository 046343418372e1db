//! dapp: drive the docker-app CLI from a project directory with stored deploy settings.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::CommandId;
pub use app::api::{RunOptions, load_settings_at, run, run_at};
pub use domain::{AppError, AppSettings, NewAppSettings, Orchestrator, RenderOptions};
