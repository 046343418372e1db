pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod dispatch;
pub mod settings_store;

pub use context::AppContext;
pub use dispatch::CommandId;
