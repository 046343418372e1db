pub mod deploy;
pub mod new_app;
pub mod render;
pub mod select_app;
pub mod settings;

pub const DEPLOY_TITLE: &str = "Docker Application Deploy";
