//! Argument-vector builders for the docker-app subcommands.
//!
//! Every builder returns discrete tokens; nothing here is ever passed through a shell,
//! so values are not quoted or escaped.

use super::error::AppError;
use super::settings::{AppSettings, NewAppSettings};

/// Extra switches accepted by the render builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append the stored override parameters as `-s` pairs.
    pub with_parameters: bool,
    /// Write the rendered output to this path (`-o`).
    pub output: Option<String>,
}

/// `deploy [location] [--orchestrator o] [--name n] [--namespace ns] [--kubeconfig k] [-s p]...`
pub fn deploy_args(settings: &AppSettings) -> Vec<String> {
    let mut args = vec!["deploy".to_string()];

    push_positional(&mut args, settings.application_location.as_deref());
    if let Some(orchestrator) = settings.orchestrator {
        push_flag(&mut args, "--orchestrator", Some(orchestrator.as_str()));
    }
    push_flag(&mut args, "--name", settings.stack_name.as_deref());
    push_flag(&mut args, "--namespace", settings.namespace.as_deref());
    push_flag(&mut args, "--kubeconfig", settings.kube_config.as_deref());
    push_parameters(&mut args, settings);

    args
}

/// `init <name> [--description d] [--maintainer m]... [-s]`
pub fn init_args(settings: &NewAppSettings) -> Result<Vec<String>, AppError> {
    let name = settings.app_name();
    if name.is_empty() {
        return Err(AppError::validation("Application name is required"));
    }

    let mut args = vec!["init".to_string(), name];

    if let Some(description) = settings.description.as_deref() {
        let description = strip_carriage_returns(description);
        if !description.is_empty() {
            args.push("--description".to_string());
            args.push(description);
        }
    }
    for maintainer in settings.maintainer_lines() {
        args.push("--maintainer".to_string());
        args.push(maintainer.to_string());
    }
    if settings.single_file {
        args.push("-s".to_string());
    }

    Ok(args)
}

/// `render [location] [-s p]... [-o output]`
pub fn render_args(settings: &AppSettings, options: &RenderOptions) -> Vec<String> {
    let mut args = vec!["render".to_string()];

    push_positional(&mut args, settings.application_location.as_deref());
    if options.with_parameters {
        push_parameters(&mut args, settings);
    }
    push_flag(&mut args, "-o", options.output.as_deref());

    args
}

/// `inspect [location]`
pub fn inspect_args(settings: &AppSettings) -> Vec<String> {
    let mut args = vec!["inspect".to_string()];
    push_positional(&mut args, settings.application_location.as_deref());
    args
}

/// `validate [location]`
pub fn validate_args(settings: &AppSettings) -> Vec<String> {
    let mut args = vec!["validate".to_string()];
    push_positional(&mut args, settings.application_location.as_deref());
    args
}

fn push_positional(args: &mut Vec<String>, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        args.push(value.to_string());
    }
}

fn push_flag(args: &mut Vec<String>, flag: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        args.push(flag.to_string());
        args.push(value.to_string());
    }
}

fn push_parameters(args: &mut Vec<String>, settings: &AppSettings) {
    for line in settings.parameter_lines() {
        args.push("-s".to_string());
        args.push(line.to_string());
    }
}

fn strip_carriage_returns(value: &str) -> String {
    value.replace('\r', "")
}
