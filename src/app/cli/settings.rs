use std::path::PathBuf;

use clap::Args;

use crate::adapters::TerminalHost;
use crate::app::CommandId;
use crate::app::api::{self, RunOptions};
use crate::domain::{AppError, AppSettings, Orchestrator, SettingsOverrides};

#[derive(Args)]
pub struct SettingsArgs {
    /// Print the stored settings instead of editing them
    #[arg(long, conflicts_with_all = ["orchestrator", "kubeconfig", "namespace", "stack_name", "parameters"])]
    show: bool,
    /// Print as JSON (with --show)
    #[arg(long, requires = "show")]
    json: bool,
    /// swarm or kubernetes
    #[arg(long, value_parser = parse_orchestrator)]
    orchestrator: Option<Orchestrator>,
    #[arg(long)]
    kubeconfig: Option<String>,
    #[arg(long)]
    namespace: Option<String>,
    #[arg(long)]
    stack_name: Option<String>,
    /// Override parameter as key=value (repeatable; replaces the stored list)
    #[arg(long = "parameter")]
    parameters: Vec<String>,
}

impl SettingsArgs {
    fn overrides(self) -> SettingsOverrides {
        SettingsOverrides {
            orchestrator: self.orchestrator,
            kube_config: self.kubeconfig,
            namespace: self.namespace,
            stack_name: self.stack_name,
            parameters: (!self.parameters.is_empty()).then_some(self.parameters),
        }
    }
}

pub fn run_settings(project_dir: Option<PathBuf>, args: SettingsArgs) -> Result<i32, AppError> {
    let project_dir = match project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    if args.show {
        let settings = api::load_settings_at(&project_dir)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        } else {
            print!("{}", format_settings(&settings));
        }
        return Ok(0);
    }

    let overrides = args.overrides();
    let host = if overrides.is_empty() {
        TerminalHost::new()
    } else {
        TerminalHost::new().with_settings_overrides(overrides)
    };
    api::run_at(project_dir, CommandId::Settings, host, RunOptions::default())
}

fn parse_orchestrator(value: &str) -> Result<Orchestrator, String> {
    Orchestrator::parse(value)
        .ok_or_else(|| format!("unknown orchestrator '{}' (expected swarm or kubernetes)", value))
}

fn format_settings(settings: &AppSettings) -> String {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    let mut out = String::new();

    out.push_str(&format!("orchestrator: {}\n", settings.orchestrator()));
    out.push_str(&format!("kubeconfig: {}\n", field(&settings.kube_config)));
    out.push_str(&format!("namespace: {}\n", field(&settings.namespace)));
    out.push_str(&format!("stack name: {}\n", field(&settings.stack_name)));
    out.push_str(&format!("application: {}\n", field(&settings.application_location)));
    out.push_str("parameters:\n");
    for line in settings.parameter_lines() {
        out.push_str(&format!("  {}\n", line));
    }
    out
}
