//! Terminal implementation of the host UI ports.
//!
//! Notifications and output-pane lines go to stdout. Dialogs are answered from
//! values supplied on the command line when present, otherwise through
//! interactive `dialoguer` prompts.

use std::io::ErrorKind;
use std::path::PathBuf;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};
use tracing::debug;

use crate::domain::{AppError, AppSettings, NewAppSettings, Orchestrator, SettingsOverrides};
use crate::ports::{DialogHost, DialogOutcome, FilePicker, LogSink, MessageSink};

#[derive(Debug, Clone, Default)]
pub struct TerminalHost {
    file_choice: Option<DialogOutcome<PathBuf>>,
    new_app: Option<NewAppSettings>,
    settings_overrides: Option<SettingsOverrides>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the file picker without prompting.
    pub fn with_file_choice(mut self, choice: DialogOutcome<PathBuf>) -> Self {
        self.file_choice = Some(choice);
        self
    }

    /// Answer the new-application dialog without prompting.
    pub fn with_new_app(mut self, settings: NewAppSettings) -> Self {
        self.new_app = Some(settings);
        self
    }

    /// Answer the settings dialog by applying `overrides` to the current settings.
    pub fn with_settings_overrides(mut self, overrides: SettingsOverrides) -> Self {
        self.settings_overrides = Some(overrides);
        self
    }
}

impl MessageSink for TerminalHost {
    fn show(&self, title: &str, message: &str) {
        debug!("{}", title);
        if message.ends_with('\n') {
            print!("{message}");
        } else {
            println!("{message}");
        }
    }
}

impl LogSink for TerminalHost {
    fn activate(&self) {}

    fn append_line(&self, text: &str) {
        println!("{text}");
    }
}

/// Picked paths are made absolute against the invoking directory, not the project root.
impl FilePicker for TerminalHost {
    fn pick_file(&self, title: &str) -> Result<Option<PathBuf>, AppError> {
        let picked = match &self.file_choice {
            Some(DialogOutcome::Confirmed(path)) => Some(path.clone()),
            Some(DialogOutcome::Cancelled) => None,
            None => prompt_text(&format!("{title} (empty to unset)"), "")?
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        };

        match picked {
            Some(path) => Ok(Some(std::path::absolute(&path)?)),
            None => Ok(None),
        }
    }
}

impl DialogHost for TerminalHost {
    fn settings_dialog(
        &self,
        current: &AppSettings,
    ) -> Result<DialogOutcome<AppSettings>, AppError> {
        if let Some(overrides) = &self.settings_overrides {
            return Ok(DialogOutcome::Confirmed(overrides.apply(current.clone())));
        }

        let Some(orchestrator) = prompt_orchestrator(current.orchestrator())? else {
            return Ok(DialogOutcome::Cancelled);
        };
        let Some(kube_config) = prompt_text("Kubeconfig", opt(&current.kube_config))? else {
            return Ok(DialogOutcome::Cancelled);
        };
        let Some(namespace) = prompt_text("Namespace", opt(&current.namespace))? else {
            return Ok(DialogOutcome::Cancelled);
        };
        let Some(stack_name) = prompt_text("Stack name", opt(&current.stack_name))? else {
            return Ok(DialogOutcome::Cancelled);
        };
        let Some(parameters) = prompt_parameters(current)? else {
            return Ok(DialogOutcome::Cancelled);
        };

        Ok(DialogOutcome::Confirmed(AppSettings {
            orchestrator: Some(orchestrator),
            kube_config: Some(kube_config),
            namespace: Some(namespace),
            stack_name: Some(stack_name),
            override_parameters: Some(parameters),
            application_location: current.application_location.clone(),
        }))
    }

    fn new_app_dialog(&self) -> Result<DialogOutcome<NewAppSettings>, AppError> {
        if let Some(settings) = &self.new_app {
            return Ok(DialogOutcome::Confirmed(settings.clone()));
        }

        let Some(name) = prompt_text("Application name", "")? else {
            return Ok(DialogOutcome::Cancelled);
        };
        let Some(description) = prompt_text("Description", "")? else {
            return Ok(DialogOutcome::Cancelled);
        };
        let Some(maintainers) = prompt_lines("Maintainer (name:email, empty to finish)")? else {
            return Ok(DialogOutcome::Cancelled);
        };
        let single_file = match Confirm::new()
            .with_prompt("Single-file application?")
            .default(false)
            .interact_opt()
        {
            Ok(Some(value)) => value,
            Ok(None) => return Ok(DialogOutcome::Cancelled),
            Err(err) => return Err(prompt_error("single-file choice", err)),
        };

        Ok(DialogOutcome::Confirmed(NewAppSettings {
            name,
            description: Some(description),
            maintainers: Some(maintainers.join("\n")),
            single_file,
        }))
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn prompt_error(what: &str, err: DialoguerError) -> AppError {
    AppError::Validation(format!("Failed to read {}: {}", what, err))
}

fn prompt_text(prompt: &str, initial: &str) -> Result<Option<String>, AppError> {
    let input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    let input = if initial.is_empty() { input } else { input.with_initial_text(initial) };

    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(prompt_error(prompt, err)),
    }
}

fn prompt_lines(prompt: &str) -> Result<Option<Vec<String>>, AppError> {
    let mut lines = Vec::new();
    loop {
        match prompt_text(prompt, "")? {
            Some(line) if line.trim().is_empty() => return Ok(Some(lines)),
            Some(line) => lines.push(line),
            None => return Ok(None),
        }
    }
}

fn prompt_orchestrator(current: Orchestrator) -> Result<Option<Orchestrator>, AppError> {
    let items: Vec<&str> = Orchestrator::ALL.iter().map(Orchestrator::as_str).collect();
    let default = Orchestrator::ALL.iter().position(|o| *o == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Orchestrator")
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|err| prompt_error("orchestrator", err))?;

    Ok(selection.map(|index| Orchestrator::ALL[index]))
}

fn prompt_parameters(current: &AppSettings) -> Result<Option<String>, AppError> {
    let existing = current.parameter_lines();
    if !existing.is_empty() {
        let keep = Confirm::new()
            .with_prompt(format!("Keep override parameters ({})?", existing.join(", ")))
            .default(true)
            .interact_opt()
            .map_err(|err| prompt_error("parameter choice", err))?;
        match keep {
            Some(true) => return Ok(Some(existing.join("\n"))),
            Some(false) => {}
            None => return Ok(None),
        }
    }

    Ok(prompt_lines("Override parameter (key=value, empty to finish)")?
        .map(|lines| lines.join("\n")))
}
