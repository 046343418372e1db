use std::fmt;

use serde::Serialize;

/// Configuration key holding the deployment target kind.
pub const KEY_ORCHESTRATOR: &str = "dockerapp_orchestrator";
/// Configuration key holding the kubeconfig path.
pub const KEY_KUBECONFIG: &str = "dockerapp_kubeconfig";
/// Configuration key holding the Kubernetes namespace.
pub const KEY_NAMESPACE: &str = "dockerapp_namespace";
/// Configuration key holding the stack name.
pub const KEY_STACK_NAME: &str = "dockerapp_stackname";
/// Configuration key holding newline-separated override parameters.
pub const KEY_PARAMETERS: &str = "dockerapp_parameters";
/// Configuration key holding the selected application location.
pub const KEY_APP_LOCATION: &str = "dockerapp_applocation";

/// Keys written when the settings dialog is confirmed.
pub const DIALOG_KEYS: [&str; 5] =
    [KEY_ORCHESTRATOR, KEY_KUBECONFIG, KEY_NAMESPACE, KEY_STACK_NAME, KEY_PARAMETERS];

/// Deployment target kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orchestrator {
    #[default]
    Swarm,
    Kubernetes,
}

impl Orchestrator {
    pub const ALL: [Orchestrator; 2] = [Orchestrator::Swarm, Orchestrator::Kubernetes];

    /// Value stored under [`KEY_ORCHESTRATOR`] and passed to `--orchestrator`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orchestrator::Swarm => "swarm",
            Orchestrator::Kubernetes => "kubernetes",
        }
    }

    /// Interpret a stored value. Only the exact string `kubernetes` selects Kubernetes.
    pub fn from_stored(value: &str) -> Orchestrator {
        if value == "kubernetes" { Orchestrator::Kubernetes } else { Orchestrator::Swarm }
    }

    /// Parse user input, accepting either name case-insensitively.
    pub fn parse(value: &str) -> Option<Orchestrator> {
        match value.trim().to_lowercase().as_str() {
            "swarm" => Some(Orchestrator::Swarm),
            "kubernetes" | "k8s" => Some(Orchestrator::Kubernetes),
            _ => None,
        }
    }
}

impl fmt::Display for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the deploy-related project settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppSettings {
    /// Stored orchestrator, `None` when the key was never written.
    pub orchestrator: Option<Orchestrator>,
    pub kube_config: Option<String>,
    pub namespace: Option<String>,
    pub stack_name: Option<String>,
    /// Newline-separated `key=value` overrides.
    pub override_parameters: Option<String>,
    pub application_location: Option<String>,
}

impl AppSettings {
    /// Effective orchestrator; Swarm unless Kubernetes was stored.
    pub fn orchestrator(&self) -> Orchestrator {
        self.orchestrator.unwrap_or_default()
    }

    /// Override parameter lines in order, skipping empty segments.
    pub fn parameter_lines(&self) -> Vec<&str> {
        self.override_parameters.as_deref().map(non_empty_lines).unwrap_or_default()
    }
}

/// Partial update applied on top of loaded settings (non-interactive settings edits).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub orchestrator: Option<Orchestrator>,
    pub kube_config: Option<String>,
    pub namespace: Option<String>,
    pub stack_name: Option<String>,
    pub parameters: Option<Vec<String>>,
}

impl SettingsOverrides {
    pub fn is_empty(&self) -> bool {
        self == &SettingsOverrides::default()
    }

    pub fn apply(&self, mut settings: AppSettings) -> AppSettings {
        if let Some(orchestrator) = self.orchestrator {
            settings.orchestrator = Some(orchestrator);
        }
        if let Some(value) = &self.kube_config {
            settings.kube_config = Some(value.clone());
        }
        if let Some(value) = &self.namespace {
            settings.namespace = Some(value.clone());
        }
        if let Some(value) = &self.stack_name {
            settings.stack_name = Some(value.clone());
        }
        if let Some(lines) = &self.parameters {
            settings.override_parameters = Some(lines.join("\n"));
        }
        settings
    }
}

/// Input collected by the new-application dialog. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAppSettings {
    pub name: String,
    pub description: Option<String>,
    /// Newline-separated maintainer entries.
    pub maintainers: Option<String>,
    pub single_file: bool,
}

impl NewAppSettings {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// The name passed to `init` and used for `<name>.dockerapp`: carriage returns
    /// removed, surrounding whitespace trimmed.
    pub fn app_name(&self) -> String {
        self.name.replace('\r', "").trim().to_string()
    }

    pub fn maintainer_lines(&self) -> Vec<&str> {
        self.maintainers.as_deref().map(non_empty_lines).unwrap_or_default()
    }
}

/// Split a multi-line field on `\n`, dropping a trailing `\r` and empty segments.
pub(crate) fn non_empty_lines(value: &str) -> Vec<&str> {
    value
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .collect()
}
