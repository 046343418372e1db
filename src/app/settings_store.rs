//! Mapping between `AppSettings` and the host configuration store.

use crate::domain::settings::{
    KEY_APP_LOCATION, KEY_KUBECONFIG, KEY_NAMESPACE, KEY_ORCHESTRATOR, KEY_PARAMETERS,
    KEY_STACK_NAME,
};
use crate::domain::{AppError, AppSettings, Orchestrator};
use crate::ports::ConfigurationStore;

/// Read the current settings snapshot.
pub fn load(store: &impl ConfigurationStore) -> AppSettings {
    AppSettings {
        orchestrator: non_empty(store, KEY_ORCHESTRATOR).map(|v| Orchestrator::from_stored(&v)),
        kube_config: non_empty(store, KEY_KUBECONFIG),
        namespace: non_empty(store, KEY_NAMESPACE),
        stack_name: non_empty(store, KEY_STACK_NAME),
        override_parameters: non_empty(store, KEY_PARAMETERS),
        application_location: non_empty(store, KEY_APP_LOCATION),
    }
}

/// Write the settings-dialog keys, each flagged persistent.
///
/// The application location is owned by the select-application command and is left untouched.
pub fn save(store: &impl ConfigurationStore, settings: &AppSettings) -> Result<(), AppError> {
    let entries = [
        (KEY_ORCHESTRATOR, settings.orchestrator().as_str()),
        (KEY_KUBECONFIG, settings.kube_config.as_deref().unwrap_or("")),
        (KEY_NAMESPACE, settings.namespace.as_deref().unwrap_or("")),
        (KEY_STACK_NAME, settings.stack_name.as_deref().unwrap_or("")),
        (KEY_PARAMETERS, settings.override_parameters.as_deref().unwrap_or("")),
    ];
    for (key, value) in entries {
        write_persistent(store, key, value)?;
    }
    Ok(())
}

/// Store the application location (empty string unsets it), flagged persistent.
pub fn save_app_location(store: &impl ConfigurationStore, location: &str) -> Result<(), AppError> {
    write_persistent(store, KEY_APP_LOCATION, location)
}

fn write_persistent(
    store: &impl ConfigurationStore,
    key: &str,
    value: &str,
) -> Result<(), AppError> {
    store.set(key, value)?;
    store.set_persist(key, true)
}

fn non_empty(store: &impl ConfigurationStore, key: &str) -> Option<String> {
    store.get(key).filter(|value| !value.is_empty())
}
