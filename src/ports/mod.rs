mod configuration_store;
mod host_ui;
mod process_executor;

pub use configuration_store::ConfigurationStore;
pub use host_ui::{DialogHost, DialogOutcome, FilePicker, HostUi, LogSink, MessageSink};
pub use process_executor::ProcessExecutor;
