pub mod cancel_triggers;
pub mod memory_configuration_store;
pub mod process_executor;
pub mod terminal_host;
pub mod toml_configuration_store;

pub use cancel_triggers::{CancelTriggers, spawn_watcher};
pub use memory_configuration_store::MemoryConfigurationStore;
pub use process_executor::StdProcessExecutor;
pub use terminal_host::TerminalHost;
pub use toml_configuration_store::TomlConfigurationStore;
