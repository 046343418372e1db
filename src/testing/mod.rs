mod recording_host;
mod scripted_executor;

pub use recording_host::RecordingHost;
pub use scripted_executor::ScriptedExecutor;

use crate::adapters::MemoryConfigurationStore;
use crate::app::AppContext;
use crate::app::config::ToolConfig;

pub const TEST_PROJECT_DIR: &str = "/work/project";

pub type TestContext = AppContext<MemoryConfigurationStore, ScriptedExecutor, RecordingHost>;

/// Context wired with test doubles and a fixed project directory.
pub fn test_context(
    store: MemoryConfigurationStore,
    executor: ScriptedExecutor,
    host: RecordingHost,
) -> TestContext {
    AppContext::new(store, executor, host, ToolConfig::default()).with_project_dir(TEST_PROJECT_DIR)
}
