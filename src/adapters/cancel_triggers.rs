//! Background triggers that cancel a tool run: Ctrl+C and an optional timeout.

use std::future;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tokio::runtime::Builder;
use tracing::{debug, info};

use crate::domain::{AppError, CancellationToken};

/// Which events cancel the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CancelTriggers {
    pub timeout: Option<Duration>,
    pub ctrl_c: bool,
}

impl CancelTriggers {
    pub fn is_empty(&self) -> bool {
        self.timeout.is_none() && !self.ctrl_c
    }
}

/// Watch `triggers` on a background thread and cancel `token` when one fires.
///
/// The watcher exits as soon as the token is cancelled from anywhere. Returns `None`
/// when there is nothing to watch.
pub fn spawn_watcher(
    token: CancellationToken,
    triggers: CancelTriggers,
) -> Result<Option<JoinHandle<()>>, AppError> {
    if triggers.is_empty() {
        return Ok(None);
    }

    let runtime = Builder::new_current_thread().enable_all().build()?;
    let handle = thread::spawn(move || {
        runtime.block_on(async move {
            let timeout = async {
                match triggers.timeout {
                    Some(limit) => tokio::time::sleep(limit).await,
                    None => future::pending::<()>().await,
                }
            };
            let interrupt = async {
                if !triggers.ctrl_c || tokio::signal::ctrl_c().await.is_err() {
                    future::pending::<()>().await;
                }
            };

            tokio::select! {
                _ = token.cancelled() => debug!("Cancel watcher stopped"),
                _ = timeout => {
                    info!("Timed out after {:?}, cancelling", triggers.timeout.unwrap_or_default());
                    token.cancel();
                }
                _ = interrupt => {
                    info!("Interrupted, cancelling");
                    token.cancel();
                }
            }
        });
    });

    Ok(Some(handle))
}
