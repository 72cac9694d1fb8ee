use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;

use crate::model_runtime::ModelRuntime;

/// Default interval between readiness checks.
pub const DEFAULT_READINESS_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Returned by [`ReadinessWaiter::wait_with_cancel`] when the token fires
/// before the runtime reports ready.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("readiness wait cancelled before the runtime reported ready")]
pub struct WaitCancelled;

/// Cooperative poll against [`ModelRuntime::is_ready`].
///
/// The wait is unbounded by contract: the startup path has nowhere useful to
/// go on timeout, so callers needing a deadline must layer their own. Each
/// miss sleeps for the poll interval rather than spinning, keeping the
/// executor responsive for other tasks.
#[derive(Debug, Clone, Copy)]
pub struct ReadinessWaiter {
    poll_interval: Duration,
}

impl Default for ReadinessWaiter {
    fn default() -> Self {
        Self::new(DEFAULT_READINESS_POLL_INTERVAL)
    }
}

impl ReadinessWaiter {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Blocks the calling task until the runtime reports ready.
    pub async fn wait(&self, runtime: &dyn ModelRuntime) {
        let mut polls: u64 = 0;
        while !runtime.is_ready().await {
            polls += 1;
            tokio::time::sleep(self.poll_interval).await;
        }
        debug!(polls, "runtime reported ready");
    }

    /// Like [`ReadinessWaiter::wait`], but aborts when `cancel` observes
    /// `true` or its sender is dropped.
    pub async fn wait_with_cancel(
        &self,
        runtime: &dyn ModelRuntime,
        cancel: &mut watch::Receiver<bool>,
    ) -> Result<(), WaitCancelled> {
        loop {
            if *cancel.borrow_and_update() {
                return Err(WaitCancelled);
            }
            if runtime.is_ready().await {
                return Ok(());
            }
            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        return Err(WaitCancelled);
                    }
                }
            }
        }
    }
}
