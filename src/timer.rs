//! Cancellable one-shot timers
//!
//! A `DelayedTask` runs a callback once after a delay. The handle owns the
//! timer: cancelling it, or dropping it, aborts the callback if it has not
//! fired yet.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{NexusError, Result};

#[derive(Debug)]
pub struct DelayedTask {
    handle: Option<JoinHandle<()>>,
}

impl DelayedTask {
    /// Schedule `callback` to run after `delay` on the current tokio runtime
    pub fn schedule<F>(label: &'static str, delay: Duration, callback: F) -> Result<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| NexusError::NoRuntime(label))?;

        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::trace!(task = label, "Delayed task fired");
            callback();
        });

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Abort the callback if it is still pending
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether the callback has run, or can no longer run
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
