//! Cancellable delayed task with a single in-flight guard

use crate::error::AssistantError;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Runs one delayed computation at a time on the tokio runtime.
///
/// Scheduling while a task is still pending is rejected rather than stacked.
#[derive(Debug)]
pub struct DeferredTask<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> DeferredTask<T> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Run `f` after `delay`. Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, f: F) -> Result<(), AssistantError>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        if self.is_pending() {
            log::warn!("deferred task rejected: one already in flight");
            return Err(AssistantError::Busy);
        }
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f()
        }));
        Ok(())
    }

    /// Scheduled and not yet collected
    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    /// Abort the pending task, if any. Returns whether one was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Wait for the pending task and take its output. `Ok(None)` when nothing
    /// was scheduled.
    pub async fn wait(&mut self) -> Result<Option<T>, AssistantError> {
        let Some(handle) = self.handle.take() else {
            return Ok(None);
        };
        match handle.await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_cancelled() => Err(AssistantError::Cancelled),
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}

impl<T: Send + 'static> Default for DeferredTask<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DeferredTask<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_runs_after_delay() {
        let mut task = DeferredTask::new();
        task.schedule(Duration::from_millis(1000), || 42).unwrap();
        assert!(task.is_pending());

        let start = tokio::time::Instant::now();
        assert_eq!(task.wait().await, Ok(Some(42)));
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert!(!task.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_schedule_is_rejected_while_pending() {
        let mut task = DeferredTask::new();
        task.schedule(Duration::from_millis(500), || "first").unwrap();
        assert_eq!(
            task.schedule(Duration::from_millis(500), || "second"),
            Err(AssistantError::Busy)
        );
        assert_eq!(task.wait().await, Ok(Some("first")));

        // Free again once collected
        task.schedule(Duration::from_millis(10), || "third").unwrap();
        assert_eq!(task.wait().await, Ok(Some("third")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_frees_the_slot() {
        let mut task = DeferredTask::new();
        task.schedule(Duration::from_secs(5), || 1).unwrap();
        assert!(task.cancel());
        assert!(!task.is_pending());
        assert!(!task.cancel());
        assert_eq!(task.wait().await, Ok(None));
    }
}
