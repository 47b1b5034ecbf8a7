use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A delayed task that can be called off.
///
/// Dropping the handle cancels the task as well, so whoever owns the handle
/// owns the pending transition.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Run `work` once `delay` has elapsed.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn schedule<F>(delay: Duration, work: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work.await;
        });
        Self { task }
    }

    /// Stop the timer. A no-op once it has fired.
    pub fn cancel(&self) {
        self.task.abort();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
