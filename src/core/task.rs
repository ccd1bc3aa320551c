//! One-shot delayed background work with cancellation.
//!
//! Generation and export both "take a while" before producing a result.
//! A [`DelayedTask`] sleeps on the tokio clock, runs its job, and emits the
//! job's event. Each task carries a ticket so the owner can tell a current
//! completion from a stale one, and dropping the task aborts it.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::events::{SessionEmitter, SessionEvent};

pub struct DelayedTask {
    ticket: u64,
    handle: JoinHandle<()>,
}

impl DelayedTask {
    /// Spawn `job` to run after `delay`. Must be called from within a tokio
    /// runtime.
    pub fn spawn<F>(
        ticket: u64,
        delay: Duration,
        emitter: Arc<dyn SessionEmitter>,
        job: F,
    ) -> Self
    where
        F: FnOnce() -> SessionEvent + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let event = job();
            if !emitter.emit(event) {
                log::debug!("Delayed task {ticket} finished with no listener");
            }
        });
        Self { ticket, handle }
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Abort the task. Harmless if it already ran.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn tick(id: &str) -> SessionEvent {
        SessionEvent::UploadTick { id: id.to_string() }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel::<SessionEvent>();
        let task = DelayedTask::spawn(7, Duration::from_millis(3000), Arc::new(tx), || tick("x"));
        assert_eq!(task.ticket(), 7);

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(matches!(rx.recv().await, Some(SessionEvent::UploadTick { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_completion() {
        let (tx, mut rx) = mpsc::unbounded_channel::<SessionEvent>();
        let task = DelayedTask::spawn(1, Duration::from_millis(100), Arc::new(tx), || tick("x"));
        task.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts() {
        let (tx, mut rx) = mpsc::unbounded_channel::<SessionEvent>();
        let task = DelayedTask::spawn(1, Duration::from_millis(100), Arc::new(tx), || tick("x"));
        drop(task);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }
}
