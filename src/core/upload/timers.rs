//! Registry of per-entry repeating progress timers.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::core::events::{SessionEmitter, SessionEvent};

/// Owns one tokio task per running upload entry.
///
/// Each task emits [`SessionEvent::UploadTick`] every `period` until it is
/// cancelled or the listener goes away. All tasks are aborted on drop.
#[derive(Default)]
pub struct TimerRegistry {
    timers: HashMap<String, JoinHandle<()>>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking for `id`. Replaces (and aborts) any timer already
    /// registered under the same id. Must be called within a tokio runtime.
    pub fn start(&mut self, id: &str, period: Duration, emitter: Arc<dyn SessionEmitter>) {
        let tick_id = id.to_string();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !emitter.emit(SessionEvent::UploadTick { id: tick_id.clone() }) {
                    break;
                }
            }
        });

        if let Some(previous) = self.timers.insert(id.to_string(), handle) {
            previous.abort();
        }
    }

    /// Stop the timer for `id`. Returns whether one was running.
    pub fn cancel(&mut self, id: &str) -> bool {
        match self.timers.remove(id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }

    pub fn is_running(&self, id: &str) -> bool {
        self.timers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl Drop for TimerRegistry {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
