//! Events produced by background timers and handed back to the session owner.
//!
//! Timers never touch session state themselves. They emit a [`SessionEvent`]
//! through a [`SessionEmitter`], and the owner applies it on its own turn of
//! the event loop.

use tokio::sync::mpsc;

use super::export::{ExportError, ExportFormat};
use super::questionnaire::{GenerationError, Questionnaire};

#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// One periodic progress tick for an upload entry.
    UploadTick { id: String },
    /// The generation delay elapsed and the generator ran.
    GenerationFinished {
        ticket: u64,
        result: Result<Questionnaire, GenerationError>,
    },
    /// The export delay elapsed and the exporter ran. `Ok` carries the
    /// rendered document size in bytes.
    ExportFinished {
        ticket: u64,
        format: ExportFormat,
        result: Result<usize, ExportError>,
    },
}

/// Sink for events raised by background tasks.
pub trait SessionEmitter: Send + Sync {
    /// Deliver an event. Returns `false` once nobody is listening anymore,
    /// which tells repeating timers to stop.
    fn emit(&self, event: SessionEvent) -> bool;
}

impl<T> SessionEmitter for mpsc::UnboundedSender<T>
where
    T: From<SessionEvent> + Send,
{
    fn emit(&self, event: SessionEvent) -> bool {
        match self.send(T::from(event)) {
            Ok(()) => true,
            Err(_) => {
                log::debug!("Session event dropped: receiver closed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_emitter_delivers() {
        let (tx, mut rx) = mpsc::unbounded_channel::<SessionEvent>();
        assert!(tx.emit(SessionEvent::UploadTick { id: "a".into() }));
        match rx.try_recv() {
            Ok(SessionEvent::UploadTick { id }) => assert_eq!(id, "a"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_channel_emitter_reports_closed_receiver() {
        let (tx, rx) = mpsc::unbounded_channel::<SessionEvent>();
        drop(rx);
        assert!(!tx.emit(SessionEvent::UploadTick { id: "a".into() }));
    }
}
