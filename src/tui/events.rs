use std::path::PathBuf;

use crate::core::events::SessionEvent;
use crate::core::export::ExportFormat;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs.
    Tick,
    /// Raw terminal input (keyboard/mouse/paste).
    Input(crossterm::event::Event),
    /// Result of a session timer or delayed task.
    Session(SessionEvent),
}

impl From<SessionEvent> for AppEvent {
    fn from(event: SessionEvent) -> Self {
        AppEvent::Session(event)
    }
}

/// High-level actions resolved from input by the panels and global keymap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Wizard
    NextStep,
    PrevStep,
    Generate,
    CancelGeneration,

    // Uploads
    SubmitPaths(Vec<PathBuf>),
    RemoveUpload(String),

    // Preview
    Export(ExportFormat),
    CopyText,
    TogglePane,

    // Modals
    ShowHelp,
    CloseHelp,

    Quit,
}

/// Which column has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Wizard,
    Preview,
}

impl Pane {
    pub fn toggle(self) -> Pane {
        match self {
            Pane::Wizard => Pane::Preview,
            Pane::Preview => Pane::Wizard,
        }
    }
}

/// What a panel did with an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelResult {
    /// Handled entirely inside the panel.
    Consumed,
    /// Handled, and the app should run this action.
    Action(Action),
    /// Not handled; fall through to global keys.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_event_converts() {
        let event: AppEvent = SessionEvent::UploadTick { id: "a".into() }.into();
        assert!(matches!(
            event,
            AppEvent::Session(SessionEvent::UploadTick { ref id }) if id == "a"
        ));
    }

    #[test]
    fn test_pane_toggle() {
        assert_eq!(Pane::Wizard.toggle(), Pane::Preview);
        assert_eq!(Pane::Preview.toggle().toggle(), Pane::Preview);
    }
}
