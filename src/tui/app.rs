use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::clipboard::Clipboard;
use crate::core::session::{DiscoverySession, SessionUpdate};
use crate::core::upload::UploadStatus;
use crate::core::wizard::{WizardError, WizardStep};

use super::events::{Action, AppEvent, Notification, NotificationLevel, Pane, PanelResult};
use super::layout::AppLayout;
use super::paste::{collect_files, display_name, split_paths};
use super::theme;
use super::views::areas::AreasPanel;
use super::views::configuration::ConfigurationPanel;
use super::views::generate;
use super::views::preview::PreviewPanel;

/// Most notifications shown at once.
const MAX_NOTIFICATIONS: usize = 3;

/// Central application state (Elm architecture).
pub struct AppState {
    pub running: bool,
    /// Which column receives input.
    pub pane: Pane,
    pub session: DiscoverySession,
    clipboard: Box<dyn Clipboard>,
    pub configuration: ConfigurationPanel,
    pub areas: AreasPanel,
    pub preview: PreviewPanel,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    notification_counter: u64,
    notification_ttl: u32,
    pub show_help: bool,
    /// Receiver for session and backend events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        session: DiscoverySession,
        clipboard: Box<dyn Clipboard>,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        Self {
            running: true,
            pane: Pane::Wizard,
            session,
            clipboard,
            configuration: ConfigurationPanel::new(),
            areas: AreasPanel::new(),
            preview: PreviewPanel::new(),
            notifications: Vec::new(),
            notification_counter: 0,
            notification_ttl: config.tui.notification_ttl_ticks,
            show_help: false,
            event_rx,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        self.session.shutdown();
        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => self.handle_input(crossterm_event),
            AppEvent::Session(session_event) => {
                let update = self.session.apply(session_event);
                self.on_session_update(update);
            }
            AppEvent::Tick => self.on_tick(),
        }
    }

    fn handle_input(&mut self, event: Event) {
        // Priority 1: keys that work everywhere
        if let Event::Key(KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            match c {
                'c' => return self.handle_action(Action::Quit),
                'p' => return self.handle_action(Action::TogglePane),
                _ => {}
            }
        }

        // Priority 2: help modal
        if self.show_help {
            if let Event::Key(KeyEvent {
                code: KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q'),
                kind: KeyEventKind::Press,
                ..
            }) = event
            {
                self.handle_action(Action::CloseHelp);
            }
            return;
        }

        match event {
            Event::Paste(text) => return self.handle_paste(&text),
            Event::Mouse(mouse) => {
                match mouse.kind {
                    MouseEventKind::ScrollDown => {
                        self.preview.scroll = self.preview.scroll.saturating_add(1)
                    }
                    MouseEventKind::ScrollUp => {
                        self.preview.scroll = self.preview.scroll.saturating_sub(1)
                    }
                    _ => {}
                }
                return;
            }
            _ => {}
        }

        // Priority 3: focused panel
        match self.dispatch_panel_input(&event) {
            PanelResult::Consumed => return,
            PanelResult::Action(action) => return self.handle_action(action),
            PanelResult::Ignored => {}
        }

        // Priority 4: global keybindings
        if let Some(action) = self.map_input_to_action(&event) {
            self.handle_action(action);
        }
    }

    fn dispatch_panel_input(&mut self, event: &Event) -> PanelResult {
        if self.pane == Pane::Preview {
            let has_questionnaire = self.session.wizard().questionnaire().is_some();
            return self.preview.handle_input(event, has_questionnaire);
        }

        match self.session.wizard().step() {
            WizardStep::Configuration => {
                let project = self.session.wizard_mut().project_mut();
                self.configuration.handle_input(event, project)
            }
            WizardStep::AreasAndUpload => {
                // The panel needs the project mutably and the uploads for reading.
                let mut project = self.session.wizard().project().clone();
                let result = self
                    .areas
                    .handle_input(event, &mut project, self.session.uploads());
                *self.session.wizard_mut().project_mut() = project;
                result
            }
            WizardStep::ReadyToGenerate => {
                generate::handle_input(event, self.session.wizard().is_generating())
            }
        }
    }

    /// Whether a text field currently swallows printable keys.
    fn is_editing_text(&self) -> bool {
        self.pane == Pane::Wizard
            && match self.session.wizard().step() {
                WizardStep::Configuration => self.configuration.is_editing_text(),
                WizardStep::AreasAndUpload => self.areas.is_editing_text(),
                WizardStep::ReadyToGenerate => false,
            }
    }

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        if self.is_editing_text() {
            return None;
        }

        match (*modifiers, *code) {
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('q')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => Some(Action::ShowHelp),
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::TogglePane => self.pane = self.pane.toggle(),
            Action::NextStep => match self.session.wizard_mut().advance() {
                Ok(step) => log::info!("Wizard step: {step}"),
                Err(e) => self.push_notification(e.to_string(), NotificationLevel::Warning),
            },
            Action::PrevStep => match self.session.wizard_mut().back() {
                Ok(step) => log::info!("Wizard step: {step}"),
                Err(WizardError::FirstStep(_)) => {}
                Err(e) => self.push_notification(e.to_string(), NotificationLevel::Warning),
            },
            Action::Generate => match self.session.start_generation() {
                Ok(ticket) => log::debug!("Generation ticket {ticket} scheduled"),
                Err(e) => self.push_notification(e.to_string(), NotificationLevel::Warning),
            },
            Action::CancelGeneration => {
                if self.session.cancel_generation() {
                    self.push_notification("Generation cancelled".into(), NotificationLevel::Info);
                }
            }
            Action::SubmitPaths(paths) => self.submit_paths(&paths),
            Action::RemoveUpload(id) => {
                self.session.remove_upload(&id);
                let count = self.session.uploads().entries().len();
                self.areas.upload.clamp(count);
            }
            Action::Export(format) => match self.session.export(format) {
                Ok(_) => self.push_notification(
                    format!("Export Started: Generating {format} document..."),
                    NotificationLevel::Info,
                ),
                Err(e) => self.push_notification(e.to_string(), NotificationLevel::Warning),
            },
            Action::CopyText => match self.session.copy_to_clipboard(self.clipboard.as_ref()) {
                Ok(()) => self.push_notification(
                    "Copied to Clipboard: Questionnaire content has been copied.".into(),
                    NotificationLevel::Success,
                ),
                Err(e) => self.push_notification(e.to_string(), NotificationLevel::Error),
            },
        }
    }

    // ── Uploads ─────────────────────────────────────────────────────────

    fn uploads_open(&self) -> bool {
        let wizard = self.session.wizard();
        wizard.step() == WizardStep::AreasAndUpload && wizard.project().ai_enabled
    }

    /// A paste goes to the focused text field on step 1; anywhere else it is
    /// treated as a file drop.
    fn handle_paste(&mut self, text: &str) {
        if self.pane == Pane::Wizard && self.session.wizard().step() == WizardStep::Configuration {
            let project = self.session.wizard_mut().project_mut();
            if self.configuration.paste(text, project) {
                return;
            }
        }
        if !self.uploads_open() {
            self.push_notification(
                "Enable AI-Enhanced Analysis and open Subject Areas to upload documents".into(),
                NotificationLevel::Info,
            );
            return;
        }
        if self.pane == Pane::Wizard && self.areas.is_editing_text() {
            self.areas.upload.paste_into_path(text);
            return;
        }
        self.submit_paths(&split_paths(text));
    }

    fn submit_paths(&mut self, paths: &[PathBuf]) {
        if !self.uploads_open() {
            return;
        }
        let (files, failures) = collect_files(paths);
        for (path, reason) in failures {
            self.push_notification(
                format!("Cannot read {}: {reason}", display_name(&path)),
                NotificationLevel::Error,
            );
        }
        let report = self.session.submit_files(files);
        for err in report.rejected {
            self.push_notification(
                format!("{}: {err}", err.title()),
                NotificationLevel::Warning,
            );
        }
        if !report.accepted.is_empty() {
            log::info!("Uploading {} file(s)", report.accepted.len());
        }
    }

    fn on_session_update(&mut self, update: SessionUpdate) {
        match update {
            SessionUpdate::UploadProgress { id, status } => {
                if status == UploadStatus::Complete {
                    log::debug!("Upload {id} finished");
                }
            }
            SessionUpdate::QuestionnaireReady { title, total_questions } => {
                self.preview.reset_scroll();
                self.push_notification(
                    format!("{title} ready ({total_questions} questions)"),
                    NotificationLevel::Success,
                );
            }
            SessionUpdate::GenerationFailed(e) => {
                self.push_notification(e.to_string(), NotificationLevel::Error);
            }
            SessionUpdate::ExportCompleted { format, .. } => self.push_notification(
                format!("Export Complete: Your questionnaire has been exported as {format}."),
                NotificationLevel::Success,
            ),
            SessionUpdate::ExportFailed { format, error } => self.push_notification(
                format!("Export Failed: {format} - {error}"),
                NotificationLevel::Error,
            ),
            SessionUpdate::Ignored => {}
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks: self.notification_ttl,
        });

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area);
        let wizard = self.session.wizard();
        let project = wizard.project();
        let wizard_focused = self.pane == Pane::Wizard;

        self.render_steps(frame, layout.steps);

        match wizard.step() {
            WizardStep::Configuration => {
                self.configuration.render(frame, layout.panel, project, wizard_focused)
            }
            WizardStep::AreasAndUpload => self.areas.render(
                frame,
                layout.panel,
                project,
                self.session.uploads(),
                wizard_focused,
            ),
            WizardStep::ReadyToGenerate => generate::render(
                frame,
                layout.panel,
                project,
                self.session.uploads().accepted_files().len(),
                wizard.is_generating(),
                wizard_focused,
            ),
        }

        self.preview.render(
            frame,
            layout.preview,
            wizard.questionnaire(),
            project,
            self.session.pending_exports(),
            !wizard_focused,
        );

        self.render_status_bar(frame, layout.status);
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_steps(&self, frame: &mut Frame, area: Rect) {
        let current = self.session.wizard().step();
        let mut spans = Vec::new();
        for (i, step) in WizardStep::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ── ", theme::dim()));
            }
            let (marker, style) = if step < current {
                ("✓".to_string(), Style::default().fg(theme::SUCCESS).add_modifier(Modifier::BOLD))
            } else if step == current {
                (step.number().to_string(), theme::highlight())
            } else {
                (step.number().to_string(), theme::muted())
            };
            spans.push(Span::styled(format!("({marker}) "), style));
            spans.push(Span::styled(step.title(), style));
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border_default());
        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let wizard = self.session.wizard();
        let uploading = self
            .session
            .uploads()
            .entries()
            .iter()
            .filter(|e| e.status.is_active())
            .count();
        let activity = if wizard.is_generating() {
            Span::styled("generating", Style::default().fg(theme::WARNING))
        } else if self.session.pending_exports() > 0 {
            Span::styled("exporting", Style::default().fg(theme::INFO))
        } else if uploading > 0 {
            Span::styled(format!("uploading ({uploading})"), Style::default().fg(theme::PRIMARY_LIGHT))
        } else {
            Span::styled("ready", theme::muted())
        };
        let continue_style = if wizard.can_advance() {
            theme::key_hint()
        } else {
            theme::dim()
        };

        let status = Line::from(vec![
            Span::styled(" DISCOVERY ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(
                format!("Step {}/3", wizard.step().number()),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            activity,
            Span::raw(" │ "),
            Span::styled("Ctrl+N", continue_style),
            Span::raw(":continue "),
            Span::styled("Ctrl+P", theme::key_hint()),
            Span::raw(match self.pane {
                Pane::Wizard => ":preview ",
                Pane::Preview => ":wizard ",
            }),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 60.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height);
        let x = area.width.saturating_sub(max_width + 1);
        let notification_area = Rect::new(x, 1.min(area.height.saturating_sub(height)), max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = [
            ("Global:", ""),
            ("q", "Quit (outside text fields)"),
            ("Ctrl+C", "Quit"),
            ("?", "Toggle this help"),
            ("Ctrl+P", "Switch between wizard and preview"),
            ("", ""),
            ("Project Configuration:", ""),
            ("Tab / Shift+Tab", "Next / previous field"),
            ("←/→", "Change project type or timeline"),
            ("Space", "Toggle AI-Enhanced Analysis"),
            ("Ctrl+N", "Continue to Subject Areas"),
            ("", ""),
            ("Subject Areas:", ""),
            ("j/k", "Move"),
            ("Space / Enter", "Toggle area"),
            ("Tab", "Upload path / file list (AI only)"),
            ("d", "Remove selected upload"),
            ("paste / drop", "Upload the dropped files"),
            ("Ctrl+B / Ctrl+N", "Back / continue"),
            ("", ""),
            ("Ready to Generate:", ""),
            ("Enter", "Generate questionnaire"),
            ("Esc", "Cancel generation / back"),
            ("", ""),
            ("Preview:", ""),
            ("1 / 2 / 3", "Export Word / PDF / JSON"),
            ("c", "Copy as text"),
            ("j/k PgUp/PgDn", "Scroll"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::title())),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), theme::title())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<22}", key),
                        Style::default().fg(theme::PRIMARY_LIGHT).bold(),
                    ),
                    Span::raw(desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", Style::default().fg(theme::PRIMARY_LIGHT).bold()),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(theme::PRIMARY_LIGHT).bold()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
