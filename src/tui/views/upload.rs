//! Document upload zone: path field, drop hint, and per-file progress rows.
//!
//! Each entry renders as a LineGauge whose color follows its status tone.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

use crate::core::upload::{UploadEntry, UploadSimulator};
use crate::tui::events::{Action, PanelResult};
use crate::tui::paste::split_paths;
use crate::tui::theme;
use crate::tui::widgets::InputBuffer;

/// Rows per file entry (bordered gauge).
const ENTRY_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFocus {
    PathInput,
    Files,
}

pub struct UploadZone {
    path: InputBuffer,
    /// Selected row in the file list.
    pub cursor: usize,
}

impl UploadZone {
    pub fn new() -> Self {
        Self {
            path: InputBuffer::new(),
            cursor: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, focus: UploadFocus, uploads: &UploadSimulator) -> PanelResult {
        match focus {
            UploadFocus::PathInput => {
                if key.code == KeyCode::Enter {
                    if self.path.is_empty() {
                        return PanelResult::Consumed;
                    }
                    let paths = split_paths(&self.path.take());
                    return PanelResult::Action(Action::SubmitPaths(paths));
                }
                if self.path.handle_key(key) {
                    PanelResult::Consumed
                } else {
                    PanelResult::Ignored
                }
            }
            UploadFocus::Files => {
                let count = uploads.entries().len();
                self.clamp(count);
                match key.code {
                    KeyCode::Char('j') | KeyCode::Down => {
                        self.cursor = (self.cursor + 1).min(count.saturating_sub(1));
                        PanelResult::Consumed
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        self.cursor = self.cursor.saturating_sub(1);
                        PanelResult::Consumed
                    }
                    KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                        match uploads.entries().get(self.cursor) {
                            Some(entry) => PanelResult::Action(Action::RemoveUpload(entry.id.clone())),
                            None => PanelResult::Consumed,
                        }
                    }
                    _ => PanelResult::Ignored,
                }
            }
        }
    }

    /// Keep the cursor inside a list of `count` rows.
    pub fn clamp(&mut self, count: usize) {
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    pub fn paste_into_path(&mut self, text: &str) {
        self.path.insert_str(text);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, uploads: &UploadSimulator, focus: Option<UploadFocus>) {
        let config = uploads.config();
        let chunks = Layout::vertical([
            Constraint::Length(3), // Path field
            Constraint::Length(1), // Hint
            Constraint::Min(0),    // Files
        ])
        .split(area);

        self.path.render(
            frame,
            chunks[0],
            "Upload Documents",
            "Drop files here or type a path and press Enter",
            focus == Some(UploadFocus::PathInput),
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(
                    " Supports {} (max {} each)",
                    config.extensions_hint(),
                    config.max_size_label()
                ),
                theme::dim(),
            ))),
            chunks[1],
        );

        let entries = uploads.entries();
        if entries.is_empty() {
            return;
        }

        let visible = (chunks[2].height / ENTRY_HEIGHT) as usize;
        let first = self.cursor.saturating_sub(visible.saturating_sub(1));
        let rows = Layout::vertical(
            entries
                .iter()
                .skip(first)
                .take(visible)
                .map(|_| Constraint::Length(ENTRY_HEIGHT)),
        )
        .split(chunks[2]);

        for (row, (i, entry)) in rows.iter().zip(entries.iter().enumerate().skip(first)) {
            let selected = focus == Some(UploadFocus::Files) && i == self.cursor;
            render_entry(frame, *row, entry, selected);
        }
    }
}

impl Default for UploadZone {
    fn default() -> Self {
        Self::new()
    }
}

fn render_entry(frame: &mut Frame, area: Rect, entry: &UploadEntry, selected: bool) {
    let color = theme::tone_color(entry.status.tone());
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", entry.file.name),
            if selected { theme::highlight() } else { Style::default().fg(theme::TEXT) },
        ),
        Span::styled(format!("{} ", entry.file.human_size()), theme::muted()),
    ]);
    let status = Line::from(Span::styled(
        format!(" {} ", entry.status.label()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .right_aligned();

    let gauge = LineGauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if selected { theme::border_focused() } else { theme::border_default() })
                .title(title)
                .title(status),
        )
        .ratio(f64::from(entry.progress) / 100.0)
        .label(format!("{:>3}%", entry.progress))
        .filled_style(Style::default().fg(color))
        .unfilled_style(Style::default().fg(theme::TEXT_DIM));

    frame.render_widget(gauge, area);
}
