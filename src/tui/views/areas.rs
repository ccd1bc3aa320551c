//! Step 2: subject-area selection, plus document upload when AI analysis
//! is enabled.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::project::ProjectConfiguration;
use crate::core::topics::{find_topic_area, TOPIC_AREAS};
use crate::core::upload::UploadSimulator;
use crate::tui::events::{Action, PanelResult};
use crate::tui::theme;

use super::upload::{UploadFocus, UploadZone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreasFocus {
    Catalog,
    Upload(UploadFocus),
}

pub struct AreasPanel {
    pub focus: AreasFocus,
    /// Highlighted catalog row.
    pub cursor: usize,
    pub upload: UploadZone,
}

impl AreasPanel {
    pub fn new() -> Self {
        Self {
            focus: AreasFocus::Catalog,
            cursor: 0,
            upload: UploadZone::new(),
        }
    }

    pub fn is_editing_text(&self) -> bool {
        self.focus == AreasFocus::Upload(UploadFocus::PathInput)
    }

    fn cycle_focus(&mut self, ai_enabled: bool, forward: bool) {
        if !ai_enabled {
            self.focus = AreasFocus::Catalog;
            return;
        }
        let order = [
            AreasFocus::Catalog,
            AreasFocus::Upload(UploadFocus::PathInput),
            AreasFocus::Upload(UploadFocus::Files),
        ];
        let idx = order.iter().position(|&f| f == self.focus).unwrap_or(0);
        let step = if forward { 1 } else { order.len() - 1 };
        self.focus = order[(idx + step) % order.len()];
    }

    pub fn handle_input(
        &mut self,
        event: &Event,
        project: &mut ProjectConfiguration,
        uploads: &UploadSimulator,
    ) -> PanelResult {
        let key = match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => *k,
            _ => return PanelResult::Ignored,
        };

        if !project.ai_enabled {
            self.focus = AreasFocus::Catalog;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('n')) => return PanelResult::Action(Action::NextStep),
            (KeyModifiers::CONTROL, KeyCode::Char('b')) => return PanelResult::Action(Action::PrevStep),
            (_, KeyCode::Tab) => {
                self.cycle_focus(project.ai_enabled, true);
                return PanelResult::Consumed;
            }
            (_, KeyCode::BackTab) => {
                self.cycle_focus(project.ai_enabled, false);
                return PanelResult::Consumed;
            }
            _ => {}
        }

        match self.focus {
            AreasFocus::Catalog => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.cursor = (self.cursor + 1).min(TOPIC_AREAS.len() - 1);
                    PanelResult::Consumed
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.cursor = self.cursor.saturating_sub(1);
                    PanelResult::Consumed
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    let area = &TOPIC_AREAS[self.cursor];
                    let selected = project.toggle_area(area.id);
                    log::debug!("Area {} selected={selected}", area.id);
                    PanelResult::Consumed
                }
                KeyCode::Esc => PanelResult::Action(Action::PrevStep),
                _ => PanelResult::Ignored,
            },
            AreasFocus::Upload(focus) => {
                if key.code == KeyCode::Esc {
                    self.focus = AreasFocus::Catalog;
                    return PanelResult::Consumed;
                }
                self.upload.handle_key(key, focus, uploads)
            }
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        project: &ProjectConfiguration,
        uploads: &UploadSimulator,
        focused: bool,
    ) {
        let block = theme::block("Subject Areas", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let catalog_height = TOPIC_AREAS.len() as u16 + 1;
        let upload_height = if project.ai_enabled { Constraint::Min(5) } else { Constraint::Length(0) };
        let chunks = Layout::vertical([
            Constraint::Length(catalog_height),
            Constraint::Length(2), // Selected summary
            upload_height,
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Help
        ])
        .split(inner);

        self.render_catalog(frame, chunks[0], project, focused);
        self.render_selected(frame, chunks[1], project);

        if project.ai_enabled {
            let upload_focus = match self.focus {
                AreasFocus::Upload(f) if focused => Some(f),
                _ => None,
            };
            self.upload.render(frame, chunks[2], uploads, upload_focus);
        }

        let continue_style = if project.has_areas() { theme::button() } else { theme::button_disabled() };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" ← Back ", theme::muted()),
                Span::raw("  "),
                Span::styled(" Continue → ", continue_style),
            ])),
            chunks[3],
        );

        let mut hints = vec![
            Span::styled(" j/k", theme::key_hint()),
            Span::raw(":move  "),
            Span::styled("Space", theme::key_hint()),
            Span::raw(":toggle  "),
        ];
        if project.ai_enabled {
            hints.push(Span::styled("Tab", theme::key_hint()));
            hints.push(Span::raw(":upload  "));
            hints.push(Span::styled("d", theme::key_hint()));
            hints.push(Span::raw(":remove  "));
        }
        hints.extend([
            Span::styled("Ctrl+B", theme::key_hint()),
            Span::raw(":back  "),
            Span::styled("Ctrl+N", theme::key_hint()),
            Span::raw(":continue"),
        ]);
        frame.render_widget(Paragraph::new(Line::from(hints)), chunks[4]);
    }

    fn render_catalog(&self, frame: &mut Frame, area: Rect, project: &ProjectConfiguration, focused: bool) {
        let items: Vec<ListItem> = TOPIC_AREAS
            .iter()
            .map(|topic| {
                let selected = project.is_area_selected(topic.id);
                let (mark, mark_style) = if selected {
                    ("✓", Style::default().fg(theme::SUCCESS).add_modifier(Modifier::BOLD))
                } else {
                    (" ", Style::default())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("[{mark}] "), mark_style),
                    Span::raw(format!("{} ", topic.icon)),
                    Span::styled(
                        topic.name,
                        Style::default()
                            .fg(theme::gradient_color(topic.color))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}", topic.description), theme::muted()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(if focused && self.focus == AreasFocus::Catalog {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            })
            .highlight_symbol("▸ ");

        let mut state = ListState::default();
        state.select(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_selected(&self, frame: &mut Frame, area: Rect, project: &ProjectConfiguration) {
        let mut spans = vec![Span::styled(
            format!(" Selected Areas ({}): ", project.selected_areas.len()),
            theme::heading(),
        )];
        let names: Vec<&str> = project
            .selected_areas
            .iter()
            .filter_map(|id| find_topic_area(id))
            .map(|topic| topic.name)
            .collect();
        if names.is_empty() {
            spans.push(Span::styled("none yet", theme::dim()));
        } else {
            spans.push(Span::raw(names.join(", ")));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).wrap(ratatui::widgets::Wrap { trim: true }),
            area,
        );
    }
}

impl Default for AreasPanel {
    fn default() -> Self {
        Self::new()
    }
}
