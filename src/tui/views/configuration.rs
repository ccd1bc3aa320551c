//! Step 1: project configuration form.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use ratatui_textarea::TextArea;

use crate::core::project::{ProjectConfiguration, ProjectType, Timeline};
use crate::tui::events::{Action, PanelResult};
use crate::tui::theme;
use crate::tui::widgets::InputBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Name,
    Client,
    ProjectType,
    Timeline,
    Context,
    AiEnabled,
    Continue,
}

impl ConfigField {
    pub const ALL: [ConfigField; 7] = [
        ConfigField::Name,
        ConfigField::Client,
        ConfigField::ProjectType,
        ConfigField::Timeline,
        ConfigField::Context,
        ConfigField::AiEnabled,
        ConfigField::Continue,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> ConfigField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> ConfigField {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Free-text fields swallow printable keys.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            ConfigField::Name | ConfigField::Client | ConfigField::Context
        )
    }
}

fn cycle<T: Copy>(current: Option<T>, all: &[T], forward: bool, step: impl Fn(T) -> T) -> Option<T> {
    match current {
        Some(value) => Some(step(value)),
        None if forward => all.first().copied(),
        None => all.last().copied(),
    }
}

pub struct ConfigurationPanel {
    pub focus: ConfigField,
    name: InputBuffer,
    client: InputBuffer,
    context: TextArea<'static>,
}

impl ConfigurationPanel {
    pub fn new() -> Self {
        let mut context = TextArea::default();
        context.set_placeholder_text("Project background, goals, constraints...");
        context.set_cursor_line_style(Style::default());

        let mut panel = Self {
            focus: ConfigField::Name,
            name: InputBuffer::new(),
            client: InputBuffer::new(),
            context,
        };
        panel.update_focus_styles();
        panel
    }

    pub fn is_editing_text(&self) -> bool {
        self.focus.is_text()
    }

    fn set_focus(&mut self, field: ConfigField) {
        self.focus = field;
        self.update_focus_styles();
    }

    fn update_focus_styles(&mut self) {
        let focused = self.focus == ConfigField::Context;
        self.context
            .set_block(theme::block("Additional Context", focused));
        self.context.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
    }

    pub fn handle_input(&mut self, event: &Event, project: &mut ProjectConfiguration) -> PanelResult {
        let key = match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => *k,
            _ => return PanelResult::Ignored,
        };

        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('n') {
            return PanelResult::Action(Action::NextStep);
        }
        match key.code {
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return PanelResult::Consumed;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.prev());
                return PanelResult::Consumed;
            }
            KeyCode::Down if self.focus != ConfigField::Context => {
                self.set_focus(self.focus.next());
                return PanelResult::Consumed;
            }
            KeyCode::Up if self.focus != ConfigField::Context => {
                self.set_focus(self.focus.prev());
                return PanelResult::Consumed;
            }
            _ => {}
        }

        match self.focus {
            ConfigField::Name | ConfigField::Client => self.handle_line_input(key, project),
            ConfigField::ProjectType => {
                let forward = match key.code {
                    KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => true,
                    KeyCode::Left | KeyCode::Char('h') => false,
                    KeyCode::Enter => {
                        self.set_focus(self.focus.next());
                        return PanelResult::Consumed;
                    }
                    _ => return PanelResult::Ignored,
                };
                let step = if forward { ProjectType::next } else { ProjectType::prev };
                project.project_type = cycle(project.project_type, &ProjectType::ALL, forward, step);
                PanelResult::Consumed
            }
            ConfigField::Timeline => {
                let forward = match key.code {
                    KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => true,
                    KeyCode::Left | KeyCode::Char('h') => false,
                    KeyCode::Enter => {
                        self.set_focus(self.focus.next());
                        return PanelResult::Consumed;
                    }
                    _ => return PanelResult::Ignored,
                };
                let step = if forward { Timeline::next } else { Timeline::prev };
                project.timeline = cycle(project.timeline, &Timeline::ALL, forward, step);
                PanelResult::Consumed
            }
            ConfigField::Context => {
                if key.code == KeyCode::Esc {
                    self.set_focus(ConfigField::AiEnabled);
                    return PanelResult::Consumed;
                }
                self.context.input(event.clone());
                project.context = self.context.lines().join("\n");
                PanelResult::Consumed
            }
            ConfigField::AiEnabled => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    project.ai_enabled = !project.ai_enabled;
                    log::debug!("AI-enhanced analysis: {}", project.ai_enabled);
                    PanelResult::Consumed
                }
                _ => PanelResult::Ignored,
            },
            ConfigField::Continue => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => PanelResult::Action(Action::NextStep),
                _ => PanelResult::Ignored,
            },
        }
    }

    fn handle_line_input(&mut self, key: KeyEvent, project: &mut ProjectConfiguration) -> PanelResult {
        if key.code == KeyCode::Enter {
            self.set_focus(self.focus.next());
            return PanelResult::Consumed;
        }
        let (buffer, target) = match self.focus {
            ConfigField::Name => (&mut self.name, &mut project.name),
            _ => (&mut self.client, &mut project.client),
        };
        if buffer.handle_key(key) {
            *target = buffer.text().to_string();
            PanelResult::Consumed
        } else {
            PanelResult::Ignored
        }
    }

    /// Insert pasted text into the focused text field. Returns `false` when
    /// no text field has focus.
    pub fn paste(&mut self, text: &str, project: &mut ProjectConfiguration) -> bool {
        match self.focus {
            ConfigField::Name => {
                self.name.insert_str(text);
                project.name = self.name.text().to_string();
            }
            ConfigField::Client => {
                self.client.insert_str(text);
                project.client = self.client.text().to_string();
            }
            ConfigField::Context => {
                self.context.insert_str(text);
                project.context = self.context.lines().join("\n");
            }
            _ => return false,
        }
        true
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, project: &ProjectConfiguration, focused: bool) {
        let block = theme::block("Project Configuration", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Client
            Constraint::Length(3), // Type
            Constraint::Length(3), // Timeline
            Constraint::Min(4),    // Context
            Constraint::Length(1), // AI toggle
            Constraint::Length(1), // Continue
            Constraint::Length(1), // Help
        ])
        .split(inner);

        let active = |field| focused && self.focus == field;

        self.name.render(frame, chunks[0], "Project Name *", "e.g., ERP System Implementation", active(ConfigField::Name));
        self.client.render(frame, chunks[1], "Client/Organization *", "e.g., Acme Corporation", active(ConfigField::Client));

        render_selector(
            frame,
            chunks[2],
            "Project Type",
            project.project_type.map(ProjectType::label),
            "Select project type",
            active(ConfigField::ProjectType),
        );
        render_selector(
            frame,
            chunks[3],
            "Expected Timeline",
            project.timeline.map(Timeline::label),
            "Select timeline",
            active(ConfigField::Timeline),
        );

        frame.render_widget(&self.context, chunks[4]);

        let (mark, mark_style) = if project.ai_enabled {
            ("[x]", Style::default().fg(theme::SUCCESS))
        } else {
            ("[ ]", theme::muted())
        };
        let toggle_style = if active(ConfigField::AiEnabled) { theme::highlight() } else { Style::default() };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {mark} "), mark_style),
                Span::styled("AI-Enhanced Analysis", toggle_style),
                Span::styled("  analyze uploaded documents for tailored questions", theme::dim()),
            ])),
            chunks[5],
        );

        let enabled = project.has_basics();
        let mut button = if enabled { theme::button() } else { theme::button_disabled() };
        if active(ConfigField::Continue) {
            button = button.add_modifier(Modifier::UNDERLINED);
        }
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(" Continue to Subject Areas → ", button),
            ])),
            chunks[6],
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Tab", theme::key_hint()),
                Span::raw(":next field  "),
                Span::styled("←/→", theme::key_hint()),
                Span::raw(":choose  "),
                Span::styled("Ctrl+N", theme::key_hint()),
                Span::raw(":continue"),
            ])),
            chunks[7],
        );
    }
}

impl Default for ConfigurationPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn render_selector(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: Option<&str>,
    placeholder: &str,
    focused: bool,
) {
    let content = match value {
        Some(label) => Span::styled(label.to_string(), Style::default().fg(theme::TEXT)),
        None => Span::styled(placeholder.to_string(), theme::dim()),
    };
    let arrows = if focused { theme::highlight() } else { theme::dim() };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("◂ ", arrows),
            content,
            Span::styled(" ▸", arrows),
        ]))
        .block(theme::block(title, focused)),
        area,
    );
}
