//! Questionnaire preview: summary, statistics, numbered content, and the
//! export / copy actions.

use chrono::{DateTime, Local};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::core::export::ExportFormat;
use crate::core::project::{ProjectConfiguration, ProjectType, Timeline};
use crate::core::questionnaire::Questionnaire;
use crate::tui::events::{Action, PanelResult};
use crate::tui::theme;

pub struct PreviewPanel {
    pub scroll: u16,
}

impl PreviewPanel {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    pub fn handle_input(&mut self, event: &Event, has_questionnaire: bool) -> PanelResult {
        let key = match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => *k,
            _ => return PanelResult::Ignored,
        };
        if key.code == KeyCode::Esc {
            return PanelResult::Action(Action::TogglePane);
        }
        if !has_questionnaire {
            return PanelResult::Ignored;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                PanelResult::Consumed
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                PanelResult::Consumed
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                PanelResult::Consumed
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                PanelResult::Consumed
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.scroll = 0;
                PanelResult::Consumed
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match ExportFormat::ALL.get(index) {
                    Some(&format) => PanelResult::Action(Action::Export(format)),
                    None => PanelResult::Ignored,
                }
            }
            KeyCode::Char('c') => PanelResult::Action(Action::CopyText),
            _ => PanelResult::Ignored,
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        questionnaire: Option<&Questionnaire>,
        project: &ProjectConfiguration,
        pending_exports: usize,
        focused: bool,
    ) {
        let block = theme::block("Questionnaire Preview", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(questionnaire) = questionnaire else {
            render_empty(frame, inner);
            return;
        };

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        let mut lines = header_lines(questionnaire, project, pending_exports);
        lines.extend(content_lines(questionnaire));
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            chunks[0],
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(footer(questionnaire), theme::muted()))),
            chunks[1],
        );
    }
}

impl Default for PreviewPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled("📋 Questionnaire Preview", theme::title())),
        Line::raw(""),
        Line::from(Span::styled(
            "Complete the configuration to see your generated questionnaire here.",
            theme::muted(),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "🎯 Targeted Questions   📊 Structured Sections   ⚡ AI-Powered",
            theme::dim(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn header_lines<'a>(
    questionnaire: &'a Questionnaire,
    project: &'a ProjectConfiguration,
    pending_exports: usize,
) -> Vec<Line<'a>> {
    let field = |label: &'a str, value: &'a str| {
        vec![
            Span::styled(format!("{label}: "), theme::muted()),
            Span::styled(value, Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)),
        ]
    };

    let mut badges = vec![
        Span::styled(
            format!(" {} Sections ", questionnaire.section_count()),
            Style::default().fg(theme::PRIMARY_LIGHT),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" {} Questions ", questionnaire.total_questions()),
            Style::default().fg(theme::SUCCESS),
        ),
    ];
    if project.ai_enabled {
        badges.push(Span::raw(" "));
        badges.push(Span::styled(" ✨ AI Enhanced ", Style::default().fg(theme::WARNING)));
    }

    let mut actions = Vec::new();
    for (i, format) in ExportFormat::ALL.iter().enumerate() {
        actions.push(Span::styled((i + 1).to_string(), theme::highlight()));
        actions.push(Span::raw(format!(" Export {format}  ")));
    }
    actions.push(Span::styled("c", theme::highlight()));
    actions.push(Span::raw(" Copy Text"));
    if pending_exports > 0 {
        actions.push(Span::styled(
            format!("   exporting ({pending_exports})..."),
            Style::default().fg(theme::INFO),
        ));
    }

    let mut row1 = field("Project", project.name.as_str());
    row1.push(Span::raw("   "));
    row1.extend(field("Client", project.client.as_str()));
    let mut row2 = field("Type", project.project_type.map(ProjectType::label).unwrap_or("-"));
    row2.push(Span::raw("   "));
    row2.extend(field("Timeline", project.timeline.map(Timeline::label).unwrap_or("-")));

    let mut lines = vec![
        Line::from(Span::styled(questionnaire.title.as_str(), theme::title())),
        Line::from(Span::styled(
            questionnaire
                .description
                .as_deref()
                .unwrap_or("Generated questionnaire ready for use"),
            theme::muted(),
        )),
        Line::raw(""),
        Line::from(row1),
        Line::from(row2),
        Line::raw(""),
        Line::from(badges),
        Line::raw(""),
        Line::from(actions),
        Line::raw(""),
    ];
    lines.push(Line::from(Span::styled("📋 Questionnaire Content", theme::heading())));
    lines.push(Line::raw(""));
    lines
}

/// Numbered sections and questions, `{section}.{question}` 1-based.
pub fn content_lines(questionnaire: &Questionnaire) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for (s, section) in questionnaire.sections.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", s + 1, section.title),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        )));
        if let Some(description) = section.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(Line::from(Span::styled(description, theme::muted())));
        }
        for (q, question) in section.questions.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<6}", format!("{}.{}", s + 1, q + 1)),
                    Style::default().fg(theme::PRIMARY_LIGHT).add_modifier(Modifier::BOLD),
                ),
                Span::raw(question.text()),
            ]));
        }
        if s + 1 < questionnaire.sections.len() {
            lines.push(Line::from(Span::styled("─".repeat(24), theme::dim())));
        }
        lines.push(Line::raw(""));
    }
    lines
}

/// "Generated on {date} • {m} questions across {n} sections".
///
/// Uses the questionnaire's own timestamp when it has one, else today.
pub fn footer(questionnaire: &Questionnaire) -> String {
    let date = questionnaire
        .metadata
        .as_ref()
        .and_then(|m| m.generated_at.as_deref())
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|dt| dt.with_timezone(&Local))
        .unwrap_or_else(Local::now);
    format!(
        "Generated on {} • {} questions across {} sections",
        date.format("%-m/%-d/%Y"),
        questionnaire.total_questions(),
        questionnaire.section_count()
    )
}
