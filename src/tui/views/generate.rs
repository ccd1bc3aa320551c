//! Step 3: summary and the generate trigger.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::core::project::ProjectConfiguration;
use crate::tui::events::{Action, PanelResult};
use crate::tui::theme;

/// Description line under the heading.
pub fn description(project: &ProjectConfiguration, documents: usize) -> &'static str {
    if project.ai_enabled && documents > 0 {
        "Your questionnaire will be generated based on the selected areas and uploaded documents."
    } else {
        "Your questionnaire will be generated based on the selected areas."
    }
}

pub fn handle_input(event: &Event, generating: bool) -> PanelResult {
    let key = match event {
        Event::Key(k) if k.kind == KeyEventKind::Press => *k,
        _ => return PanelResult::Ignored,
    };
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('b')) => PanelResult::Action(Action::PrevStep),
        (_, KeyCode::Enter | KeyCode::Char('g')) if !generating => PanelResult::Action(Action::Generate),
        (_, KeyCode::Enter | KeyCode::Char('g')) => PanelResult::Consumed,
        (_, KeyCode::Esc) if generating => PanelResult::Action(Action::CancelGeneration),
        (_, KeyCode::Esc) => PanelResult::Action(Action::PrevStep),
        _ => PanelResult::Ignored,
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    project: &ProjectConfiguration,
    documents: usize,
    generating: bool,
    focused: bool,
) {
    let block = theme::block("Ready to Generate", focused);

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled("✨ Ready to Generate", theme::title())),
        Line::raw(""),
        Line::from(Span::styled(description(project, documents), theme::muted())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Project: ", theme::muted()),
            Span::raw(project.name.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Subject Areas: ", theme::muted()),
            Span::raw(project.selected_areas.len().to_string()),
        ]),
    ];
    if project.ai_enabled {
        lines.push(Line::from(vec![
            Span::styled("Documents: ", theme::muted()),
            Span::raw(documents.to_string()),
        ]));
    }
    lines.push(Line::raw(""));

    let (label, style) = if generating {
        (" Generating... ", theme::button_disabled())
    } else {
        (" Generate Questionnaire ", theme::button())
    };
    lines.push(Line::from(Span::styled(label, style)));
    lines.push(Line::raw(""));

    let mut hints = vec![Span::styled("Ctrl+B", theme::key_hint()), Span::raw(":back  ")];
    if generating {
        hints.push(Span::styled("Esc", theme::key_hint()));
        hints.push(Span::raw(":cancel"));
    } else {
        hints.push(Span::styled("Enter", theme::key_hint()));
        hints.push(Span::raw(":generate"));
    }
    lines.push(Line::from(hints));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
