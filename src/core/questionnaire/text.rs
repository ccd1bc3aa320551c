//! Plain-text serialization used by "Copy Text" and the text-based exports.

use crate::core::project::ProjectConfiguration;

use super::types::Questionnaire;

/// Render the questionnaire as numbered plain text.
///
/// Layout: title, blank line, Project/Client/Type/Timeline lines, blank
/// line, then for each section `"{n}. {title}"`, its description if any, a
/// blank line, one `"{n}.{m} {text}"` line per question, and a trailing
/// blank line.
pub fn to_plain_text(questionnaire: &Questionnaire, project: &ProjectConfiguration) -> String {
    let mut out = format!(
        "{}\n\nProject: {}\nClient: {}\nType: {}\nTimeline: {}\n\n",
        questionnaire.title,
        project.name,
        project.client,
        project.type_str(),
        project.timeline_str(),
    );

    for (section_idx, section) in questionnaire.sections.iter().enumerate() {
        let n = section_idx + 1;
        out.push_str(&format!("{n}. {}\n", section.title));
        if let Some(description) = section.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(description);
            out.push('\n');
        }
        out.push('\n');

        for (question_idx, question) in section.questions.iter().enumerate() {
            out.push_str(&format!("{n}.{} {}\n", question_idx + 1, question.text()));
        }
        out.push('\n');
    }

    out
}
