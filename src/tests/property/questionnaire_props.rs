//! Property-based tests for questionnaire generation and plain-text output

use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::core::project::ProjectConfiguration;
use crate::core::questionnaire::{
    to_plain_text, GenerationRequest, QuestionnaireGenerator, TemplateGenerator,
};
use crate::core::topics::TOPIC_AREAS;

fn area_ids() -> Vec<&'static str> {
    TOPIC_AREAS.iter().map(|a| a.id).collect()
}

/// A non-empty set of area ids in shuffled selection order.
fn arb_selection() -> impl Strategy<Value = Vec<String>> {
    subsequence(area_ids(), 1..=TOPIC_AREAS.len())
        .prop_shuffle()
        .prop_map(|ids| ids.into_iter().map(str::to_string).collect())
}

fn arb_request() -> impl Strategy<Value = GenerationRequest> {
    (
        arb_selection(),
        any::<bool>(),
        prop::collection::vec("[a-z]{1,8}\\.pdf", 0..4),
    )
        .prop_map(|(selected_areas, ai_enabled, documents)| GenerationRequest {
            project: ProjectConfiguration {
                name: "Prop Project".into(),
                client: "Prop Client".into(),
                ai_enabled,
                selected_areas,
                ..ProjectConfiguration::default()
            },
            documents,
        })
}

proptest! {
    #[test]
    fn total_questions_is_section_sum(request in arb_request()) {
        let questionnaire = TemplateGenerator.generate(&request).unwrap();
        let sum: usize = questionnaire.sections.iter().map(|s| s.questions.len()).sum();
        prop_assert_eq!(questionnaire.total_questions(), sum);
        prop_assert_eq!(
            questionnaire.metadata.as_ref().and_then(|m| m.total_questions),
            Some(sum)
        );
    }

    #[test]
    fn topic_sections_follow_catalog_order(request in arb_request()) {
        let questionnaire = TemplateGenerator.generate(&request).unwrap();
        let expected: Vec<&str> = TOPIC_AREAS
            .iter()
            .filter(|a| request.project.selected_areas.iter().any(|id| id == a.id))
            .map(|a| a.name)
            .collect();
        let actual: Vec<&str> = questionnaire.sections[2..2 + expected.len()]
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        prop_assert_eq!(actual, expected);

        let has_documents = request.project.ai_enabled && !request.documents.is_empty();
        prop_assert_eq!(
            questionnaire.section_count(),
            2 + request.project.selected_areas.len() + usize::from(has_documents)
        );
    }

    #[test]
    fn plain_text_numbers_every_question_once(request in arb_request()) {
        let questionnaire = TemplateGenerator.generate(&request).unwrap();
        let text = to_plain_text(&questionnaire, &request.project);

        for (s, section) in questionnaire.sections.iter().enumerate() {
            let heading = format!("{}. {}", s + 1, section.title);
            prop_assert_eq!(text.lines().filter(|l| *l == heading).count(), 1);
            for (q, question) in section.questions.iter().enumerate() {
                let line = format!("{}.{} {}", s + 1, q + 1, question.text());
                prop_assert_eq!(text.lines().filter(|l| *l == line).count(), 1);
            }
        }
    }
}
