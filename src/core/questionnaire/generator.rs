//! Questionnaire generation.
//!
//! [`TemplateGenerator`] assembles a questionnaire from fixed content keyed
//! off the project configuration. The trait is the seam for a real
//! document-aware generator.

use chrono::{SecondsFormat, Utc};

use crate::core::project::ProjectConfiguration;
use crate::core::topics::TOPIC_AREAS;

use super::types::{Question, QuestionDetail, QuestionKind, Questionnaire, QuestionnaireMetadata, Section};

/// Inputs available to a generator.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub project: ProjectConfiguration,
    /// Names of the accepted reference documents.
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("Questionnaire generation failed: {0}")]
    Failed(String),
}

pub trait QuestionnaireGenerator: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> Result<Questionnaire, GenerationError>;
}

const BUSINESS_OVERVIEW: [&str; 3] = [
    "What are the primary business objectives for this project?",
    "How does this initiative align with your strategic goals?",
    "What specific challenges are you hoping to address?",
];

const CURRENT_STATE: [&str; 3] = [
    "What systems and processes are currently in place?",
    "What are the main pain points in your existing workflow?",
    "How do stakeholders currently interact with these systems?",
];

/// Fixed-content generator.
///
/// Always emits "Business Overview" and "Current State Analysis", then one
/// section per selected topic area (catalog order), then a "Document
/// Insights" section when AI analysis is on and documents were accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateGenerator;

impl QuestionnaireGenerator for TemplateGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<Questionnaire, GenerationError> {
        let project = &request.project;
        let mut sections = vec![
            Section {
                title: "Business Overview".into(),
                description: None,
                questions: BUSINESS_OVERVIEW.iter().map(|&q| q.into()).collect(),
            },
            Section {
                title: "Current State Analysis".into(),
                description: None,
                questions: CURRENT_STATE.iter().map(|&q| q.into()).collect(),
            },
        ];

        for area in TOPIC_AREAS
            .iter()
            .filter(|area| project.is_area_selected(area.id))
        {
            let questions = area
                .questions
                .iter()
                .enumerate()
                .map(|(i, &text)| {
                    Question::Detailed(QuestionDetail {
                        id: Some(format!("{}-{}", area.id, i + 1)),
                        text: text.to_string(),
                        kind: Some(QuestionKind::Text),
                    })
                })
                .collect();
            sections.push(Section {
                title: area.name.to_string(),
                description: Some(area.description.to_string()),
                questions,
            });
        }

        if project.ai_enabled && !request.documents.is_empty() {
            let questions = request
                .documents
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    Question::Detailed(QuestionDetail {
                        id: Some(format!("document-{}", i + 1)),
                        text: format!(
                            "Which parts of \"{name}\" best describe the current state, and what is out of date?"
                        ),
                        kind: Some(QuestionKind::Text),
                    })
                })
                .collect();
            sections.push(Section {
                title: "Document Insights".into(),
                description: Some("Follow-up questions on the uploaded reference documents".into()),
                questions,
            });
        }

        let mut questionnaire = Questionnaire {
            title: format!("Discovery Questionnaire - {}", project.name),
            description: None,
            sections,
            metadata: None,
        };
        questionnaire.metadata = Some(QuestionnaireMetadata {
            generated_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            total_questions: Some(questionnaire.total_questions()),
        });

        log::info!(
            "Generated \"{}\" with {} sections",
            questionnaire.title,
            questionnaire.section_count()
        );
        Ok(questionnaire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(areas: &[&str], ai: bool, docs: &[&str]) -> GenerationRequest {
        let mut project = ProjectConfiguration {
            name: "Acme Portal".into(),
            client: "Acme Corp".into(),
            ai_enabled: ai,
            ..Default::default()
        };
        for area in areas {
            project.toggle_area(area);
        }
        GenerationRequest {
            project,
            documents: docs.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn test_title_embeds_project_name() {
        let q = TemplateGenerator.generate(&request(&[], false, &[])).unwrap();
        assert_eq!(q.title, "Discovery Questionnaire - Acme Portal");
        assert_eq!(q.sections[0].title, "Business Overview");
        assert_eq!(q.sections[1].title, "Current State Analysis");
        assert_eq!(q.total_questions(), 6);
    }

    #[test]
    fn test_selected_areas_follow_catalog_order() {
        let q = TemplateGenerator
            .generate(&request(&["infrastructure", "business-process"], false, &[]))
            .unwrap();
        let titles: Vec<_> = q.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Business Overview", "Current State Analysis", "Business Process", "Infrastructure"]
        );
        assert_eq!(
            q.sections[3].description.as_deref(),
            Some("Hardware, hosting, deployment, and maintenance")
        );
    }

    #[test]
    fn test_document_section_requires_ai() {
        let without_ai = TemplateGenerator
            .generate(&request(&["data-management"], false, &["a.pdf"]))
            .unwrap();
        assert!(without_ai.sections.iter().all(|s| s.title != "Document Insights"));

        let with_ai = TemplateGenerator
            .generate(&request(&["data-management"], true, &["a.pdf", "b.csv"]))
            .unwrap();
        let docs = with_ai.sections.last().unwrap();
        assert_eq!(docs.title, "Document Insights");
        assert_eq!(docs.questions.len(), 2);
        assert!(docs.questions[1].text().contains("b.csv"));
    }

    #[test]
    fn test_metadata_matches_content() {
        let q = TemplateGenerator
            .generate(&request(&["user-experience"], false, &[]))
            .unwrap();
        let metadata = q.metadata.clone().unwrap();
        assert_eq!(metadata.total_questions, Some(q.total_questions()));
        assert!(metadata.generated_at.is_some());
    }
}
