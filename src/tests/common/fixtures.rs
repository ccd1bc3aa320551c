//! Test Fixtures
//!
//! Sessions wired to an in-test channel, sample projects, and collaborators
//! with scripted behavior.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::clipboard::{Clipboard, ClipboardError};
use crate::core::events::SessionEvent;
use crate::core::export::DocumentExporter;
use crate::core::project::{ProjectConfiguration, ProjectType, Timeline};
use crate::core::questionnaire::{
    GenerationError, GenerationRequest, Questionnaire, QuestionnaireGenerator, TemplateGenerator,
};
use crate::core::session::{DiscoverySession, SessionUpdate};
use crate::core::upload::SequentialIdGenerator;

// =============================================================================
// Session Fixtures
// =============================================================================

pub type Events = mpsc::UnboundedReceiver<SessionEvent>;

/// Session with the template generator and sequential "up-N" ids.
pub fn create_test_session() -> (DiscoverySession, Events) {
    create_session_with(Arc::new(TemplateGenerator))
}

pub fn create_session_with(generator: Arc<dyn QuestionnaireGenerator>) -> (DiscoverySession, Events) {
    let (tx, rx) = mpsc::unbounded_channel();
    let session = DiscoverySession::new(
        &AppConfig::default(),
        generator,
        Arc::new(DocumentExporter),
        Arc::new(SequentialIdGenerator::new("up")),
        Arc::new(tx),
    );
    (session, rx)
}

/// Receive the next event and apply it.
pub async fn apply_next(session: &mut DiscoverySession, rx: &mut Events) -> SessionUpdate {
    let event = rx.recv().await.expect("event channel closed");
    session.apply(event)
}

/// Apply events until one matches, returning it.
pub async fn apply_until(
    session: &mut DiscoverySession,
    rx: &mut Events,
    mut matches: impl FnMut(&SessionUpdate) -> bool,
) -> SessionUpdate {
    loop {
        let update = apply_next(session, rx).await;
        if matches(&update) {
            return update;
        }
    }
}

// =============================================================================
// Project Fixtures
// =============================================================================

pub fn acme_project() -> ProjectConfiguration {
    ProjectConfiguration {
        name: "Acme Portal".into(),
        client: "Acme Corp".into(),
        project_type: Some(ProjectType::SystemImplementation),
        timeline: Some(Timeline::ThreeToSixMonths),
        context: String::new(),
        ai_enabled: false,
        selected_areas: vec!["security-compliance".into()],
    }
}

/// Walk the session to step 3 with `project`.
pub fn ready_to_generate(session: &mut DiscoverySession, project: ProjectConfiguration) {
    let wizard = session.wizard_mut();
    *wizard.project_mut() = project;
    wizard.advance().expect("step 1 should be complete");
    wizard.advance().expect("step 2 should be complete");
}

// =============================================================================
// Scripted Collaborators
// =============================================================================

/// Generator that always fails with the given message.
pub struct FailingGenerator(pub &'static str);

impl QuestionnaireGenerator for FailingGenerator {
    fn generate(&self, _request: &GenerationRequest) -> Result<Questionnaire, GenerationError> {
        Err(GenerationError::Failed(self.0.to_string()))
    }
}

/// Generator that records every request it sees.
#[derive(Default)]
pub struct RecordingGenerator {
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl QuestionnaireGenerator for RecordingGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<Questionnaire, GenerationError> {
        self.requests
            .lock()
            .expect("recording generator lock poisoned")
            .push(request.clone());
        TemplateGenerator.generate(request)
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Mutex<Vec<String>>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes
            .lock()
            .expect("recording clipboard lock poisoned")
            .push(text.to_string());
        Ok(())
    }
}

pub struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Write("permission denied".into()))
    }
}
