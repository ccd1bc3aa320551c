//! Wizard navigation, generation, export, and copy through a full session.

use std::sync::Arc;
use std::time::Duration;

use crate::core::clipboard::ClipboardError;
use crate::core::export::ExportFormat;
use crate::core::questionnaire::GenerationError;
use crate::core::session::SessionUpdate;
use crate::core::upload::FileHandle;
use crate::core::wizard::{WizardError, WizardStep, WizardValidationError};
use crate::tests::common::*;

#[tokio::test(start_paused = true)]
async fn test_acme_portal_end_to_end() {
    let (mut session, mut rx) = create_test_session();

    {
        let wizard = session.wizard_mut();
        assert_eq!(
            wizard.advance(),
            Err(WizardError::Validation(WizardValidationError::MissingField("name")))
        );
        wizard.project_mut().name = "Acme Portal".into();
        wizard.project_mut().client = "Acme Corp".into();
        assert_eq!(wizard.advance(), Ok(WizardStep::AreasAndUpload));
        assert_eq!(
            wizard.advance(),
            Err(WizardError::Validation(WizardValidationError::NoAreasSelected))
        );
        wizard.project_mut().toggle_area("security-compliance");
        assert_eq!(wizard.advance(), Ok(WizardStep::ReadyToGenerate));
    }

    session.start_generation().unwrap();
    assert!(session.wizard().is_generating());
    assert_eq!(session.start_generation(), Err(WizardError::AlreadyGenerating));

    tokio::time::sleep(Duration::from_millis(2999)).await;
    assert!(rx.try_recv().is_err());

    match apply_next(&mut session, &mut rx).await {
        SessionUpdate::QuestionnaireReady { title, total_questions } => {
            assert_eq!(title, "Discovery Questionnaire - Acme Portal");
            assert_eq!(total_questions, 9);
        }
        other => panic!("unexpected update: {other:?}"),
    }
    assert!(!session.wizard().is_generating());

    let text = session.plain_text().unwrap();
    assert!(text.starts_with("Discovery Questionnaire - Acme Portal\n\nProject: Acme Portal\nClient: Acme Corp\n"));
    assert!(text.contains("\n3. Security & Compliance\n"));

    let clipboard = RecordingClipboard::default();
    session.copy_to_clipboard(&clipboard).unwrap();
    assert_eq!(clipboard.writes.lock().unwrap().as_slice(), &[text]);

    session.export(ExportFormat::Word).unwrap();
    session.export(ExportFormat::Json).unwrap();
    assert_eq!(session.pending_exports(), 2);

    let mut completed = Vec::new();
    while completed.len() < 2 {
        if let SessionUpdate::ExportCompleted { format, bytes } = apply_next(&mut session, &mut rx).await {
            assert!(bytes > 0);
            completed.push(format);
        }
    }
    completed.sort_by_key(|f| f.label());
    assert_eq!(completed, vec![ExportFormat::Json, ExportFormat::Word]);
    assert_eq!(session.pending_exports(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_generation_uses_accepted_documents() {
    let generator = Arc::new(RecordingGenerator::default());
    let (mut session, mut rx) = create_session_with(generator.clone());

    let mut project = acme_project();
    project.ai_enabled = true;
    session.wizard_mut().project_mut().ai_enabled = true;
    session.submit_files(vec![
        FileHandle::new("scope.pdf", 1024),
        FileHandle::new("notes.exe", 1024),
    ]);
    ready_to_generate(&mut session, project);

    session.start_generation().unwrap();
    let update = apply_until(&mut session, &mut rx, |u| {
        matches!(u, SessionUpdate::QuestionnaireReady { .. })
    })
    .await;
    assert!(matches!(update, SessionUpdate::QuestionnaireReady { .. }));

    let requests = generator.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].documents, vec!["scope.pdf".to_string()]);

    let questionnaire = session.wizard().questionnaire().unwrap();
    assert_eq!(
        questionnaire.sections.last().map(|s| s.title.as_str()),
        Some("Document Insights")
    );
}

#[tokio::test(start_paused = true)]
async fn test_generation_failure_clears_flag() {
    let (mut session, mut rx) = create_session_with(Arc::new(FailingGenerator("model offline")));
    ready_to_generate(&mut session, acme_project());

    session.start_generation().unwrap();
    match apply_next(&mut session, &mut rx).await {
        SessionUpdate::GenerationFailed(GenerationError::Failed(message)) => {
            assert_eq!(message, "model offline");
        }
        other => panic!("unexpected update: {other:?}"),
    }
    assert!(!session.wizard().is_generating());
    assert!(session.wizard().questionnaire().is_none());
    assert!(session.start_generation().is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_generation_never_lands() {
    let (mut session, mut rx) = create_test_session();
    ready_to_generate(&mut session, acme_project());

    session.start_generation().unwrap();
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(session.cancel_generation());
    assert!(!session.cancel_generation());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err());
    assert!(session.wizard().questionnaire().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_back_navigation_keeps_generation_running() {
    let (mut session, mut rx) = create_test_session();
    ready_to_generate(&mut session, acme_project());

    session.start_generation().unwrap();
    assert_eq!(session.wizard_mut().back(), Ok(WizardStep::AreasAndUpload));

    let update = apply_next(&mut session, &mut rx).await;
    assert!(matches!(update, SessionUpdate::QuestionnaireReady { .. }));
    assert_eq!(session.wizard().step(), WizardStep::AreasAndUpload);
}

#[tokio::test]
async fn test_copy_without_questionnaire_is_empty() {
    let (session, _rx) = create_test_session();
    assert_eq!(session.copy_to_clipboard(&BrokenClipboard), Err(ClipboardError::Empty));
}

#[tokio::test(start_paused = true)]
async fn test_copy_failure_after_generation() {
    let (mut session, mut rx) = create_test_session();
    ready_to_generate(&mut session, acme_project());
    session.start_generation().unwrap();
    apply_next(&mut session, &mut rx).await;

    assert_eq!(
        session.copy_to_clipboard(&BrokenClipboard),
        Err(ClipboardError::Write("permission denied".into()))
    );
}
