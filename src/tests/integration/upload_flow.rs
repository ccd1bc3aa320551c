//! Upload validation, progress, and removal through a full session.

use std::time::Duration;

use crate::core::session::SessionUpdate;
use crate::core::upload::{FileHandle, UploadError, UploadStatus};
use crate::tests::common::*;

const MIB: u64 = 1024 * 1024;

#[tokio::test(start_paused = true)]
async fn test_mixed_batch_accepts_pdf_and_warns_on_csv() {
    let (mut session, mut rx) = create_test_session();
    session.wizard_mut().project_mut().ai_enabled = true;

    let report = session.submit_files(vec![
        FileHandle::new("scope.pdf", 2 * MIB),
        FileHandle::new("export.csv", 12 * MIB),
    ]);

    assert_eq!(report.accepted, vec!["up-1".to_string()]);
    assert_eq!(report.rejected.len(), 1);
    match &report.rejected[0] {
        UploadError::FileTooLarge { name, limit_label, .. } => {
            assert_eq!(name, "export.csv");
            assert_eq!(limit_label, "10MB");
        }
        other => panic!("unexpected rejection: {other:?}"),
    }
    assert_eq!(report.rejected[0].title(), "File too large");

    let uploads = session.uploads();
    assert_eq!(uploads.entries().len(), 1);
    assert_eq!(uploads.accepted_files().len(), 1);
    assert_eq!(uploads.entries()[0].status, UploadStatus::Uploading);
    assert_eq!(uploads.entries()[0].progress, 0);

    // Ten ticks climb to 100, then Processing, then Complete.
    let mut statuses = Vec::new();
    for _ in 0..12 {
        if let SessionUpdate::UploadProgress { status, .. } = apply_next(&mut session, &mut rx).await {
            statuses.push(status);
        }
    }
    assert_eq!(statuses[9], UploadStatus::Uploading);
    assert_eq!(statuses[10], UploadStatus::Processing);
    assert_eq!(statuses[11], UploadStatus::Complete);
    assert_eq!(session.uploads().entries()[0].progress, 100);
    assert!(!session.uploads().is_ticking("up-1"));

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_remove_mid_upload_stops_ticks() {
    let (mut session, mut rx) = create_test_session();
    session.submit_files(vec![
        FileHandle::new("a.pdf", MIB),
        FileHandle::new("b.txt", MIB),
    ]);

    // Let both advance a little.
    for _ in 0..4 {
        apply_next(&mut session, &mut rx).await;
    }
    assert!(session.remove_upload("up-1"));
    assert!(!session.remove_upload("up-1"));

    // Any tick already queued for up-1 is ignored; only up-2 keeps moving.
    loop {
        match apply_next(&mut session, &mut rx).await {
            SessionUpdate::UploadProgress { id, status } => {
                assert_eq!(id, "up-2");
                if status == UploadStatus::Complete {
                    break;
                }
            }
            SessionUpdate::Ignored => {}
            other => panic!("unexpected update: {other:?}"),
        }
    }

    let names: Vec<&str> = session
        .uploads()
        .accepted_files()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["b.txt"]);
    assert_eq!(session.uploads().active_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_upload_timers() {
    let (mut session, mut rx) = create_test_session();
    session.submit_files(vec![FileHandle::new("a.pdf", MIB)]);
    apply_next(&mut session, &mut rx).await;

    session.shutdown();
    while rx.try_recv().is_ok() {}
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(session.uploads().entries()[0].status, UploadStatus::Uploading);
}
