//! Property-based tests for upload validation and simulated progress

use proptest::prelude::*;

use crate::config::UploadConfig;
use crate::core::upload::{validate_file, FileHandle, TickOutcome, UploadEntry, UploadError, UploadStatus};

// ============================================================================
// Strategies
// ============================================================================

fn arb_stem() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ -]{1,24}"
}

fn arb_accepted_extension() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("pdf"),
        Just("PDF"),
        Just("docx"),
        Just("txt"),
        Just("Csv"),
        Just("xlsx"),
    ]
    .prop_map(str::to_string)
}

fn arb_rejected_extension() -> impl Strategy<Value = String> {
    "[a-z]{1,5}".prop_filter("must not be an accepted extension", |ext| {
        !UploadConfig::default().accepts_extension(ext)
    })
}

// ============================================================================
// Validation
// ============================================================================

proptest! {
    #[test]
    fn unsupported_extension_is_rejected(
        stem in arb_stem(),
        ext in arb_rejected_extension(),
        size in 0u64..(64 * 1024 * 1024),
    ) {
        let file = FileHandle::new(format!("{stem}.{ext}"), size);
        let result = validate_file(&file, &UploadConfig::default());
        let is_invalid_type = matches!(result, Err(UploadError::InvalidFileType { .. }));
        prop_assert!(is_invalid_type);
    }

    #[test]
    fn supported_file_accepted_iff_within_limit(
        stem in arb_stem(),
        ext in arb_accepted_extension(),
        size in 0u64..(20 * 1024 * 1024),
    ) {
        let config = UploadConfig::default();
        let file = FileHandle::new(format!("{stem}.{ext}"), size);
        let result = validate_file(&file, &config);
        if size <= config.max_file_size_bytes {
            prop_assert_eq!(result, Ok(()));
        } else {
            let is_too_large = matches!(result, Err(UploadError::FileTooLarge { .. }));
            prop_assert!(is_too_large);
        }
    }

    #[test]
    fn name_without_dot_is_rejected(name in "[a-zA-Z0-9_-]{1,24}") {
        let file = FileHandle::new(name, 1);
        let result = validate_file(&file, &UploadConfig::default());
        let is_invalid_type = matches!(result, Err(UploadError::InvalidFileType { .. }));
        prop_assert!(is_invalid_type);
    }
}

// ============================================================================
// Progress
// ============================================================================

proptest! {
    #[test]
    fn progress_is_monotonic_and_ends_complete(step in 1u8..=100) {
        let mut entry = UploadEntry::new("up-1".into(), FileHandle::new("a.pdf", 1));
        let mut last = entry.progress;
        let mut ticks = 0usize;

        loop {
            let outcome = entry.advance(step);
            ticks += 1;

            prop_assert!(entry.progress >= last);
            prop_assert!(entry.progress <= 100);
            if entry.progress < 100 {
                prop_assert_eq!(entry.status, UploadStatus::Uploading);
            }
            last = entry.progress;

            if outcome == TickOutcome::Finished {
                break;
            }
            prop_assert!(ticks < 200);
        }

        prop_assert_eq!(entry.status, UploadStatus::Complete);
        let climb = (100 + step as usize - 1) / step as usize;
        prop_assert_eq!(ticks, climb + 2);
    }
}
