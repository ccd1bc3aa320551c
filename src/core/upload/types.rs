//! Upload domain types: candidate files, entries, statuses, and validation.

use std::path::{Path, PathBuf};

use crate::config::UploadConfig;

// ============================================================================
// File handles
// ============================================================================

/// A raw file offered for upload (dropped, pasted, or typed in).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub size: u64,
    pub path: Option<PathBuf>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            path: None,
        }
    }

    /// Build a handle from a path on disk, reading only its metadata.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            size: metadata.len(),
            path: Some(path.to_path_buf()),
        })
    }

    /// Lower-cased suffix after the last `.`, if the name has one.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    /// Size in MiB with one decimal, e.g. `"2.0 MB"`.
    pub fn human_size(&self) -> String {
        format_size(self.size)
    }
}

pub fn format_size(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
}

// ============================================================================
// Validation
// ============================================================================

/// Reasons a candidate file is turned away at submission time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("{name} is not a supported file type.")]
    InvalidFileType { name: String },

    #[error("{name} exceeds the {limit_label} limit.")]
    FileTooLarge {
        name: String,
        size: u64,
        limit_label: String,
    },
}

impl UploadError {
    /// Short heading for the user-visible warning.
    pub fn title(&self) -> &'static str {
        match self {
            UploadError::InvalidFileType { .. } => "Invalid file type",
            UploadError::FileTooLarge { .. } => "File too large",
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            UploadError::InvalidFileType { name } | UploadError::FileTooLarge { name, .. } => name,
        }
    }
}

/// Check type first, then size.
pub fn validate_file(file: &FileHandle, config: &UploadConfig) -> Result<(), UploadError> {
    let type_ok = file
        .extension()
        .is_some_and(|ext| config.accepts_extension(&ext));
    if !type_ok {
        return Err(UploadError::InvalidFileType {
            name: file.name.clone(),
        });
    }

    if file.size > config.max_file_size_bytes {
        return Err(UploadError::FileTooLarge {
            name: file.name.clone(),
            size: file.size,
            limit_label: config.max_size_label(),
        });
    }

    Ok(())
}

// ============================================================================
// Entries
// ============================================================================

/// Lifecycle of a simulated upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadStatus {
    Uploading,
    Processing,
    Complete,
    /// Declared for a future server-side rejection; nothing assigns it yet.
    Error,
}

/// Semantic color family for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Primary,
    Warning,
    Success,
    Destructive,
}

impl UploadStatus {
    pub fn label(self) -> &'static str {
        match self {
            UploadStatus::Uploading => "Uploading...",
            UploadStatus::Processing => "Processing...",
            UploadStatus::Complete => "Complete",
            UploadStatus::Error => "Error",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            UploadStatus::Uploading => StatusTone::Primary,
            UploadStatus::Processing => StatusTone::Warning,
            UploadStatus::Complete => StatusTone::Success,
            UploadStatus::Error => StatusTone::Destructive,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, UploadStatus::Uploading | UploadStatus::Processing)
    }
}

/// What the timer should do after a tick was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Finished,
}

/// Per-file simulated upload record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEntry {
    pub id: String,
    pub file: FileHandle,
    pub status: UploadStatus,
    /// 0..=100
    pub progress: u8,
}

impl UploadEntry {
    pub fn new(id: String, file: FileHandle) -> Self {
        Self {
            id,
            file,
            status: UploadStatus::Uploading,
            progress: 0,
        }
    }

    /// Apply one timer tick.
    ///
    /// Progress climbs by `step` (capped at 100) until it reaches 100; the
    /// next tick moves to `Processing`, and the one after to `Complete`.
    pub fn advance(&mut self, step: u8) -> TickOutcome {
        if self.progress < 100 {
            self.progress = self.progress.saturating_add(step.max(1)).min(100);
            return TickOutcome::Continue;
        }
        match self.status {
            UploadStatus::Uploading => {
                self.status = UploadStatus::Processing;
                TickOutcome::Continue
            }
            UploadStatus::Processing => {
                self.status = UploadStatus::Complete;
                TickOutcome::Finished
            }
            UploadStatus::Complete | UploadStatus::Error => TickOutcome::Finished,
        }
    }
}
