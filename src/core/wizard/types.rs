//! Wizard Domain Types
//!
//! - [`WizardStep`]: the three linear steps of the wizard
//! - [`WizardError`] / [`WizardValidationError`]: failures of wizard operations
//!
//! Steps only move one at a time. Whether a forward move is *enabled*
//! depends on the project data and is decided by the controller.

use std::fmt;

// ============================================================================
// Steps
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WizardStep {
    /// Project name, client, type, timeline, context, AI toggle.
    Configuration,
    /// Topic-area selection and (with AI enabled) document upload.
    AreasAndUpload,
    /// Summary and the generate trigger.
    ReadyToGenerate,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Configuration,
        WizardStep::AreasAndUpload,
        WizardStep::ReadyToGenerate,
    ];

    /// 1-based position shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Configuration => 1,
            WizardStep::AreasAndUpload => 2,
            WizardStep::ReadyToGenerate => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Configuration => "Project Configuration",
            WizardStep::AreasAndUpload => "Subject Areas",
            WizardStep::ReadyToGenerate => "Ready to Generate",
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Configuration => Some(WizardStep::AreasAndUpload),
            WizardStep::AreasAndUpload => Some(WizardStep::ReadyToGenerate),
            WizardStep::ReadyToGenerate => None,
        }
    }

    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::Configuration => None,
            WizardStep::AreasAndUpload => Some(WizardStep::Configuration),
            WizardStep::ReadyToGenerate => Some(WizardStep::AreasAndUpload),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.number())
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Validation error: {0}")]
    Validation(#[from] WizardValidationError),

    #[error("{0} is the last step")]
    LastStep(WizardStep),

    #[error("{0} is the first step")]
    FirstStep(WizardStep),

    #[error("A questionnaire is already being generated")]
    AlreadyGenerating,

    #[error("Generation is only available from {expected}, not {actual}")]
    NotReadyToGenerate {
        expected: WizardStep,
        actual: WizardStep,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Select at least one subject area")]
    NoAreasSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_next_and_previous() {
        assert_eq!(WizardStep::Configuration.next(), Some(WizardStep::AreasAndUpload));
        assert_eq!(WizardStep::ReadyToGenerate.next(), None);
        assert_eq!(WizardStep::Configuration.previous(), None);
        assert_eq!(
            WizardStep::ReadyToGenerate.previous(),
            Some(WizardStep::AreasAndUpload)
        );
    }

    #[test]
    fn test_error_display() {
        let err = WizardError::LastStep(WizardStep::ReadyToGenerate);
        assert_eq!(err.to_string(), "Ready to Generate (3) is the last step");
        let err: WizardError = WizardValidationError::MissingField("client").into();
        assert_eq!(err.to_string(), "Validation error: Missing required field: client");
    }
}
