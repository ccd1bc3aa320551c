//! Discovery session: the single-page composition of wizard, uploads and
//! exports.
//!
//! Background work (upload ticks, generation, exports) reports back through
//! [`SessionEvent`]s. [`DiscoverySession::apply`] is the only place those
//! results mutate state, so the owner decides when they land.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::core::clipboard::{Clipboard, ClipboardError};
use crate::core::events::{SessionEmitter, SessionEvent};
use crate::core::export::{ExportError, ExportFormat, Exporter};
use crate::core::questionnaire::{to_plain_text, GenerationError, QuestionnaireGenerator};
use crate::core::task::DelayedTask;
use crate::core::upload::{FileHandle, IdGenerator, SubmitReport, UploadSimulator, UploadStatus};
use crate::core::wizard::{GenerationOutcome, WizardController, WizardError};

/// What applying a [`SessionEvent`] changed, for the UI to announce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// An upload entry moved; `status` is its state after the tick.
    UploadProgress { id: String, status: UploadStatus },
    QuestionnaireReady { title: String, total_questions: usize },
    GenerationFailed(GenerationError),
    ExportCompleted { format: ExportFormat, bytes: usize },
    ExportFailed { format: ExportFormat, error: ExportError },
    /// The event referred to something that no longer exists.
    Ignored,
}

struct PendingExport {
    format: ExportFormat,
    task: DelayedTask,
}

pub struct DiscoverySession {
    wizard: WizardController,
    uploads: UploadSimulator,
    exporter: Arc<dyn Exporter>,
    emitter: Arc<dyn SessionEmitter>,
    export_delay: Duration,
    exports: HashMap<u64, PendingExport>,
    next_export: u64,
}

impl DiscoverySession {
    pub fn new(
        config: &AppConfig,
        generator: Arc<dyn QuestionnaireGenerator>,
        exporter: Arc<dyn Exporter>,
        ids: Arc<dyn IdGenerator>,
        emitter: Arc<dyn SessionEmitter>,
    ) -> Self {
        Self {
            wizard: WizardController::new(&config.generation, generator, emitter.clone()),
            uploads: UploadSimulator::new(config.upload.clone(), ids, emitter.clone()),
            exporter,
            emitter,
            export_delay: config.export.delay(),
            exports: HashMap::new(),
            next_export: 0,
        }
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut WizardController {
        &mut self.wizard
    }

    pub fn uploads(&self) -> &UploadSimulator {
        &self.uploads
    }

    pub fn submit_files(&mut self, files: Vec<FileHandle>) -> SubmitReport {
        self.uploads.submit(files)
    }

    pub fn remove_upload(&mut self, id: &str) -> bool {
        self.uploads.remove(id).is_some()
    }

    /// Start generation with the names of the currently accepted documents.
    pub fn start_generation(&mut self) -> Result<u64, WizardError> {
        let documents = self
            .uploads
            .accepted_files()
            .iter()
            .map(|f| f.name.clone())
            .collect();
        self.wizard.start_generation(documents)
    }

    pub fn cancel_generation(&mut self) -> bool {
        self.wizard.cancel_generation()
    }

    // ── Export & copy ───────────────────────────────────────────────────

    /// Schedule an export of the current questionnaire. Completion arrives
    /// as [`SessionEvent::ExportFinished`] after the export delay.
    pub fn export(&mut self, format: ExportFormat) -> Result<u64, ExportError> {
        let questionnaire = self
            .wizard
            .questionnaire()
            .cloned()
            .ok_or(ExportError::NothingToExport)?;
        let project = self.wizard.project().clone();
        let exporter = self.exporter.clone();

        self.next_export += 1;
        let ticket = self.next_export;
        log::info!("Export {ticket} started ({format})");

        let task = DelayedTask::spawn(ticket, self.export_delay, self.emitter.clone(), move || {
            SessionEvent::ExportFinished {
                ticket,
                format,
                result: exporter
                    .export(format, &questionnaire, &project)
                    .map(|bytes| bytes.len()),
            }
        });
        self.exports.insert(ticket, PendingExport { format, task });
        Ok(ticket)
    }

    pub fn pending_exports(&self) -> usize {
        self.exports.len()
    }

    /// Plain-text rendering of the current questionnaire, if any.
    pub fn plain_text(&self) -> Option<String> {
        self.wizard
            .questionnaire()
            .map(|q| to_plain_text(q, self.wizard.project()))
    }

    pub fn copy_to_clipboard(&self, clipboard: &dyn Clipboard) -> Result<(), ClipboardError> {
        let text = self.plain_text().ok_or(ClipboardError::Empty)?;
        clipboard.write_text(&text)?;
        log::info!("Copied questionnaire ({} bytes) to clipboard", text.len());
        Ok(())
    }

    // ── Event application ───────────────────────────────────────────────

    pub fn apply(&mut self, event: SessionEvent) -> SessionUpdate {
        match event {
            SessionEvent::UploadTick { id } => match self.uploads.apply_tick(&id) {
                Some(status) => SessionUpdate::UploadProgress { id, status },
                None => SessionUpdate::Ignored,
            },
            SessionEvent::GenerationFinished { ticket, result } => {
                match self.wizard.finish_generation(ticket, result) {
                    GenerationOutcome::Produced => match self.wizard.questionnaire() {
                        Some(q) => SessionUpdate::QuestionnaireReady {
                            title: q.title.clone(),
                            total_questions: q.total_questions(),
                        },
                        None => SessionUpdate::Ignored,
                    },
                    GenerationOutcome::Failed(err) => SessionUpdate::GenerationFailed(err),
                    GenerationOutcome::Stale => SessionUpdate::Ignored,
                }
            }
            SessionEvent::ExportFinished {
                ticket,
                format,
                result,
            } => {
                if self.exports.remove(&ticket).is_none() {
                    return SessionUpdate::Ignored;
                }
                match result {
                    Ok(bytes) => {
                        log::info!("Export {ticket} complete ({format}, {bytes} bytes)");
                        SessionUpdate::ExportCompleted { format, bytes }
                    }
                    Err(error) => {
                        log::error!("Export {ticket} failed ({format}): {error}");
                        SessionUpdate::ExportFailed { format, error }
                    }
                }
            }
        }
    }

    /// Cancel every timer and pending task.
    pub fn shutdown(&mut self) {
        self.uploads.shutdown();
        self.wizard.shutdown();
        for (ticket, pending) in self.exports.drain() {
            pending.task.cancel();
            log::debug!("Cancelled export {ticket} ({})", pending.format);
        }
    }
}

impl Drop for DiscoverySession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
