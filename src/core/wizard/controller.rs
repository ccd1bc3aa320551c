//! Wizard controller: step gating plus the delayed generation task.

use std::sync::Arc;
use std::time::Duration;

use crate::config::GenerationConfig;
use crate::core::events::{SessionEmitter, SessionEvent};
use crate::core::project::ProjectConfiguration;
use crate::core::questionnaire::{
    GenerationError, GenerationRequest, Questionnaire, QuestionnaireGenerator,
};
use crate::core::task::DelayedTask;

use super::types::{WizardError, WizardStep, WizardValidationError};

/// How a generation completion was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The questionnaire replaced any previous one.
    Produced,
    /// The generator reported an error; nothing was replaced.
    Failed(GenerationError),
    /// The ticket did not belong to the pending generation (cancelled or
    /// superseded); the result was discarded.
    Stale,
}

pub struct WizardController {
    project: ProjectConfiguration,
    step: WizardStep,
    questionnaire: Option<Questionnaire>,
    generation: Option<DelayedTask>,
    next_ticket: u64,
    delay: Duration,
    generator: Arc<dyn QuestionnaireGenerator>,
    emitter: Arc<dyn SessionEmitter>,
}

impl WizardController {
    pub fn new(
        config: &GenerationConfig,
        generator: Arc<dyn QuestionnaireGenerator>,
        emitter: Arc<dyn SessionEmitter>,
    ) -> Self {
        Self {
            project: ProjectConfiguration::new(),
            step: WizardStep::Configuration,
            questionnaire: None,
            generation: None,
            next_ticket: 0,
            delay: config.delay(),
            generator,
            emitter,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn project(&self) -> &ProjectConfiguration {
        &self.project
    }

    pub fn project_mut(&mut self) -> &mut ProjectConfiguration {
        &mut self.project
    }

    pub fn questionnaire(&self) -> Option<&Questionnaire> {
        self.questionnaire.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.generation.is_some()
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Why the current step cannot move forward, if it can't.
    pub fn check_advance(&self) -> Result<WizardStep, WizardError> {
        let next = self.step.next().ok_or(WizardError::LastStep(self.step))?;
        match self.step {
            WizardStep::Configuration => {
                if self.project.name.trim().is_empty() {
                    return Err(WizardValidationError::MissingField("name").into());
                }
                if self.project.client.trim().is_empty() {
                    return Err(WizardValidationError::MissingField("client").into());
                }
            }
            WizardStep::AreasAndUpload => {
                if !self.project.has_areas() {
                    return Err(WizardValidationError::NoAreasSelected.into());
                }
            }
            WizardStep::ReadyToGenerate => {}
        }
        Ok(next)
    }

    pub fn can_advance(&self) -> bool {
        self.check_advance().is_ok()
    }

    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let next = self.check_advance()?;
        log::debug!("Wizard advancing {} -> {}", self.step, next);
        self.step = next;
        Ok(next)
    }

    /// Step back. Always allowed except from the first step, and never
    /// clears entered data or a pending generation.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let previous = self.step.previous().ok_or(WizardError::FirstStep(self.step))?;
        log::debug!("Wizard going back {} -> {}", self.step, previous);
        self.step = previous;
        Ok(previous)
    }

    // ── Generation ──────────────────────────────────────────────────────

    /// Schedule generation from a snapshot of the current configuration.
    ///
    /// Returns the ticket that the matching
    /// [`SessionEvent::GenerationFinished`] will carry.
    pub fn start_generation(&mut self, documents: Vec<String>) -> Result<u64, WizardError> {
        if self.step != WizardStep::ReadyToGenerate {
            return Err(WizardError::NotReadyToGenerate {
                expected: WizardStep::ReadyToGenerate,
                actual: self.step,
            });
        }
        if self.is_generating() {
            return Err(WizardError::AlreadyGenerating);
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let request = GenerationRequest {
            project: self.project.clone(),
            documents,
        };
        let generator = self.generator.clone();

        log::info!(
            "Generating questionnaire for \"{}\" (ticket {ticket}, {} areas, {} documents)",
            request.project.name,
            request.project.selected_areas.len(),
            request.documents.len()
        );
        self.generation = Some(DelayedTask::spawn(
            ticket,
            self.delay,
            self.emitter.clone(),
            move || SessionEvent::GenerationFinished {
                ticket,
                result: generator.generate(&request),
            },
        ));
        Ok(ticket)
    }

    /// Abort the pending generation. Returns whether one was pending.
    pub fn cancel_generation(&mut self) -> bool {
        match self.generation.take() {
            Some(task) => {
                task.cancel();
                log::info!("Cancelled generation ticket {}", task.ticket());
                true
            }
            None => false,
        }
    }

    /// Apply a finished generation.
    pub fn finish_generation(
        &mut self,
        ticket: u64,
        result: Result<Questionnaire, GenerationError>,
    ) -> GenerationOutcome {
        let is_current = self
            .generation
            .as_ref()
            .is_some_and(|task| task.ticket() == ticket);
        if !is_current {
            log::debug!("Discarding stale generation result (ticket {ticket})");
            return GenerationOutcome::Stale;
        }
        self.generation = None;

        match result {
            Ok(questionnaire) => {
                self.questionnaire = Some(questionnaire);
                GenerationOutcome::Produced
            }
            Err(err) => {
                log::error!("Generation ticket {ticket} failed: {err}");
                GenerationOutcome::Failed(err)
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.cancel_generation();
    }
}
