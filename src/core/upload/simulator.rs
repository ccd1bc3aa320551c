//! Simulated upload pipeline: validation, per-file progress timers, removal.

use std::sync::Arc;

use crate::config::UploadConfig;
use crate::core::events::SessionEmitter;

use super::ids::IdGenerator;
use super::timers::TimerRegistry;
use super::types::{validate_file, FileHandle, TickOutcome, UploadEntry, UploadError, UploadStatus};

/// Result of one [`UploadSimulator::submit`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReport {
    /// Ids of the entries created, in submission order.
    pub accepted: Vec<String>,
    /// One warning per rejected candidate.
    pub rejected: Vec<UploadError>,
}

pub struct UploadSimulator {
    config: UploadConfig,
    ids: Arc<dyn IdGenerator>,
    emitter: Arc<dyn SessionEmitter>,
    entries: Vec<UploadEntry>,
    accepted_files: Vec<FileHandle>,
    timers: TimerRegistry,
}

impl UploadSimulator {
    pub fn new(
        config: UploadConfig,
        ids: Arc<dyn IdGenerator>,
        emitter: Arc<dyn SessionEmitter>,
    ) -> Self {
        Self {
            config,
            ids,
            emitter,
            entries: Vec::new(),
            accepted_files: Vec::new(),
            timers: TimerRegistry::new(),
        }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Validate candidates and start a progress timer for each accepted one.
    ///
    /// Rejected files are reported and otherwise ignored; they never reach
    /// the entry list or the accepted-file list.
    pub fn submit(&mut self, candidates: Vec<FileHandle>) -> SubmitReport {
        let mut report = SubmitReport::default();

        for file in candidates {
            if let Err(err) = validate_file(&file, &self.config) {
                log::info!("Rejected upload candidate: {err}");
                report.rejected.push(err);
                continue;
            }

            let id = self.ids.next_id();
            log::debug!("Accepted {} ({} bytes) as {id}", file.name, file.size);
            self.timers
                .start(&id, self.config.tick_interval(), self.emitter.clone());
            self.accepted_files.push(file.clone());
            self.entries.push(UploadEntry::new(id.clone(), file));
            report.accepted.push(id);
        }

        report
    }

    /// Apply one progress tick. Returns the entry's status afterwards, or
    /// `None` if the entry no longer exists (its timer is stopped then).
    pub fn apply_tick(&mut self, id: &str) -> Option<UploadStatus> {
        let step = self.config.progress_step;
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            if self.timers.cancel(id) {
                log::debug!("Stopped orphaned upload timer {id}");
            }
            return None;
        };

        if entry.advance(step) == TickOutcome::Finished {
            self.timers.cancel(id);
            log::info!("Upload {} ({}) complete", entry.file.name, entry.id);
        }
        Some(entry.status)
    }

    /// Remove an entry and every accepted file sharing its name.
    ///
    /// Safe while the entry's timer is still running; later ticks for the
    /// id are ignored.
    pub fn remove(&mut self, id: &str) -> Option<UploadEntry> {
        self.timers.cancel(id);
        let pos = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(pos);
        self.accepted_files.retain(|f| f.name != removed.file.name);
        log::debug!("Removed upload {} ({})", removed.file.name, removed.id);
        Some(removed)
    }

    /// Stop every running timer. Entries keep their last state.
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
    }

    pub fn entries(&self) -> &[UploadEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&UploadEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn accepted_files(&self) -> &[FileHandle] {
        &self.accepted_files
    }

    pub fn is_ticking(&self, id: &str) -> bool {
        self.timers.is_running(id)
    }

    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }
}
