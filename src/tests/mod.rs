//! Crate-level test suites.
//!
//! - `common`: shared fixtures (sessions, projects, scripted collaborators)
//! - `property`: proptest invariants for upload validation, progress, and
//!   questionnaire text
//! - `integration`: end-to-end session flows driven on paused tokio time

mod common;
mod integration;
mod property;
