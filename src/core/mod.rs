pub mod logging;

// Project configuration and the static topic catalog
pub mod project;
pub mod topics;

// Wizard flow and its background work
pub mod events;
pub mod task;
pub mod upload;
pub mod wizard;

// Questionnaire output
pub mod clipboard;
pub mod export;
pub mod questionnaire;

pub mod session;
