/// Discovery Wizard - BSA discovery questionnaire tool (TUI edition)
///
/// Core library providing the three-step project wizard, simulated document
/// upload, questionnaire generation, export, and the terminal interface.

pub mod config;
pub mod core;
pub mod error;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
