//! Panels rendered inside the root layout.

pub mod areas;
pub mod configuration;
pub mod generate;
pub mod preview;
pub mod upload;
