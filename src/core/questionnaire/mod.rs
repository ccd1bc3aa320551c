//! Questionnaire model, generation, and plain-text rendering.

mod generator;
mod text;
mod types;

pub use generator::*;
pub use text::*;
pub use types::*;
