//! Three-step discovery wizard.
//!
//! 1. Configuration - project name, client, type, timeline, context, AI toggle
//! 2. Areas and upload - topic areas, plus documents when AI analysis is on
//! 3. Ready to generate - summary and the generate trigger
//!
//! Forward moves are gated on the data each step requires; backward moves
//! are always allowed and keep everything entered so far.

mod controller;
mod types;

pub use controller::*;
pub use types::*;
