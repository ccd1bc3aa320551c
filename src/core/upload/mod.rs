//! Simulated document upload.
//!
//! Candidate files are validated by extension and size. Each accepted file
//! gets an [`UploadEntry`] and an independent repeating timer that walks it
//! through `Uploading -> Processing -> Complete`. Timer ticks arrive as
//! session events and are applied by [`UploadSimulator::apply_tick`].

mod ids;
mod simulator;
mod timers;
mod types;

pub use ids::*;
pub use simulator::*;
pub use timers::*;
pub use types::*;
