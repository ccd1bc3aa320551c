//! Property-based tests
//!
//! Invariants checked with proptest across generated inputs rather than
//! hand-picked cases.
//!
//! ## Test Modules
//!
//! - `upload_props`: upload validation and progress
//!   - Unsupported extensions are rejected whatever the size
//!   - Supported files are accepted exactly when within the size limit
//!   - Progress never decreases and caps at 100 before processing starts
//!
//! - `questionnaire_props`: generated questionnaires and their text form
//!   - Question total equals the per-section sum
//!   - Topic sections follow catalog order, not selection order
//!   - Plain text numbers every question exactly once
//!
//! By default, proptest runs 256 cases per property. Override with
//! `PROPTEST_CASES`:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property
//! ```

mod questionnaire_props;
mod upload_props;
