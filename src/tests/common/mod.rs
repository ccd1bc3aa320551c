//! Common Test Utilities
//!
//! Shared fixtures and scripted collaborators used across test modules.

pub mod fixtures;

pub use fixtures::*;
