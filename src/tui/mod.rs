//! Terminal user interface (ratatui + crossterm, tokio event loop).

pub mod app;
pub mod events;
pub mod layout;
pub mod paste;
pub mod theme;
pub mod views;
pub mod widgets;
