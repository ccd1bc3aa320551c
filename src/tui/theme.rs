//! Centralized color theme for the discovery wizard TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::core::upload::StatusTone;

// ── Primary palette ─────────────────────────────────────────────────────────

/// Indigo: primary accent and focused borders.
pub const PRIMARY: Color = Color::Rgb(0x63, 0x66, 0xF1);
/// Light indigo: highlights and key hints.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x81, 0x8C, 0xF8);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Violet: calls to action, selected items.
pub const ACCENT: Color = Color::Rgb(0xA7, 0x8B, 0xFA);

// ── Backgrounds ─────────────────────────────────────────────────────────────

pub const BG_BASE: Color = Color::Rgb(0x0F, 0x11, 0x1A);

// ── Text ────────────────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
/// Muted text: secondary labels, borders.
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
/// Dim text: disabled items, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

/// Color for an upload status tone.
pub fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Primary => PRIMARY_LIGHT,
        StatusTone::Warning => WARNING,
        StatusTone::Success => SUCCESS,
        StatusTone::Destructive => ERROR,
    }
}

/// Leading color of a topic area's gradient tag (`from-blue-500 to-...`).
pub fn gradient_color(tag: &str) -> Color {
    let from = tag
        .split_whitespace()
        .find_map(|part| part.strip_prefix("from-"))
        .and_then(|c| c.split('-').next())
        .unwrap_or_default();
    match from {
        "blue" => Color::Rgb(0x3B, 0x82, 0xF6),
        "green" => Color::Rgb(0x22, 0xC5, 0x5E),
        "purple" => Color::Rgb(0xA8, 0x55, 0xF7),
        "orange" => Color::Rgb(0xF9, 0x73, 0x16),
        "red" => Color::Rgb(0xEF, 0x44, 0x44),
        "yellow" => Color::Rgb(0xEA, 0xB3, 0x08),
        "gray" => Color::Rgb(0x6B, 0x72, 0x80),
        "teal" => Color::Rgb(0x14, 0xB8, 0xA6),
        _ => ACCENT,
    }
}

// ── Style helpers ───────────────────────────────────────────────────────────

/// Accent bold text (titles, active items).
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Enabled call-to-action button.
pub fn button() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn button_disabled() -> Style {
    Style::default().fg(TEXT_MUTED).bg(BG_BASE)
}

// ── Block builders ──────────────────────────────────────────────────────────

pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}

/// Focused or default block depending on `focused`.
pub fn block(title: &str, focused: bool) -> Block<'_> {
    if focused {
        block_focused(title)
    } else {
        block_default(title)
    }
}
