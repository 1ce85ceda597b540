//! Semantic style builders.

use faunara_app::results::Tone;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn label() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Focus ---
pub fn focused_field() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn focused_button() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::FOCUS_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn button() -> Style {
    Style::default().fg(palette::ACCENT)
}

// --- Result tones ---
pub fn tone(tone: Tone) -> Style {
    let color = match tone {
        Tone::Working => palette::STATUS_BLUE,
        Tone::Success => palette::STATUS_GREEN,
        Tone::Warning => palette::STATUS_YELLOW,
        Tone::Error => palette::STATUS_RED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

// --- Blocks ---

/// Rounded panel block; the border lights up while the panel holds focus
pub fn panel_block(focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(palette::BORDER_ACTIVE)
    } else {
        Style::default().fg(palette::BORDER_DIM)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

pub fn modal_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::ACCENT))
        .style(Style::default().bg(palette::POPUP_BG))
}
