//! Color palette for the FAUNARA terminal theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Panels without focus
pub const BORDER_ACTIVE: Color = Color::Cyan; // Panel holding the focused field

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Result tones ---
pub const STATUS_GREEN: Color = Color::Green; // Success
pub const STATUS_RED: Color = Color::Red; // Error
pub const STATUS_YELLOW: Color = Color::Yellow; // Warning
pub const STATUS_BLUE: Color = Color::Blue; // Working

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);
pub const FOCUS_BG: Color = Color::Rgb(37, 99, 235); // Focused button background
