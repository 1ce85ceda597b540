//! faunara-tui - Terminal UI for the FAUNARA client
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! terminal, polls key and mouse events, renders the three forms and the two
//! modals from [`faunara_app::AppState`], and drives the message loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
