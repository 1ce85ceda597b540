//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use faunara_app::message::Message;
use faunara_app::InputKey;
use faunara_core::prelude::*;
use std::time::Duration;

/// What one poll produced
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A message ready for the update function
    Message(Message),
    /// Left click at a screen cell; needs the current layout to resolve
    Click { column: u16, row: u16 },
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None,
    }
}

/// Translate one crossterm event
pub fn translate(event: Event) -> Option<TerminalEvent> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(|k| TerminalEvent::Message(Message::Key(k)))
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(TerminalEvent::Click {
                column: mouse.column,
                row: mouse.row,
            })
        }
        _ => None,
    }
}

/// Poll for terminal events, producing a tick when `tick_rate` passes quietly
pub fn poll(tick_rate: Duration) -> Result<Option<TerminalEvent>> {
    if event::poll(tick_rate)? {
        Ok(translate(event::read()?))
    } else {
        // Generate tick on timeout for the pending-panel spinner
        Ok(Some(TerminalEvent::Message(Message::Tick)))
    }
}
