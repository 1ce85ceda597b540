//! Key event handlers

use crate::form::FieldKind;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::modal::{DismissTrigger, ModalKind};
use crate::state::AppState;

/// Convert key events to messages.
///
/// Esc and Ctrl+C are global. Everything else goes to the topmost modal when
/// one is open, otherwise to the focused form field.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Esc => return Some(Message::DismissAll),
        _ => {}
    }

    match state.top_modal() {
        Some(modal) => handle_key_modal(modal, key),
        None => handle_key_form(state, key),
    }
}

/// Only the close button is focusable inside a modal
fn handle_key_modal(modal: ModalKind, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::DismissModal {
            modal,
            trigger: DismissTrigger::CloseButton,
        }),
        _ => None,
    }
}

fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let field = state.focus;

    match key {
        InputKey::Tab | InputKey::Down => return Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::FocusPrevious),
        InputKey::Enter => {
            return Some(match field.kind() {
                FieldKind::Toggle => Message::ToggleAttributes,
                _ => Message::Submit(field.form()),
            })
        }
        _ => {}
    }

    match field.kind() {
        FieldKind::Text => match key {
            InputKey::Char(c) => Some(Message::InsertChar(c)),
            InputKey::Backspace => Some(Message::DeleteChar),
            InputKey::CharCtrl('u') => Some(Message::ClearField),
            _ => None,
        },
        FieldKind::Select => match key {
            InputKey::Left => Some(Message::CycleOption { forward: false }),
            InputKey::Right | InputKey::Char(' ') => Some(Message::CycleOption { forward: true }),
            InputKey::Backspace | InputKey::Delete => Some(Message::ClearField),
            _ => None,
        },
        FieldKind::Button => match key {
            InputKey::Char(' ') => Some(Message::Submit(field.form())),
            _ => None,
        },
        FieldKind::Toggle => match key {
            InputKey::Char(' ') => Some(Message::ToggleAttributes),
            _ => None,
        },
    }
}
