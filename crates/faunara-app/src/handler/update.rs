//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{dispatch, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus and Field Editing
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus_previous();
            UpdateResult::none()
        }

        Message::InsertChar(c) => {
            state.forms.insert_char(state.focus, c);
            UpdateResult::none()
        }

        Message::DeleteChar => {
            state.forms.delete_char(state.focus);
            UpdateResult::none()
        }

        Message::ClearField => {
            state.forms.clear(state.focus);
            UpdateResult::none()
        }

        Message::CycleOption { forward } => {
            state.forms.cycle(state.focus, forward);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Forms
        // ─────────────────────────────────────────────────────────
        Message::Submit(form) => dispatch::submit(state, form),

        Message::ToggleAttributes => {
            state.toggle.toggle();
            state.normalize_focus();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Modals
        // ─────────────────────────────────────────────────────────
        Message::DismissModal { modal, trigger } => {
            state.close_modal(modal, trigger);
            UpdateResult::none()
        }

        Message::DismissAll => {
            state.dismiss_all();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Request Completions
        // ─────────────────────────────────────────────────────────
        Message::ImageClassified { preview, outcome } => {
            dispatch::image_classified(state, preview, outcome)
        }

        Message::AttributesClassified { outcome } => dispatch::attributes_classified(state, outcome),

        Message::ContributionSaved {
            record,
            preview,
            outcome,
        } => dispatch::contribution_saved(state, *record, preview, outcome),
    }
}
