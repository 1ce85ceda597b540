//! Screen layout and mouse hit testing
//!
//! The three forms stack top to bottom on normal terminals and sit side by
//! side once the terminal is wide enough.

use faunara_app::form::FormId;
use faunara_app::message::Message;
use faunara_app::modal::DismissTrigger;
use faunara_app::state::AppState;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::widgets::{FormPanel, ModalDialog};

/// Terminal width at which the forms switch to columns
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 150;

pub const FORMS: [FormId; 3] = [FormId::ClassifyImage, FormId::GuessAttributes, FormId::Improve];

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title row
    pub header: Rect,

    /// One panel per form, in [`FORMS`] order
    pub forms: [Rect; 3],

    /// Key hints
    pub status: Rect,
}

pub fn create(area: Rect, state: &AppState) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let forms = if body.width >= WIDE_LAYOUT_MIN_WIDTH {
        Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(body)
    } else {
        // The improve form is the tallest; it takes whatever is left
        let image = FormPanel::height(FormId::ClassifyImage, state, body.width);
        let guess = FormPanel::height(FormId::GuessAttributes, state, body.width);
        Layout::vertical([
            Constraint::Length(image),
            Constraint::Length(guess),
            Constraint::Min(3),
        ])
        .areas(body)
    };

    ScreenAreas {
        header,
        forms,
        status,
    }
}

/// Resolve a left click against the topmost modal.
///
/// A click on `[ Close ]` closes it through the close button, a click
/// outside the dialog closes it through the overlay, and a click inside the
/// dialog does nothing. Without an open modal clicks are ignored.
pub fn click_to_message(state: &AppState, screen: Rect, column: u16, row: u16) -> Option<Message> {
    let modal = state.top_modal()?;
    let body = state.modal(modal).body()?;
    let dialog = ModalDialog::area(body, screen);
    let position = Position::new(column, row);

    let trigger = if ModalDialog::close_button_area(dialog).contains(position) {
        DismissTrigger::CloseButton
    } else if dialog.contains(position) {
        return None;
    } else {
        DismissTrigger::Overlay
    };

    Some(Message::DismissModal { modal, trigger })
}
