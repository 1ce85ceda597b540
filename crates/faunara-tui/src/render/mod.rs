//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use faunara_app::state::AppState;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::layout::{self, FORMS};
use crate::theme::{palette, styles};
use crate::widgets::{FormPanel, ModalDialog};

const FORM_HINTS: &str = "Tab/↓ next · Shift+Tab/↑ prev · Enter submit · ←/→ choose · Ctrl+C quit";
const MODAL_HINTS: &str = "Enter close · Esc close all · click outside to dismiss";

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state);

    let header = Line::from(vec![
        Span::styled(" FAUNARA ", styles::focused_button()),
        Span::styled(
            format!("  {}", state.settings.server.base_url),
            styles::text_muted(),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), areas.header);

    for (form, rect) in FORMS.iter().zip(areas.forms) {
        frame.render_widget(FormPanel::new(*form, state), rect);
    }

    let hints = if state.top_modal().is_some() {
        MODAL_HINTS
    } else {
        FORM_HINTS
    };
    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {}", hints), styles::text_muted())),
        areas.status,
    );

    // Bottom modal first so the topmost one dims everything under it
    for kind in state.open_modals() {
        if let Some(body) = state.modal(*kind).body() {
            frame.render_widget(ModalDialog::new(body), area);
        }
    }
}
