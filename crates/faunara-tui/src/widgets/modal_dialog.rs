//! Modal dialog: image preview, labelled fields, optional hint and a
//! `[ Close ]` button
//!
//! Geometry is a pure function of the body and the screen so that mouse hit
//! testing and rendering always agree.

use faunara_app::modal::{ModalBody, PreviewSlot};
use faunara_app::results::Tone;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use super::{text_rows, ThumbnailView};
use crate::theme::styles;

const MODAL_WIDTH: u16 = 64;
const LABEL_WIDTH: u16 = 18;
pub const CLOSE_LABEL: &str = "[ Close ]";

/// Renders over the whole screen: dims it, then draws the centered dialog
pub struct ModalDialog<'a> {
    body: &'a ModalBody,
}

impl<'a> ModalDialog<'a> {
    pub fn new(body: &'a ModalBody) -> Self {
        Self { body }
    }

    /// Where the dialog sits on `screen`
    pub fn area(body: &ModalBody, screen: Rect) -> Rect {
        let width = MODAL_WIDTH.min(screen.width.saturating_sub(2));
        let inner_width = width.saturating_sub(2);
        let height = content_rows(body, inner_width).saturating_add(2);
        centered_rect(width, height, screen)
    }

    /// Where the close button sits inside `dialog`
    pub fn close_button_area(dialog: Rect) -> Rect {
        let inner = inner_of(dialog);
        let width = (CLOSE_LABEL.len() as u16).min(inner.width);
        Rect::new(
            inner.x + (inner.width - width) / 2,
            inner.bottom().saturating_sub(1),
            width,
            inner.height.min(1),
        )
    }
}

fn inner_of(dialog: Rect) -> Rect {
    Rect::new(
        dialog.x.saturating_add(1),
        dialog.y.saturating_add(1),
        dialog.width.saturating_sub(2),
        dialog.height.saturating_sub(2),
    )
}

fn preview_rows(preview: &PreviewSlot) -> u16 {
    match preview {
        PreviewSlot::Image(image) => {
            let thumb = image
                .thumbnail
                .as_ref()
                .map(|t| ThumbnailView::size(t).1)
                .unwrap_or(0);
            thumb + 1
        }
        PreviewSlot::Placeholder(_) => 1,
    }
}

fn field_rows(value: &str, inner_width: u16) -> u16 {
    text_rows(value, inner_width.saturating_sub(LABEL_WIDTH))
}

fn hint_rows(body: &ModalBody, inner_width: u16) -> u16 {
    body.hint
        .map(|hint| text_rows(hint, inner_width).saturating_add(1))
        .unwrap_or(0)
}

/// Preview, blank, fields, hint, blank, button
fn content_rows(body: &ModalBody, inner_width: u16) -> u16 {
    body.fields
        .iter()
        .map(|f| field_rows(&f.value, inner_width))
        .fold(preview_rows(&body.preview) + 1, u16::saturating_add)
        .saturating_add(hint_rows(body, inner_width))
        .saturating_add(2)
}

impl Widget for ModalDialog<'_> {
    fn render(self, screen: Rect, buf: &mut Buffer) {
        dim_background(buf, screen);

        let dialog = Self::area(self.body, screen);
        clear_area(buf, dialog);
        render_shadow(buf, dialog);

        let block = styles::modal_block()
            .title(Line::styled(format!(" {} ", self.body.title), styles::label()))
            .title_alignment(Alignment::Center);
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let mut y = inner.y;
        let bottom = inner.bottom();
        let mut next_rows = |rows: u16| {
            let area = Rect::new(inner.x, y, inner.width, rows.min(bottom.saturating_sub(y)));
            y = y.saturating_add(rows).min(bottom);
            area
        };

        // Preview
        match &self.body.preview {
            PreviewSlot::Image(image) => {
                if let Some(thumb) = &image.thumbnail {
                    let (width, rows) = ThumbnailView::size(thumb);
                    let area = next_rows(rows);
                    let x = area.x + area.width.saturating_sub(width) / 2;
                    ThumbnailView::new(thumb).render(Rect { x, ..area }, buf);
                }
                Paragraph::new(Line::styled(image.caption(), styles::text_muted()))
                    .alignment(Alignment::Center)
                    .render(next_rows(1), buf);
            }
            PreviewSlot::Placeholder(text) => {
                Paragraph::new(Line::styled(
                    *text,
                    styles::text_muted().add_modifier(Modifier::ITALIC),
                ))
                .alignment(Alignment::Center)
                .render(next_rows(1), buf);
            }
        }
        next_rows(1);

        // Fields
        for field in &self.body.fields {
            let area = next_rows(field_rows(&field.value, inner.width));
            let label_area = Rect {
                width: LABEL_WIDTH.min(area.width),
                ..area
            };
            let value_area = Rect {
                x: area.x + label_area.width,
                width: area.width - label_area.width,
                ..area
            };
            Paragraph::new(Span::styled(format!("{}:", field.label), styles::label()))
                .render(label_area, buf);
            Paragraph::new(Span::styled(field.value.as_str(), styles::text_primary()))
                .wrap(Wrap { trim: false })
                .render(value_area, buf);
        }

        // Hint
        if let Some(hint) = self.body.hint {
            next_rows(1);
            Paragraph::new(Line::styled(hint, styles::tone(Tone::Warning)))
                .wrap(Wrap { trim: true })
                .render(next_rows(text_rows(hint, inner.width)), buf);
        }

        // Close button, always the last row
        Paragraph::new(Span::styled(CLOSE_LABEL, styles::focused_button()))
            .render(Self::close_button_area(dialog), buf);
    }
}
