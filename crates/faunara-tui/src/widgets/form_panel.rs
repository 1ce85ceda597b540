//! One form with its fields and, once rendered, its result region

use faunara_app::form::{focus_order, FieldId, FieldKind, FormId};
use faunara_app::results::RegionId;
use faunara_app::state::{AppState, DispatchPhase};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::ResultView;
use crate::theme::styles;

const LABEL_WIDTH: usize = 16;
const CURSOR: &str = "▏";

/// Region that shows each form's outcome
pub fn region_of(form: FormId) -> RegionId {
    match form {
        FormId::ClassifyImage => RegionId::ImageResult,
        FormId::GuessAttributes => RegionId::AttributesResult,
        FormId::Improve => RegionId::ImproveResult,
    }
}

/// Visible fields of `form`, in focus order
pub fn visible_fields(state: &AppState, form: FormId) -> Vec<FieldId> {
    focus_order(state.toggle.is_visible())
        .into_iter()
        .filter(|field| field.form() == form)
        .collect()
}

pub struct FormPanel<'a> {
    form: FormId,
    state: &'a AppState,
}

impl<'a> FormPanel<'a> {
    pub fn new(form: FormId, state: &'a AppState) -> Self {
        Self { form, state }
    }

    /// Rows the panel wants at `width`, borders included
    pub fn height(form: FormId, state: &AppState, width: u16) -> u16 {
        let fields = visible_fields(state, form).len() as u16;
        let result = state
            .results
            .get(region_of(form))
            .map(|panel| 1 + ResultView::height(panel, width.saturating_sub(2)))
            .unwrap_or(0);
        2 + fields + result
    }

    fn field_line(&self, field: FieldId) -> Line<'a> {
        let focused = self.state.top_modal().is_none() && self.state.focus == field;
        let marker = if focused { "› " } else { "  " };
        let label_style = if focused {
            styles::focused_field()
        } else {
            styles::text_primary()
        };

        match field.kind() {
            FieldKind::Button => {
                let style = if focused {
                    styles::focused_button()
                } else {
                    styles::button()
                };
                let mut spans = vec![
                    Span::raw(marker),
                    Span::styled(format!("[ {} ]", field.label()), style),
                ];
                if self.state.dispatch.phase(self.form) == DispatchPhase::Pending {
                    spans.push(Span::styled("  sending…", styles::text_muted()));
                }
                Line::from(spans)
            }
            FieldKind::Toggle => {
                let toggle = self.state.toggle;
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
                    Span::styled(
                        format!("{} {}", toggle.label(), toggle.arrow()),
                        if focused {
                            styles::focused_field()
                        } else {
                            styles::button()
                        },
                    ),
                ])
            }
            FieldKind::Text => {
                let value = self.state.forms.value(field);
                let mut spans = vec![
                    Span::raw(marker),
                    Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
                ];
                if value.is_empty() && !focused {
                    spans.push(Span::styled(placeholder(field), styles::text_muted()));
                } else {
                    spans.push(Span::styled(value.to_string(), styles::text_secondary()));
                }
                if focused {
                    spans.push(Span::styled(CURSOR, styles::focused_field()));
                }
                Line::from(spans)
            }
            FieldKind::Select => {
                let value = self.state.forms.value(field);
                let shown = if value.is_empty() { "any" } else { value };
                let value_span = if focused {
                    Span::styled(format!("◀ {} ▶", shown), styles::focused_field())
                } else if value.is_empty() {
                    Span::styled(shown.to_string(), styles::text_muted())
                } else {
                    Span::styled(shown.to_string(), styles::text_secondary())
                };
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
                    value_span,
                ])
            }
        }
    }
}

fn placeholder(field: FieldId) -> &'static str {
    match field {
        FieldId::ImagePath | FieldId::ImproveImagePath => "path to an image (optional)",
        FieldId::GuessAttribute(_) | FieldId::ImproveAttribute(_) => "any",
        _ => "",
    }
}

impl Widget for FormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.top_modal().is_none() && self.state.focus.form() == self.form;
        let block = styles::panel_block(focused).title(Line::styled(
            format!(" {} ", self.form.title()),
            styles::label(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let fields = visible_fields(self.state, self.form);
        let [fields_area, result_area] = Layout::vertical([
            Constraint::Length(fields.len() as u16),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let lines: Vec<Line> = fields.iter().map(|f| self.field_line(*f)).collect();
        Paragraph::new(lines).render(fields_area, buf);

        if let Some(panel) = self.state.results.get(region_of(self.form)) {
            let result_area = Rect {
                y: result_area.y.saturating_add(1),
                height: result_area.height.saturating_sub(1),
                ..result_area
            };
            ResultView::new(panel)
                .spinner_frame(self.state.spinner_frame)
                .render(result_area, buf);
        }
    }
}
