//! Result region under a form

use faunara_app::results::{ResultPanel, Tone};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::text_rows;
use crate::theme::styles;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct ResultView<'a> {
    panel: &'a ResultPanel,
    spinner_frame: usize,
}

impl<'a> ResultView<'a> {
    pub fn new(panel: &'a ResultPanel) -> Self {
        Self {
            panel,
            spinner_frame: 0,
        }
    }

    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    /// Rows the panel needs at `width`, wrapping included
    pub fn height(panel: &ResultPanel, width: u16) -> u16 {
        let body: u16 = panel
            .lines
            .iter()
            .map(|line| text_rows(&line_text(line.label, &line.text), width))
            .sum();
        1 + body
    }

    fn title(&self) -> Line<'a> {
        let style = styles::tone(self.panel.tone);
        let mut spans = Vec::new();
        if self.panel.tone == Tone::Working {
            let frame = SPINNER[self.spinner_frame % SPINNER.len()];
            spans.push(Span::styled(format!("{} ", frame), style));
        }
        spans.push(Span::styled(self.panel.title.as_str(), style));
        Line::from(spans)
    }
}

fn line_text(label: Option<&str>, text: &str) -> String {
    match label {
        Some(label) => format!("{}: {}", label, text),
        None => text.to_string(),
    }
}

impl Widget for ResultView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![self.title()];
        for line in &self.panel.lines {
            lines.push(match line.label {
                Some(label) => Line::from(vec![
                    Span::styled(format!("{}: ", label), styles::label()),
                    Span::styled(line.text.as_str(), styles::text_secondary()),
                ]),
                None => Line::styled(line.text.as_str(), styles::text_secondary()),
            });
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use faunara_app::results;

    #[test]
    fn test_renders_title_and_fields() {
        let panel = ResultPanel::new(Tone::Success, "Closest match")
            .field("Name", "Barn Owl")
            .field("Match score", "87%");
        let mut term = TestTerminal::with_size(40, 5);
        term.render_widget(ResultView::new(&panel), term.area());

        assert!(term.line_contains(0, "Closest match"));
        assert!(term.line_contains(1, "Name: Barn Owl"));
        assert!(term.line_contains(2, "Match score: 87%"));
    }

    #[test]
    fn test_working_panel_spins() {
        let panel = results::classifying();
        let mut term = TestTerminal::with_size(60, 3);

        term.render_widget(ResultView::new(&panel).spinner_frame(0), term.area());
        assert!(term.line_contains(0, "⠋ Classifying…"));

        term.render_widget(ResultView::new(&panel).spinner_frame(1), term.area());
        assert!(term.line_contains(0, "⠙ Classifying…"));
    }

    #[test]
    fn test_height_counts_wrapped_lines() {
        let panel = results::error("x".repeat(25));
        assert_eq!(ResultView::height(&panel, 40), 2);
        assert_eq!(ResultView::height(&panel, 10), 4);
    }
}
