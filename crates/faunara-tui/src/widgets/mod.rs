//! Custom widgets for the FAUNARA TUI

mod form_panel;
pub mod modal_dialog;
pub mod modal_overlay;
mod result_panel;
mod thumbnail;

pub use form_panel::FormPanel;
pub use modal_dialog::ModalDialog;
pub use result_panel::ResultView;
pub use thumbnail::ThumbnailView;

use unicode_width::UnicodeWidthStr;

/// Rows `text` occupies when wrapped at `width` columns (at least one)
pub(crate) fn text_rows(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let columns = UnicodeWidthStr::width(text).max(1);
    let rows = columns.div_ceil(usize::from(width));
    u16::try_from(rows).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_rows() {
        assert_eq!(text_rows("", 10), 1);
        assert_eq!(text_rows("abcdefghij", 10), 1);
        assert_eq!(text_rows("abcdefghijk", 10), 2);
        assert_eq!(text_rows("anything", 0), 1);
    }

    #[test]
    fn test_text_rows_counts_display_width() {
        // Each of these takes two columns
        assert_eq!(text_rows("🦊🦊🦊", 4), 2);
    }
}
