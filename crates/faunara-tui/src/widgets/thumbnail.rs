//! Half-block image thumbnail
//!
//! Each terminal cell shows two pixels: `▀` with the upper pixel as
//! foreground and the lower one as background.

use faunara_app::preview::Thumbnail;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

const UPPER_HALF: &str = "▀";

pub struct ThumbnailView<'a> {
    thumbnail: &'a Thumbnail,
}

impl<'a> ThumbnailView<'a> {
    pub fn new(thumbnail: &'a Thumbnail) -> Self {
        Self { thumbnail }
    }

    /// Terminal cells needed to show the whole thumbnail
    pub fn size(thumbnail: &Thumbnail) -> (u16, u16) {
        let width = u16::try_from(thumbnail.width).unwrap_or(u16::MAX);
        let rows = u16::try_from(thumbnail.height.div_ceil(2)).unwrap_or(u16::MAX);
        (width, rows)
    }
}

fn rgb(pixel: [u8; 3]) -> Color {
    Color::Rgb(pixel[0], pixel[1], pixel[2])
}

impl Widget for ThumbnailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, rows) = Self::size(self.thumbnail);
        for row in 0..rows.min(area.height) {
            for col in 0..width.min(area.width) {
                let x = u32::from(col);
                let top = self.thumbnail.pixel(x, u32::from(row) * 2);
                let bottom = self.thumbnail.pixel(x, u32::from(row) * 2 + 1);

                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                match (top, bottom) {
                    (Some(top), Some(bottom)) => {
                        cell.set_symbol(UPPER_HALF).set_fg(rgb(top)).set_bg(rgb(bottom));
                    }
                    // Odd height: the last row has no lower pixel
                    (Some(top), None) => {
                        cell.set_symbol(UPPER_HALF).set_fg(rgb(top));
                    }
                    _ => {}
                }
            }
        }
    }
}
