//! Local image previews
//!
//! The bytes that are uploaded are also decoded here, scaled down to a small
//! RGB thumbnail the TUI draws with half-block cells. Decoding happens in the
//! request task, never on the update loop.

use image::GenericImageView;

use faunara_core::prelude::*;
use faunara_core::ImageFile;

/// Largest thumbnail, in pixels. Two pixel rows share one terminal row.
pub const THUMBNAIL_MAX_WIDTH: u32 = 40;
pub const THUMBNAIL_MAX_HEIGHT: u32 = 24;

/// Scaled-down RGB pixels, row-major
#[derive(Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
}

impl std::fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Thumbnail({}x{})", self.width, self.height)
    }
}

impl Thumbnail {
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Pixel at (x, y), `None` outside the thumbnail
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get((y as usize) * (self.width as usize) + x as usize)
            .copied()
    }
}

/// What the modals show for an uploaded image
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePreview {
    pub file_name: String,
    pub size_label: String,
    /// Original dimensions, when the bytes decoded
    pub dimensions: Option<(u32, u32)>,
    pub thumbnail: Option<Thumbnail>,
}

impl ImagePreview {
    /// Build a preview, or `None` for an empty file.
    ///
    /// Bytes that are not a decodable image still produce a text-only
    /// preview with the name and size.
    pub fn from_image(image: &ImageFile) -> Option<Self> {
        if image.is_empty() {
            return None;
        }

        let (dimensions, thumbnail) = match image::load_from_memory(&image.bytes) {
            Ok(decoded) => {
                let dimensions = decoded.dimensions();
                let (w, h) = dimensions;
                let small = if w > THUMBNAIL_MAX_WIDTH || h > THUMBNAIL_MAX_HEIGHT {
                    decoded.thumbnail(THUMBNAIL_MAX_WIDTH, THUMBNAIL_MAX_HEIGHT)
                } else {
                    decoded
                }
                .to_rgb8();
                let (width, height) = small.dimensions();
                let pixels = small.pixels().map(|p| p.0).collect();
                (Some(dimensions), Thumbnail::from_rgb(width, height, pixels))
            }
            Err(e) => {
                debug!("Could not decode {} for preview: {}", image.file_name, e);
                (None, None)
            }
        };

        Some(Self {
            file_name: image.file_name.clone(),
            size_label: image.size_label(),
            dimensions,
            thumbnail,
        })
    }

    /// `"fox.png · 640×480 · 52.1 KB"`
    pub fn caption(&self) -> String {
        match self.dimensions {
            Some((w, h)) => format!("{} · {}×{} · {}", self.file_name, w, h, self.size_label),
            None => format!("{} · {}", self.file_name, self.size_label),
        }
    }
}
