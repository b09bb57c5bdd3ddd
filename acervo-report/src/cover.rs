//! Cover thumbnails for the report's first column.

use image::{DynamicImage, RgbImage};

/// Largest thumbnail edge kept in the PDF, in pixels. About 150 dpi at the
/// printed cover size.
const THUMB_MAX_WIDTH: u32 = 108;
const THUMB_MAX_HEIGHT: u32 = 150;

/// Placeholder for a book without a cover.
pub const NO_COVER_TEXT: &str = "S/ Capa";

/// Placeholder for a cover that could not be decoded.
pub const BAD_COVER_TEXT: &str = "Erro Imagem";

/// What to draw in a row's cover cell.
#[derive(Debug, Clone)]
pub enum CoverCell {
    Thumbnail(RgbImage),
    Placeholder(&'static str),
}

impl CoverCell {
    /// Decode cover bytes into a thumbnail, or pick the matching placeholder.
    pub fn from_bytes(bytes: Option<&[u8]>) -> CoverCell {
        let bytes = match bytes {
            Some(b) if !b.is_empty() => b,
            _ => return CoverCell::Placeholder(NO_COVER_TEXT),
        };
        match image::load_from_memory(bytes) {
            Ok(img) => {
                CoverCell::Thumbnail(flatten(img.thumbnail(THUMB_MAX_WIDTH, THUMB_MAX_HEIGHT)))
            }
            Err(e) => {
                log::warn!("Unreadable cover image ({} bytes): {}", bytes.len(), e);
                CoverCell::Placeholder(BAD_COVER_TEXT)
            }
        }
    }
}

/// Composite any alpha channel onto white and drop it.
fn flatten(img: DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }
    let rgba = img.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let blend = |c: u8| ((c as u32 * a as u32 + 255 * (255 - a as u32)) / 255) as u8;
        image::Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Fit `width`×`height` into `max_w`×`max_h`, preserving aspect ratio.
pub fn fit_within(width: u32, height: u32, max_w: f32, max_h: f32) -> (f32, f32) {
    if width == 0 || height == 0 {
        return (0.0, 0.0);
    }
    let scale = (max_w / width as f32).min(max_h / height as f32);
    (width as f32 * scale, height as f32 * scale)
}
