//! Glyph atlas previews
//!
//! Draws the glyph rectangles of a decoded font on top of its atlas image, so the mapping from
//! characters to atlas regions can be checked by eye.

use image::imageops::FilterType;
use image::{imageops, Pixel, Rgba, RgbaImage};
use log::debug;
use thiserror::Error;
use ttfont_config::PreviewSettings;
use ttfont_formats::{FontAsset, GlyphRect, UnicodeEntry};

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("font image has no decoded frames")]
    NoFrames,

    #[error("unicode entry #{index} does not exist, the font has {count} entries")]
    UnknownEntry { index: usize, count: usize },
}

/// Which glyphs to highlight
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Every glyph that a unicode entry maps to
    All,
    /// The glyph of the unicode entry at this index
    Entry(usize),
    /// Nothing, the plain atlas
    None,
}

impl Selection {
    pub fn from_settings(settings: &PreviewSettings, entry: Option<usize>) -> Self {
        match entry {
            Some(index) => Selection::Entry(index),
            None if settings.highlight_all => Selection::All,
            None => Selection::None,
        }
    }
}

/// Renders the first frame of the atlas with the selected glyphs highlighted
pub fn render_overlay(
    asset: &FontAsset,
    selection: Selection,
    settings: &PreviewSettings,
) -> Result<RgbaImage, PreviewError> {
    let frame = asset.image.first_frame().ok_or(PreviewError::NoFrames)?;
    let mut canvas = frame.to_rgba8();
    let color = Rgba(settings.overlay_color);

    match selection {
        Selection::None => {}
        Selection::All => {
            for entry in &asset.unicode {
                highlight_entry(&mut canvas, asset, entry, color);
            }
        }
        Selection::Entry(index) => {
            let entry = asset.unicode.get(index).ok_or(PreviewError::UnknownEntry {
                index,
                count: asset.unicode.len(),
            })?;
            highlight_entry(&mut canvas, asset, entry, color);
        }
    }

    Ok(canvas)
}

fn highlight_entry(canvas: &mut RgbaImage, asset: &FontAsset, entry: &UnicodeEntry, color: Rgba<u8>) {
    match asset.glyph_for_entry(entry) {
        Some(rect) => fill_rect(canvas, rect, color),
        None => debug!(
            "U+{:04X} maps to glyph {} but the font only has {} glyphs",
            entry.codepoint,
            entry.glyph_index,
            asset.glyphs.len()
        ),
    }
}

/// Blends `color` over every pixel touched by `rect`, clipped to the canvas
pub fn fill_rect(canvas: &mut RgbaImage, rect: &GlyphRect, color: Rgba<u8>) {
    let Some((x0, y0, x1, y1)) = pixel_bounds(rect, canvas.width(), canvas.height()) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            canvas.get_pixel_mut(x, y).blend(&color);
        }
    }
}

/// Pixel span `[x0, x1) x [y0, y1)` of a rectangle, `None` when nothing of it is visible
fn pixel_bounds(rect: &GlyphRect, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    let finite = [rect.x, rect.y, rect.width, rect.height]
        .iter()
        .all(|v| v.is_finite());
    if !finite || rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }

    let x0 = rect.x.floor().max(0.0);
    let y0 = rect.y.floor().max(0.0);
    let x1 = (rect.x + rect.width).ceil().min(width as f32);
    let y1 = (rect.y + rect.height).ceil().min(height as f32);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }

    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

/// Resizes the preview by `zoom` percent, never below one pixel in either direction
pub fn scale(image: &RgbaImage, zoom: u32) -> RgbaImage {
    if zoom == 100 {
        return image.clone();
    }

    let zoomed = |size: u32| (u64::from(size) * u64::from(zoom) / 100).clamp(1, u64::from(u32::MAX)) as u32;
    imageops::resize(image, zoomed(image.width()), zoomed(image.height()), FilterType::Triangle)
}
