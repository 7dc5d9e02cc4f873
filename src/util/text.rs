//! Module responsible for rendering text.

use image::{Pixel, RgbaImage};
use log::trace;
use rusttype::{point, Font, Scale};

use crate::model::Color;


/// Render a single line of text onto the canvas.
///
/// The line is anchored at its top-left corner: `(x, y)` is the top of the
/// line, and glyphs sit on the baseline `y + ascent`. There is no wrapping
/// or clipping logic; text that overruns the canvas is silently cut off at
/// the canvas bounds.
pub(crate) fn render_line(canvas: &mut RgbaImage,
                          s: &str,
                          (x, y): (i32, i32),
                          font: &Font<'_>, size: f32, color: Color) {
    trace!("render_line({:?}, at=({},{}), size={}, color={})", s, x, y, size, color);

    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let (width, height) = canvas.dimensions();

    let start = point(x as f32, y as f32 + v_metrics.ascent);
    for glyph in font.layout(s, scale, start) {
        if let Some(bbox) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = bbox.min.x + gx as i32;
                let py = bbox.min.y + gy as i32;
                if px < 0 || py < 0 {
                    return;
                }
                let (px, py) = (px as u32, py as u32);
                if px >= width || py >= height {
                    return;
                }
                let alpha = (coverage * 255.0) as u8;
                if alpha == 0 {
                    return;
                }
                canvas.get_pixel_mut(px, py).blend(&color.to_rgba(alpha));
            });
        }
    }
}

/// Measure the rendered pixel width of a line of text.
///
/// This is the width of the bounding box of the laid-out glyph run
/// (`max_x - min_x`), i.e. exactly what a subsequent `render_line` call
/// with the same font and size would put on the canvas.
pub(crate) fn line_width(font: &Font<'_>, size: f32, s: &str) -> u32 {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);

    let mut min_x: Option<i32> = None;
    let mut max_x: Option<i32> = None;
    for glyph in font.layout(s, scale, point(0.0, v_metrics.ascent)) {
        if let Some(bbox) = glyph.pixel_bounding_box() {
            min_x = Some(min_x.map_or(bbox.min.x, |m| m.min(bbox.min.x)));
            max_x = Some(max_x.map_or(bbox.max.x, |m| m.max(bbox.max.x)));
        }
    }
    match (min_x, max_x) {
        (Some(min), Some(max)) => (max - min).max(0) as u32,
        _ => 0,
    }
}
