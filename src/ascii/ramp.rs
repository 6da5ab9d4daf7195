//! Intensity to character-ramp mapping.

/// Monospace glyphs are roughly twice as tall as wide; halving the row
/// count keeps ramp output from looking vertically stretched.
pub const GLYPH_ASPECT_CORRECTION: f64 = 0.5;

/// Number of text rows for a ramp render `width` characters wide.
///
/// `round(width * (src_height / src_width) * 0.5)`, never less than one.
pub fn ramp_height(src_width: u32, src_height: u32, width: u32) -> u32 {
    let aspect = src_height as f64 / src_width as f64;
    let rows = (width as f64 * aspect * GLYPH_ASPECT_CORRECTION).round() as u32;
    rows.max(1)
}

/// Pick the ramp character for one intensity.
///
/// The index is flipped so black lands on the last character and white on
/// the first; ramps read light to dense. `invert` flips it back. An empty
/// ramp yields a space.
#[inline]
pub fn map_intensity(gray: u8, ramp: &[char], invert: bool) -> char {
    let Some(last) = ramp.len().checked_sub(1) else {
        return ' ';
    };
    let idx = gray as usize * last / 255;
    let idx = last - idx;
    let idx = if invert { last - idx } else { idx };
    ramp[idx]
}

/// Render grayscale intensities as ramp text.
///
/// `gray` holds `width * height` values, row-major. Each row ends with `\n`.
/// An empty ramp renders spaces.
pub fn render(gray: &[u8], width: u32, height: u32, ramp: &[char], invert: bool) -> String {
    let width = width as usize;
    let height = height as usize;
    let mut out = String::with_capacity((width + 1) * height);

    for row in gray.chunks(width.max(1)).take(height) {
        for &g in row {
            out.push(map_intensity(g, ramp, invert));
        }
        out.push('\n');
    }

    out
}
