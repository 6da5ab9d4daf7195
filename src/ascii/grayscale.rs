//! RGB to grayscale conversion using ITU-R BT.601 luminance weights.

use super::pixels::{PixelBuffer, CHANNELS};

/// Luminance of one RGB triplet: `round(0.299*R + 0.587*G + 0.114*B)`.
///
/// Uses integer math with the coefficients scaled by 1000
/// (299 + 587 + 114 = 1000), so the result never exceeds 255.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let sum = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    ((sum + 500) / 1000) as u8
}

/// Convert an RGBA buffer to one grayscale byte per pixel.
///
/// Alpha is ignored.
pub fn to_grayscale(buffer: &PixelBuffer) -> Vec<u8> {
    let mut gray = Vec::with_capacity(buffer.pixel_count());
    for px in buffer.data().chunks_exact(CHANNELS) {
        gray.push(luminance(px[0], px[1], px[2]));
    }
    gray
}

/// Convert an RGBA buffer to grayscale, keeping it in RGBA layout.
///
/// R, G and B are all set to the luminance; alpha is preserved. This is the
/// input format the dithering stage expects.
pub fn to_grayscale_rgba(buffer: &PixelBuffer) -> PixelBuffer {
    let mut out = buffer.clone();
    for px in out.data_mut().chunks_exact_mut(CHANNELS) {
        let y = luminance(px[0], px[1], px[2]);
        px[0] = y;
        px[1] = y;
        px[2] = y;
    }
    out
}
