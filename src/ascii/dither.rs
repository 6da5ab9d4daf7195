//! Floyd-Steinberg error-diffusion binarization.
//!
//! Turns a grayscale RGBA buffer into pure black and white while keeping
//! tonal gradation: each pixel's quantization error is pushed onto the
//! neighbors that have not been visited yet.
//!
//! ```text
//!          [*]  7/16
//!   3/16  5/16  1/16
//! ```
//!
//! The scan must stay single-pass and row-major. Neighbors below and to the
//! right are only finalized after all of their error has arrived, so any
//! other traversal order changes the output.

use super::pixels::{PixelBuffer, CHANNELS};

/// Default binarization threshold. Values strictly above it become white.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Diffusion targets as (dx, dy, weight out of 16).
const NEIGHBORS: [(isize, usize, f64); 4] = [(1, 0, 7.0), (-1, 1, 3.0), (0, 1, 5.0), (1, 1, 1.0)];

/// Dither a grayscale RGBA buffer, returning a new buffer.
///
/// The red channel is read as the pixel's intensity (R = G = B after
/// grayscale conversion). Output R, G and B are each 0 or 255; alpha is
/// copied unchanged.
pub fn dither(gray: &PixelBuffer, threshold: u8) -> PixelBuffer {
    let mut out = gray.clone();
    dither_in_place(&mut out, threshold);
    out
}

/// Dither a grayscale RGBA buffer in place.
pub fn dither_in_place(buffer: &mut PixelBuffer, threshold: u8) {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let data = buffer.data_mut();

    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) * CHANNELS;
            let old = data[idx];
            let new = if old > threshold { 255 } else { 0 };
            data[idx..idx + 3].fill(new);

            let error = old as f64 - new as f64;
            if error == 0.0 {
                continue;
            }

            for &(dx, dy, weight) in &NEIGHBORS {
                let nx = x as isize + dx;
                let ny = y + dy;
                if nx < 0 || nx as usize >= width || ny >= height {
                    continue;
                }
                let n = (ny * width + nx as usize) * CHANNELS;
                let share = error * weight / 16.0;
                for c in 0..3 {
                    data[n + c] = add_clamped(data[n + c], share);
                }
            }
        }
    }
}

/// Add a diffused share to a channel, storing it back as a byte.
///
/// The sum is clamped to [0, 255] and rounded half-to-even, matching how a
/// clamped byte array stores fractional writes.
#[inline]
fn add_clamped(value: u8, share: f64) -> u8 {
    (value as f64 + share).clamp(0.0, 255.0).round_ties_even() as u8
}
