//! Byte-budget fitting for braille output.
//!
//! Some consumers reject text at or above 1000 bytes. Every braille code
//! point is 3 bytes of UTF-8, so the budget translates to a character cap.
//! Fitting happens in two passes that share the same budget:
//!
//! 1. [`fit_width`] narrows the requested width before rendering.
//! 2. [`trim_rows`] drops trailing rows of the rendered text. This is a
//!    fallback for rounding edge cases, not the primary mechanism.

use super::braille::{rows_for_height, CELL_WIDTH};

/// Largest accepted output size in bytes (strictly under 1000).
pub const MAX_OUTPUT_BYTES: usize = 999;

/// UTF-8 size of any character in the braille block.
pub const BYTES_PER_BRAILLE_CHAR: usize = 3;

/// Character cap implied by a byte budget.
pub fn max_chars(max_bytes: usize) -> usize {
    max_bytes / BYTES_PER_BRAILLE_CHAR
}

/// Pixel size a braille render `char_width` characters wide resizes to.
///
/// Width is two dots per character; height keeps the source aspect ratio
/// and is at least one pixel.
pub fn braille_pixel_size(src_width: u32, src_height: u32, char_width: u32) -> (u32, u32) {
    let aspect = src_height as f64 / src_width as f64;
    let pixel_width = char_width.saturating_mul(CELL_WIDTH);
    let pixel_height = (pixel_width as f64 * aspect).round() as u32;
    (pixel_width, pixel_height.max(1))
}

/// Number of braille characters a render `char_width` wide will emit.
pub fn braille_char_count(src_width: u32, src_height: u32, char_width: u32) -> usize {
    let (_, pixel_height) = braille_pixel_size(src_width, src_height, char_width);
    char_width as usize * rows_for_height(pixel_height) as usize
}

/// Narrow `requested` until the braille output fits in `max_bytes`.
///
/// Steps down one column at a time and stops at 1. Rounding of the row
/// count means the character total is not strictly monotonic in the width,
/// so rows are re-derived on every step instead of bisecting. Every render
/// has at least one row, so the search starts no wider than the cap.
pub fn fit_width(src_width: u32, src_height: u32, requested: u32, max_bytes: usize) -> u32 {
    let cap = max_chars(max_bytes);
    let start = u32::try_from(cap).unwrap_or(u32::MAX).min(requested);
    let mut width = start.max(1);
    while width > 1 && braille_char_count(src_width, src_height, width) > cap {
        width -= 1;
    }
    width
}

/// Drop trailing rows of rendered braille text until it fits `max_bytes`.
///
/// A row is dropped while the non-newline character count exceeds the
/// character cap, or while the serialized text (without its final newline)
/// is longer than `max_bytes`. The result keeps one trailing newline when any
/// rows remain. Returns the text and the number of rows dropped.
pub fn trim_rows(text: &str, max_bytes: usize) -> (String, usize) {
    let cap = max_chars(max_bytes);
    let mut lines: Vec<&str> = text.lines().collect();
    let total = lines.len();

    let over_budget = |lines: &[&str]| {
        let chars: usize = lines.iter().map(|l| l.chars().count()).sum();
        let bytes: usize =
            lines.iter().map(|l| l.len()).sum::<usize>() + lines.len().saturating_sub(1);
        chars > cap || bytes > max_bytes
    };

    while !lines.is_empty() && over_budget(&lines) {
        lines.pop();
    }

    let dropped = total - lines.len();
    if lines.is_empty() {
        return (String::new(), dropped);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    (out, dropped)
}
