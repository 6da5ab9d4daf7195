//! Braille character rendering for high-resolution text art.
//!
//! Each braille character represents a 2x4 dot matrix, so one output
//! character carries 8 pixels of a dithered image.

use super::pixels::PixelBuffer;

/// Braille base character (U+2800, empty braille pattern).
pub const BRAILLE_BASE: char = '\u{2800}';

/// Dot columns per braille character.
pub const CELL_WIDTH: u32 = 2;

/// Dot rows per braille character.
pub const CELL_HEIGHT: u32 = 4;

/// Samples outside the image read as this value (light background).
const OUT_OF_BOUNDS: u8 = 255;

/// Convert a 2x4 boolean grid to a braille character.
///
/// The bit positions are:
/// ```text
/// [0,0]=1   [1,0]=8
/// [0,1]=2   [1,1]=16
/// [0,2]=4   [1,2]=32
/// [0,3]=64  [1,3]=128
/// ```
///
/// `grid[x][y]` indicates whether the dot at column x, row y is raised.
pub fn grid_to_braille(grid: [[bool; 4]; 2]) -> char {
    let mut code = 0u8;
    if grid[0][0] {
        code |= 0x01;
    }
    if grid[0][1] {
        code |= 0x02;
    }
    if grid[0][2] {
        code |= 0x04;
    }
    if grid[0][3] {
        code |= 0x40;
    }
    if grid[1][0] {
        code |= 0x08;
    }
    if grid[1][1] {
        code |= 0x10;
    }
    if grid[1][2] {
        code |= 0x20;
    }
    if grid[1][3] {
        code |= 0x80;
    }
    char::from_u32(BRAILLE_BASE as u32 + code as u32).unwrap_or(BRAILLE_BASE)
}

/// Number of braille rows needed for an image `pixel_height` pixels tall.
pub fn rows_for_height(pixel_height: u32) -> u32 {
    pixel_height.div_ceil(CELL_HEIGHT)
}

/// Render a dithered buffer as braille text.
///
/// The buffer is cut into 2x4 blocks, left to right and top to bottom. A dot
/// is raised when its pixel is dark: red channel below 128, or at least 128
/// when `invert` is set. Blocks hanging past the right or bottom edge sample
/// 255 there. Every row, including the last, ends with `\n`.
pub fn render(dithered: &PixelBuffer, invert: bool) -> String {
    let width = dithered.width();
    let height = dithered.height();
    let cols = width.div_ceil(CELL_WIDTH);
    let rows = rows_for_height(height);

    // Braille code points are 3 bytes in UTF-8, plus one newline per row
    let mut out = String::with_capacity((cols as usize * 3 + 1) * rows as usize);

    let sample = |x: u32, y: u32| -> u8 { dithered.pixel(x, y).map_or(OUT_OF_BOUNDS, |px| px[0]) };
    let is_dark = |v: u8| if invert { v >= 128 } else { v < 128 };

    for cy in 0..rows {
        for cx in 0..cols {
            let mut grid = [[false; 4]; 2];
            for dy in 0..CELL_HEIGHT {
                for dx in 0..CELL_WIDTH {
                    let v = sample(cx * CELL_WIDTH + dx, cy * CELL_HEIGHT + dy);
                    grid[dx as usize][dy as usize] = is_dark(v);
                }
            }
            out.push(grid_to_braille(grid));
        }
        out.push('\n');
    }

    out
}
