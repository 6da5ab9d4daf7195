//! Image to text rendering pipeline.
//!
//! Two paths turn a [`PixelBuffer`] into text:
//!
//! 1. **Braille** - resize to 2x4 dots per character, grayscale,
//!    Floyd-Steinberg dither, then pack each 2x4 block into one braille
//!    code point. Optionally fitted to a byte budget.
//! 2. **Ramp** - resize to one pixel per character, grayscale, then map
//!    each intensity onto a character ramp.
//!
//! Every stage is a pure function; [`crate::generator::Generator`] wires
//! them together.

pub mod braille;
pub mod budget;
mod charset;
pub mod dither;
mod grayscale;
mod pixels;
pub mod ramp;
mod resize;

pub use budget::{
    braille_char_count, braille_pixel_size, fit_width, trim_rows, BYTES_PER_BRAILLE_CHAR,
    MAX_OUTPUT_BYTES,
};
pub use charset::{
    Charset, CharsetRegistry, BLOCK_CHARSET, BRAILLE_NAME, CUSTOM_NAME, DEFAULT_CUSTOM_RAMP,
    DEFAULT_NAME, STANDARD_CHARSET,
};
pub use dither::{dither, dither_in_place, DEFAULT_THRESHOLD};
pub use grayscale::{luminance, to_grayscale, to_grayscale_rgba};
pub use pixels::{PixelBuffer, CHANNELS};
pub use ramp::ramp_height;
pub use resize::resize;

// Re-export renderers at the module level for convenience
pub use braille::render as render_braille;
pub use braille::{grid_to_braille, BRAILLE_BASE};
pub use ramp::render as render_ramp;
