//! Generator facade: options in, text out.

use serde::Serialize;

use crate::ascii::{
    self, braille, budget, fit_width, resize, to_grayscale, to_grayscale_rgba, Charset,
    CharsetRegistry, PixelBuffer, DEFAULT_THRESHOLD, MAX_OUTPUT_BYTES,
};
use crate::error::RenderError;
use crate::validate::{self, FileValidation};

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 100;

/// Options for a single [`Generator::generate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Output width in characters.
    pub width: u32,
    /// Charset name or a literal ramp.
    pub charset: String,
    /// Flip which pixels count as dark.
    pub invert: bool,
    /// Fit braille output under [`MAX_OUTPUT_BYTES`].
    pub steam: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            charset: ascii::BRAILLE_NAME.to_string(),
            invert: false,
            steam: false,
        }
    }
}

/// Rendered text plus the width actually used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderResult {
    /// Rows separated by `\n`, each row newline-terminated.
    pub text: String,
    /// Braille path only: the character width rendered after fitting.
    pub adjusted_width: Option<u32>,
}

impl RenderResult {
    /// Characters emitted, not counting newlines.
    pub fn char_count(&self) -> usize {
        self.text.chars().filter(|&c| c != '\n').count()
    }

    /// Serialized UTF-8 size of the text.
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }
}

/// Renders pixel buffers as braille or ramp text.
///
/// Owns its [`CharsetRegistry`]; separate generators never share
/// registrations.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    charsets: CharsetRegistry,
}

impl Generator {
    /// Generator with the built-in charsets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator using a prepared registry.
    pub fn with_charsets(charsets: CharsetRegistry) -> Self {
        Self { charsets }
    }

    /// The charsets this generator resolves against.
    pub fn charsets(&self) -> &CharsetRegistry {
        &self.charsets
    }

    /// Insert or overwrite a named ramp. Empty ramps are rejected.
    pub fn register_charset(&mut self, name: &str, chars: &str) -> Result<(), RenderError> {
        self.charsets.register(name, chars)
    }

    /// Check a file's media type and size before decoding it.
    pub fn validate_file(mime: &str, size: u64) -> FileValidation {
        validate::validate_file(mime, size)
    }

    /// Render `buffer` according to `options`.
    ///
    /// Braille charsets go through resize, grayscale, dither and braille
    /// packing, with byte-budget fitting before and after rendering when
    /// `steam` is set. Ramps go through resize, grayscale and ramp mapping;
    /// `steam` does not apply to them.
    ///
    /// # Errors
    /// Fails on a zero width or an empty charset selection.
    pub fn generate(
        &self,
        buffer: &PixelBuffer,
        options: &GenerateOptions,
    ) -> Result<RenderResult, RenderError> {
        if options.width == 0 {
            return Err(RenderError::InvalidWidth);
        }

        let result = match self.charsets.resolve(&options.charset)? {
            Charset::Braille => generate_braille(buffer, options)?,
            Charset::Ramp(ramp) => generate_ramp(buffer, options, &ramp)?,
        };

        log::debug!(
            "Generated {} chars, {} bytes",
            result.char_count(),
            result.byte_len()
        );
        Ok(result)
    }
}

fn generate_braille(
    buffer: &PixelBuffer,
    options: &GenerateOptions,
) -> Result<RenderResult, RenderError> {
    let (src_w, src_h) = (buffer.width(), buffer.height());

    let mut char_width = options.width;
    if options.steam {
        let fitted = fit_width(src_w, src_h, char_width, MAX_OUTPUT_BYTES);
        if fitted != char_width {
            log::info!("Byte budget: width {} -> {}", char_width, fitted);
        }
        char_width = fitted;
    }

    // Resize to whole cells so the last braille row samples image pixels
    // rather than padding
    let (pixel_width, pixel_height) = budget::braille_pixel_size(src_w, src_h, char_width);
    let rows = braille::rows_for_height(pixel_height);
    let cell_height = rows.saturating_mul(braille::CELL_HEIGHT);
    log::debug!(
        "Braille: {}x{} px -> {}x{} px ({} cols x {} rows)",
        src_w,
        src_h,
        pixel_width,
        cell_height,
        char_width,
        rows
    );

    let resized = resize(buffer, pixel_width, cell_height)?;
    let mut pixels = to_grayscale_rgba(&resized);
    ascii::dither_in_place(&mut pixels, DEFAULT_THRESHOLD);
    let mut text = braille::render(&pixels, options.invert);

    if options.steam {
        let (trimmed, dropped) = budget::trim_rows(&text, MAX_OUTPUT_BYTES);
        if dropped > 0 {
            if trimmed.is_empty() {
                log::warn!("Byte budget cannot be met, output emptied");
            } else {
                log::info!("Byte budget: dropped {} trailing rows", dropped);
            }
        }
        text = trimmed;
    }

    Ok(RenderResult {
        text,
        adjusted_width: Some(char_width),
    })
}

fn generate_ramp(
    buffer: &PixelBuffer,
    options: &GenerateOptions,
    ramp: &[char],
) -> Result<RenderResult, RenderError> {
    let width = options.width;
    let height = ascii::ramp_height(buffer.width(), buffer.height(), width);
    log::debug!("Ramp: {} levels, {}x{} chars", ramp.len(), width, height);

    let resized = resize(buffer, width, height)?;
    let gray = to_grayscale(&resized);
    let text = ascii::render_ramp(&gray, width, height, ramp, options.invert);

    Ok(RenderResult {
        text,
        adjusted_width: None,
    })
}
