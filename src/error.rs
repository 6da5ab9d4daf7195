//! Error types for the rendering pipeline.

use thiserror::Error;

/// Errors that can occur when rendering an image to text.
///
/// All of these describe a request the caller should not have made: the
/// pipeline itself never fails on well-formed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A target or source dimension was zero.
    #[error("Invalid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length does not match `width * height * 4`.
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    /// Requested character width was zero.
    #[error("Output width must be at least 1 character")]
    InvalidWidth,

    /// A charset with no characters was supplied or registered.
    #[error("Charset '{name}' has no characters")]
    EmptyCharset { name: String },
}
