//! braille-art library crate.
//!
//! Converts decoded RGBA pixel buffers into Unicode braille or
//! character-ramp text. Decoding image files is left to the caller; the
//! `braille-art` binary uses the `image` crate for that.
//!
//! ```
//! use braille_art::{GenerateOptions, Generator, PixelBuffer};
//!
//! let pixels = PixelBuffer::filled(2, 2, [0, 0, 0, 255]).unwrap();
//! let options = GenerateOptions { width: 1, ..Default::default() };
//! let result = Generator::new().generate(&pixels, &options).unwrap();
//! assert_eq!(result.text, "\u{28FF}\n");
//! ```

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod validate;

pub use ascii::{Charset, CharsetRegistry, PixelBuffer};
pub use error::RenderError;
pub use generator::{GenerateOptions, Generator, RenderResult};
pub use validate::{validate_file, FileRejection, FileValidation, Locale};
