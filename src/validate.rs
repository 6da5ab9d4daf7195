//! Input file checks run before an image is decoded.
//!
//! Rejections are values, not errors, so a front end can show the reason to
//! the user directly.

use std::fmt;

/// Media types accepted for rendering.
pub const ACCEPTED_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Largest accepted file size (10 MiB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Language for user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Why a file was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRejection {
    /// Media type is not JPEG or PNG.
    UnsupportedType { mime: String },
    /// File is larger than [`MAX_FILE_SIZE`].
    TooLarge { size: u64 },
}

impl FileRejection {
    /// Human-readable reason in the given language.
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (FileRejection::UnsupportedType { .. }, Locale::En) => {
                "Only JPG and PNG images are supported"
            }
            (FileRejection::UnsupportedType { .. }, Locale::Zh) => "仅支持 JPG 和 PNG 格式的图片",
            (FileRejection::TooLarge { .. }, Locale::En) => "Image size must not exceed 10MB",
            (FileRejection::TooLarge { .. }, Locale::Zh) => "图片大小不能超过 10MB",
        }
    }
}

impl fmt::Display for FileRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRejection::UnsupportedType { mime } => {
                write!(f, "{} (got '{}')", self.message(Locale::En), mime)
            }
            FileRejection::TooLarge { size } => {
                write!(f, "{} (got {} bytes)", self.message(Locale::En), size)
            }
        }
    }
}

/// Outcome of [`validate_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileValidation {
    rejection: Option<FileRejection>,
}

impl FileValidation {
    /// Whether the file may be decoded.
    pub fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<&FileRejection> {
        self.rejection.as_ref()
    }

    /// Localized reason, `None` when valid.
    pub fn reason(&self, locale: Locale) -> Option<&'static str> {
        self.rejection.as_ref().map(|r| r.message(locale))
    }
}

/// Check a file's media type and size.
///
/// The type is checked first, so an oversized GIF reports the type.
pub fn validate_file(mime: &str, size: u64) -> FileValidation {
    let rejection = if !ACCEPTED_TYPES.contains(&mime) {
        Some(FileRejection::UnsupportedType {
            mime: mime.to_string(),
        })
    } else if size > MAX_FILE_SIZE {
        Some(FileRejection::TooLarge { size })
    } else {
        None
    };
    FileValidation { rejection }
}
