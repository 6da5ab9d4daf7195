//! Errors surfaced by the command-line front end.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::error::RenderError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The decoder could not turn the file into pixels.
    #[error("Failed to decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// File failed media type or size validation.
    #[error("{}: {reason}", path.display())]
    Rejected { path: PathBuf, reason: String },

    #[error("Config file already exists: {}", path.display())]
    ConfigExists { path: PathBuf },

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
