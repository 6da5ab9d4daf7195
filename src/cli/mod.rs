//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;
mod error;

pub use args::{Args, Command, ConfigAction, RenderArgs};
pub use commands::{handle_config_action, list_charsets, load_image, run_render};
pub use enums::Lang;
pub use error::CliError;
