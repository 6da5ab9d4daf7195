//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Lang;
use crate::generator::GenerateOptions;

/// Render images as braille or character-ramp text art
#[derive(Parser, Debug)]
#[command(name = "braille-art")]
#[command(version, about = "Render images as braille or character-ramp text art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an image file as text
    Render(RenderArgs),
    /// List available charsets
    Charsets,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// JPEG or PNG image to render
    pub image: PathBuf,

    /// Output width in characters
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub width: Option<u32>,

    /// Charset name or literal ramp (light to dense; black uses the last character)
    #[arg(long)]
    pub charset: Option<String>,

    /// Invert brightness (for light-on-dark display)
    #[arg(long, overrides_with = "no_invert")]
    pub invert: bool,

    /// Turn off invert set in the config file
    #[arg(long, overrides_with = "invert")]
    pub no_invert: bool,

    /// Keep braille output under 1000 bytes
    #[arg(long, overrides_with = "no_steam")]
    pub steam: bool,

    /// Turn off steam set in the config file
    #[arg(long, overrides_with = "steam")]
    pub no_steam: bool,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Emit JSON with text, adjusted width and sizes
    #[arg(long)]
    pub json: bool,

    /// Language for validation messages
    #[arg(long, default_value = "en")]
    pub lang: Lang,
}

impl RenderArgs {
    /// Layer command-line flags over options from the config file.
    ///
    /// Boolean flags only override when given; the last of `--invert` and
    /// `--no-invert` wins, and likewise for steam.
    pub fn apply(&self, mut options: GenerateOptions) -> GenerateOptions {
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(ref charset) = self.charset {
            options.charset = charset.clone();
        }
        if self.invert {
            options.invert = true;
        } else if self.no_invert {
            options.invert = false;
        }
        if self.steam {
            options.steam = true;
        } else if self.no_steam {
            options.steam = false;
        }
        options
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
