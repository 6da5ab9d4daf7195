//! Subcommand handlers for render, charsets and config actions.

use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use super::args::{ConfigAction, RenderArgs};
use super::error::CliError;
use crate::ascii::{Charset, PixelBuffer};
use crate::config::{default_path, Config, DEFAULT_CONFIG};
use crate::generator::{Generator, RenderResult};
use crate::validate::{validate_file, Locale};

/// Characters of a ramp shown by `charsets`.
const PREVIEW_LEN: usize = 24;

/// Leading bytes read to sniff the media type.
const SNIFF_LEN: u64 = 32;

#[derive(Serialize)]
struct JsonOutput<'a> {
    text: &'a str,
    adjusted_width: Option<u32>,
    chars: usize,
    bytes: usize,
}

/// Read, validate and decode an image file into RGBA pixels.
///
/// The media type is sniffed from the file contents rather than the
/// extension. Type and size are checked from the header and metadata, so an
/// oversize file is rejected without reading it.
pub fn load_image(path: &Path, locale: Locale) -> Result<PixelBuffer, CliError> {
    let read_err = |e: std::io::Error| CliError::Read {
        path: path.to_path_buf(),
        source: e,
    };
    let mut file = File::open(path).map_err(read_err)?;
    let size = file.metadata().map_err(read_err)?.len();

    let mut bytes = Vec::new();
    (&mut file)
        .take(SNIFF_LEN)
        .read_to_end(&mut bytes)
        .map_err(read_err)?;

    let mime = image::guess_format(&bytes)
        .map(|f| f.to_mime_type())
        .unwrap_or("application/octet-stream");
    log::debug!("{}: {} ({} bytes)", path.display(), mime, size);

    if let Some(reason) = validate_file(mime, size).reason(locale) {
        return Err(CliError::Rejected {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        });
    }

    file.read_to_end(&mut bytes).map_err(read_err)?;

    let rgba = image::load_from_memory(&bytes)
        .map_err(|e| CliError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelBuffer::new(width, height, rgba.into_raw())?)
}

/// Render an image file and write the text to stdout or `--output`.
pub fn run_render(args: &RenderArgs, config: &Config) -> Result<RenderResult, CliError> {
    let generator = Generator::with_charsets(config.registry()?);
    let options = args.apply(config.options());
    log::debug!("Render options: {:?}", options);

    let pixels = load_image(&args.image, args.lang.into())?;
    let result = generator.generate(&pixels, &options)?;

    let payload = if args.json {
        let json = JsonOutput {
            text: &result.text,
            adjusted_width: result.adjusted_width,
            chars: result.char_count(),
            bytes: result.byte_len(),
        };
        let mut s = serde_json::to_string_pretty(&json)?;
        s.push('\n');
        s
    } else {
        result.text.clone()
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path, payload).map_err(|e| CliError::Write {
                path: path.clone(),
                source: e,
            })?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(payload.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| CliError::Write {
                    path: "<stdout>".into(),
                    source: e,
                })?;
        }
    }

    Ok(result)
}

/// Print registered charsets, one per line.
pub fn list_charsets(config: &Config) -> Result<(), CliError> {
    let registry = config.registry()?;
    println!("Available charsets:");
    for name in registry.names() {
        match registry.get(name) {
            Some(Charset::Braille) => println!("  {:<12} (braille, 2x4 dots per character)", name),
            Some(Charset::Ramp(chars)) => {
                let preview: String = chars.iter().take(PREVIEW_LEN).collect();
                println!("  {:<12} \"{}\" ({} levels)", name, preview, chars.len());
            }
            None => {}
        }
    }
    println!();
    println!("Any other text passed to --charset is used as a literal ramp.");
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(config_path)?;
            let opts = config.options();
            println!("Current configuration:");
            println!("  Width: {}", opts.width);
            println!("  Charset: {}", opts.charset);
            println!("  Invert: {}", if opts.invert { "yes" } else { "no" });
            println!("  Steam: {}", if opts.steam { "yes" } else { "no" });
            for (name, chars) in &config.charsets {
                println!("  Custom charset {}: \"{}\"", name, chars);
            }
            println!();

            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
        }
        ConfigAction::Init => {
            if path.exists() {
                return Err(CliError::ConfigExists { path });
            }

            // Create parent directories if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| CliError::Write {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }

            std::fs::write(&path, DEFAULT_CONFIG).map_err(|e| CliError::Write {
                path: path.clone(),
                source: e,
            })?;

            println!("Created config file: {}", path.display());
        }
    }

    Ok(())
}
