//! Character set definitions and the per-generator charset registry.

use std::collections::HashMap;

use crate::error::RenderError;

/// Name that selects the braille algorithm.
pub const BRAILLE_NAME: &str = "braille";

/// Alias of [`BRAILLE_NAME`].
pub const DEFAULT_NAME: &str = "default";

/// Name under which user ramps are registered by default.
pub const CUSTOM_NAME: &str = "custom";

/// Block character ramp, sparse to dense.
pub const BLOCK_CHARSET: &str = "░▒▓█";

/// Standard ASCII ramp. Its first character is the densest, so black
/// pixels render as spaces.
pub const STANDARD_CHARSET: &str = "@%#*+=-:. ";

/// Ramp used for `custom` when nothing has been registered under that name.
pub const DEFAULT_CUSTOM_RAMP: &str = "⢠⢉⠾⠃⠈⠱⣞⡿";

/// How a charset renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Charset {
    /// 2x4 dithered braille cells rather than a ramp.
    Braille,
    /// Intensity ramp, light to dense; black maps to the last character.
    Ramp(Vec<char>),
}

impl Charset {
    /// Build a ramp charset from a string.
    pub fn ramp(chars: &str) -> Self {
        Charset::Ramp(chars.chars().collect())
    }

    /// Check if this charset uses braille rendering.
    pub fn is_braille(&self) -> bool {
        matches!(self, Charset::Braille)
    }

    /// Ramp characters; empty for braille.
    pub fn chars(&self) -> &[char] {
        match self {
            Charset::Braille => &[],
            Charset::Ramp(chars) => chars,
        }
    }
}

/// Named charsets owned by one generator.
///
/// Seeded with the built-ins (`default`, `braille`, `block`, `standard`).
/// Each generator holds its own registry, so registrations in one do not
/// leak into another.
#[derive(Debug, Clone)]
pub struct CharsetRegistry {
    charsets: HashMap<String, Charset>,
}

impl Default for CharsetRegistry {
    fn default() -> Self {
        let mut charsets = HashMap::new();
        charsets.insert(DEFAULT_NAME.to_string(), Charset::Braille);
        charsets.insert(BRAILLE_NAME.to_string(), Charset::Braille);
        charsets.insert("block".to_string(), Charset::ramp(BLOCK_CHARSET));
        charsets.insert("standard".to_string(), Charset::ramp(STANDARD_CHARSET));
        Self { charsets }
    }
}

impl CharsetRegistry {
    /// Registry with only the built-in charsets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a named ramp.
    ///
    /// # Errors
    /// Returns [`RenderError::EmptyCharset`] if `chars` is empty; the
    /// registry is left unchanged.
    pub fn register(&mut self, name: &str, chars: &str) -> Result<(), RenderError> {
        if chars.is_empty() {
            return Err(RenderError::EmptyCharset {
                name: name.to_string(),
            });
        }
        log::debug!("Registering charset '{}' ({} chars)", name, chars.chars().count());
        self.charsets.insert(name.to_string(), Charset::ramp(chars));
        Ok(())
    }

    /// Look up a charset by name only.
    pub fn get(&self, name: &str) -> Option<&Charset> {
        self.charsets.get(name)
    }

    /// Resolve a charset selection.
    ///
    /// A registered name wins. `custom` with nothing registered falls back to
    /// [`DEFAULT_CUSTOM_RAMP`]. Any other string is taken as a literal ramp.
    ///
    /// # Errors
    /// Returns [`RenderError::EmptyCharset`] for an empty selection.
    pub fn resolve(&self, selection: &str) -> Result<Charset, RenderError> {
        if let Some(charset) = self.charsets.get(selection) {
            return Ok(charset.clone());
        }
        if selection.is_empty() {
            return Err(RenderError::EmptyCharset {
                name: selection.to_string(),
            });
        }
        if selection == CUSTOM_NAME {
            return Ok(Charset::ramp(DEFAULT_CUSTOM_RAMP));
        }
        Ok(Charset::ramp(selection))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.charsets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
