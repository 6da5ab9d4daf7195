//! CLI enum types.

use clap::ValueEnum;

use crate::validate::Locale;

/// Language for validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl From<Lang> for Locale {
    fn from(l: Lang) -> Self {
        match l {
            Lang::En => Locale::En,
            Lang::Zh => Locale::Zh,
        }
    }
}
