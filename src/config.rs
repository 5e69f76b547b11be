use crate::i18n::Locale;
use anyhow::{Context, Result};
use std::env::VarError;

/// Variables consulted for the process default locale, in priority order.
const LOCALE_VARS: [&str; 4] = ["TRANSLATOR_DEFAULT_LOCALE", "LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug, Clone)]
pub struct Config {
    /// Locale used when a key is resolved without an explicit locale
    pub default_locale: Locale,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut default_locale = Locale::invariant();
        for name in LOCALE_VARS {
            if let Some(value) = read_var(name)? {
                default_locale = if name == "TRANSLATOR_DEFAULT_LOCALE" {
                    Locale::new(value.trim())
                } else {
                    locale_from_posix(&value)
                };
                break;
            }
        }

        Ok(Self { default_locale })
    }
}

/// Read a variable, treating unset and blank values alike.
fn read_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(Some(value)),
        Ok(_) | Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("{} is not valid unicode", name)),
    }
}

/// Convert a POSIX locale value (`pt_BR.UTF-8@euro`) into a locale tag
/// (`pt-BR`). `C` and `POSIX` map to the invariant locale.
pub fn locale_from_posix(value: &str) -> Locale {
    let value = value.trim();
    let name = value.split(['.', '@']).next().unwrap_or_default();

    if name.is_empty() || name == "C" || name == "POSIX" {
        return Locale::invariant();
    }
    Locale::new(name.replace('_', "-"))
}
