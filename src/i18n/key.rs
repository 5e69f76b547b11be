//! TranslationKey type: Validated identifier of a localizable message.
//!
//! A `TranslationKey` can only be obtained through a constructor that checks
//! the raw value against the `KeyRegistry`, so every instance in existence
//! names a key the backing store is expected to know about.

use crate::i18n::{KeyError, KeyRegistry, TranslationKeyOption};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated translation key.
///
/// Serializes as its plain string. Deserialization goes through
/// [`TranslationKey::new`], so invalid keys are rejected there as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TranslationKey {
    option: TranslationKeyOption,
    value: &'static str,
}

impl TranslationKey {
    /// Create a key from a raw string.
    ///
    /// # Returns
    /// * `Ok(TranslationKey)` if `raw` is exactly one of the allowed keys
    /// * `Err(KeyError::InvalidKey)` if `raw` is empty or not allowed
    ///
    /// # Example
    /// ```
    /// use translation_keys::i18n::TranslationKey;
    ///
    /// let key = TranslationKey::new("BaseGreeting").unwrap();
    /// assert_eq!(key.value(), "BaseGreeting");
    /// assert!(TranslationKey::new("WelcomeMessage").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, KeyError> {
        if raw.is_empty() {
            return Err(KeyError::empty());
        }

        KeyRegistry::get()
            .get_by_value(raw)
            .map(|entry| TranslationKey {
                option: entry.option,
                value: entry.value,
            })
            .ok_or_else(|| KeyError::not_allowed(raw))
    }

    /// Create a key from an enumeration member via the fixed key mapping.
    pub fn from_option(option: TranslationKeyOption) -> Result<Self, KeyError> {
        KeyRegistry::get()
            .get_by_option(option)
            .map(|entry| TranslationKey {
                option: entry.option,
                value: entry.value,
            })
            .ok_or_else(|| KeyError::unmapped(option.discriminant()))
    }

    /// Create a key from a raw enumeration discriminant.
    ///
    /// Discriminants outside the enumeration fail with `InvalidKey`.
    pub fn from_discriminant(raw: u32) -> Result<Self, KeyError> {
        Self::from_option(TranslationKeyOption::try_from(raw)?)
    }

    /// Every valid key, in mapping order.
    pub fn all() -> impl Iterator<Item = TranslationKey> {
        KeyRegistry::get()
            .list_all()
            .iter()
            .map(|entry| TranslationKey {
                option: entry.option,
                value: entry.value,
            })
    }

    /// The key string looked up in the backing store.
    pub fn value(&self) -> &'static str {
        self.value
    }

    /// The enumeration member this key corresponds to.
    pub fn option(&self) -> TranslationKeyOption {
        self.option
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

impl AsRef<str> for TranslationKey {
    fn as_ref(&self) -> &str {
        self.value
    }
}

impl FromStr for TranslationKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for TranslationKey {
    type Error = KeyError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl TryFrom<String> for TranslationKey {
    type Error = KeyError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl TryFrom<TranslationKeyOption> for TranslationKey {
    type Error = KeyError;

    fn try_from(option: TranslationKeyOption) -> Result<Self, Self::Error> {
        Self::from_option(option)
    }
}

impl From<TranslationKey> for String {
    fn from(key: TranslationKey) -> Self {
        key.value.to_string()
    }
}
