//! Key registry: Single source of truth for all valid translation keys.
//!
//! The closed set of key options and their canonical strings live in a fixed
//! mapping. The registry derives the allow-list from that mapping once, on
//! first access, and never exposes a way to change it afterwards.

use crate::i18n::KeyError;
use std::collections::HashSet;
use std::sync::OnceLock;

/// All available options for translation keys.
///
/// Every variant must have an entry in the key mapping, and every mapped
/// string must exist in the backing store's default table for the message to
/// resolve. The store side is a deployment contract and is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum TranslationKeyOption {
    BaseGreeting = 0,
    FarewellMessage = 1,
}

impl TranslationKeyOption {
    /// Every option, in discriminant order.
    pub const ALL: [TranslationKeyOption; 2] = [
        TranslationKeyOption::BaseGreeting,
        TranslationKeyOption::FarewellMessage,
    ];

    /// The numeric discriminant of this option.
    pub const fn discriminant(self) -> u32 {
        self as u32
    }
}

/// Converts a raw discriminant, e.g. one read from storage or another
/// process, into an option. Values outside the enumeration are rejected.
impl TryFrom<u32> for TranslationKeyOption {
    type Error = KeyError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|option| option.discriminant() == raw)
            .ok_or_else(|| KeyError::unmapped(raw))
    }
}

/// Fixed option-to-string mapping.
const KEY_MAPPING: &[(TranslationKeyOption, &str)] = &[
    (TranslationKeyOption::BaseGreeting, "BaseGreeting"),
    (TranslationKeyOption::FarewellMessage, "FarewellMessage"),
];

/// A single entry of the key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEntry {
    /// The enumeration member
    pub option: TranslationKeyOption,

    /// The canonical string looked up in the backing store
    pub value: &'static str,
}

/// Global key registry singleton.
///
/// Initialised once on first access and immutable thereafter.
#[derive(Debug)]
pub struct KeyRegistry {
    entries: Vec<KeyEntry>,
    allowed: HashSet<&'static str>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<KeyRegistry> = OnceLock::new();

impl KeyRegistry {
    /// Get the global key registry instance.
    pub fn get() -> &'static KeyRegistry {
        REGISTRY.get_or_init(|| {
            let entries: Vec<KeyEntry> = KEY_MAPPING
                .iter()
                .map(|&(option, value)| KeyEntry { option, value })
                .collect();
            let allowed = entries.iter().map(|entry| entry.value).collect();
            KeyRegistry { entries, allowed }
        })
    }

    /// Get the mapping entry for an option.
    ///
    /// # Returns
    /// * `Some(&KeyEntry)` if the option is mapped
    /// * `None` otherwise
    pub fn get_by_option(&self, option: TranslationKeyOption) -> Option<&KeyEntry> {
        self.entries.iter().find(|entry| entry.option == option)
    }

    /// Get the mapping entry whose canonical string equals `value` exactly.
    pub fn get_by_value(&self, value: &str) -> Option<&KeyEntry> {
        if !self.allowed.contains(value) {
            return None;
        }
        self.entries.iter().find(|entry| entry.value == value)
    }

    /// Check whether a raw string is in the allow-list.
    pub fn contains(&self, value: &str) -> bool {
        self.allowed.contains(value)
    }

    /// All mapping entries, in mapping order.
    pub fn list_all(&self) -> &[KeyEntry] {
        &self.entries
    }

    /// Number of valid keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
