//! Errors raised while constructing translation keys.

use std::fmt;
use thiserror::Error;

/// Why a raw value was rejected as a translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidKeyReason {
    /// The raw string was empty
    Empty,

    /// The raw string is not in the allow-list
    NotAllowed,

    /// The option (or raw discriminant) has no entry in the key mapping
    Unmapped,
}

impl fmt::Display for InvalidKeyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("key cannot be empty"),
            Self::NotAllowed => f.write_str("key is not in the allowed set"),
            Self::Unmapped => f.write_str("key option is not defined in the mapping"),
        }
    }
}

/// Error returned when a translation key fails validation.
///
/// This is only ever produced at construction time. Resolving a valid key
/// never fails for a missing translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Invalid translation key '{key}': {reason}")]
    InvalidKey {
        key: String,
        reason: InvalidKeyReason,
    },
}

impl KeyError {
    pub(crate) fn empty() -> Self {
        Self::InvalidKey {
            key: String::new(),
            reason: InvalidKeyReason::Empty,
        }
    }

    pub(crate) fn not_allowed(raw: &str) -> Self {
        Self::InvalidKey {
            key: raw.to_string(),
            reason: InvalidKeyReason::NotAllowed,
        }
    }

    pub(crate) fn unmapped(discriminant: u32) -> Self {
        Self::InvalidKey {
            key: discriminant.to_string(),
            reason: InvalidKeyReason::Unmapped,
        }
    }

    /// The rejected raw value.
    pub fn key(&self) -> &str {
        match self {
            Self::InvalidKey { key, .. } => key,
        }
    }

    /// Why the value was rejected.
    pub fn reason(&self) -> InvalidKeyReason {
        match self {
            Self::InvalidKey { reason, .. } => *reason,
        }
    }
}
