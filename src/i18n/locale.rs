//! Locale identifiers.
//!
//! A `Locale` is an opaque language/region tag such as `"pt-BR"`. Tags are
//! accepted as given; no well-formedness check is performed. The empty tag is
//! the invariant locale, which selects the store's default table.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An opaque locale tag.
///
/// Equality and hashing ignore ASCII case and treat `_` like `-`, so
/// `pt_br` and `pt-BR` select the same overlay table. `Display` always
/// renders the tag exactly as it was given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale {
    tag: String,
}

impl Locale {
    /// Create a locale from a tag, as-is.
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// The invariant locale (empty tag).
    pub fn invariant() -> Self {
        Self::default()
    }

    /// The tag as given.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Check if this is the invariant locale.
    pub fn is_invariant(&self) -> bool {
        self.tag.is_empty()
    }

    /// The next more general locale.
    ///
    /// `pt-BR` -> `pt` -> invariant -> `None`.
    pub fn parent(&self) -> Option<Locale> {
        if self.is_invariant() {
            return None;
        }
        match self.tag.rfind(['-', '_']) {
            Some(idx) => Some(Locale::new(&self.tag[..idx])),
            None => Some(Locale::invariant()),
        }
    }

    /// This locale followed by all of its parents, ending with the invariant
    /// locale.
    pub fn ancestry(&self) -> impl Iterator<Item = Locale> {
        std::iter::successors(Some(self.clone()), Locale::parent)
    }

    fn normalized(&self) -> impl Iterator<Item = char> + '_ {
        self.tag
            .chars()
            .map(|c| if c == '_' { '-' } else { c.to_ascii_lowercase() })
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.normalized().eq(other.normalized())
    }
}

impl Eq for Locale {}

impl Hash for Locale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.normalized() {
            c.hash(state);
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
