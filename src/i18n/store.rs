//! Backing string store: default table plus locale overlays.

use crate::i18n::Locale;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

/// A locale-keyed mapping from key string to localized string.
///
/// `locale == None` queries the default table only. Implementations that can
/// fail (a remote or on-disk store) report faults through `Error`; the
/// translator propagates them unchanged.
pub trait TranslationStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn lookup(&self, key: &str, locale: Option<&Locale>) -> Result<Option<String>, Self::Error>;
}

impl<S: TranslationStore + ?Sized> TranslationStore for &S {
    type Error = S::Error;

    fn lookup(&self, key: &str, locale: Option<&Locale>) -> Result<Option<String>, Self::Error> {
        (**self).lookup(key, locale)
    }
}

impl<S: TranslationStore + ?Sized> TranslationStore for Arc<S> {
    type Error = S::Error;

    fn lookup(&self, key: &str, locale: Option<&Locale>) -> Result<Option<String>, Self::Error> {
        (**self).lookup(key, locale)
    }
}

/// In-memory store with one default table and any number of overlays.
///
/// Lookups for a locale walk its ancestry (`pt-BR`, `pt`, then the default
/// table) and return the first entry found. A stored empty string is a
/// found entry; deciding that it is unusable is up to the caller.
#[derive(Debug, Clone, Default)]
pub struct ResourceStore {
    default: HashMap<String, String>,
    overlays: HashMap<Locale, HashMap<String, String>>,
}

impl ResourceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in translation tables.
    ///
    /// `FarewellMessage` has no entry in any table, so it always resolves to
    /// the fallback message.
    pub fn builtin() -> Self {
        Self::new()
            .with_default("BaseGreeting", "Hello!")
            .with_overlay("pt-BR", "BaseGreeting", "Olá!")
    }

    /// Add an entry to the default table.
    pub fn with_default(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert_default(key, text);
        self
    }

    /// Add an entry to the overlay table of `locale`.
    pub fn with_overlay(
        mut self,
        locale: impl Into<Locale>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert_overlay(locale, key, text);
        self
    }

    /// Insert an entry into the default table.
    pub fn insert_default(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.default.insert(key.into(), text.into());
    }

    /// Insert an entry into the overlay table of `locale`.
    ///
    /// Inserting for the invariant locale writes to the default table.
    pub fn insert_overlay(
        &mut self,
        locale: impl Into<Locale>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        let locale = locale.into();
        if locale.is_invariant() {
            self.insert_default(key, text);
            return;
        }
        self.overlays
            .entry(locale)
            .or_default()
            .insert(key.into(), text.into());
    }

    fn table(&self, locale: &Locale) -> Option<&HashMap<String, String>> {
        if locale.is_invariant() {
            Some(&self.default)
        } else {
            self.overlays.get(locale)
        }
    }
}

impl TranslationStore for ResourceStore {
    type Error = Infallible;

    fn lookup(&self, key: &str, locale: Option<&Locale>) -> Result<Option<String>, Self::Error> {
        let Some(locale) = locale else {
            return Ok(self.default.get(key).cloned());
        };

        let found = locale
            .ancestry()
            .find_map(|candidate| self.table(&candidate)?.get(key).cloned());
        Ok(found)
    }
}
