//! Resolve validated keys to localized text.

use crate::i18n::{Locale, ResourceStore, TranslationKey, TranslationStore};
use std::convert::Infallible;
use tracing::{debug, warn};

/// Resolves translation keys against a backing store.
///
/// Holds no state besides the store handle and the process default locale,
/// so a single instance can be shared between threads whenever the store
/// allows concurrent reads.
#[derive(Debug, Clone)]
pub struct Translator<S = ResourceStore> {
    store: S,
    default_locale: Locale,
}

impl<S: TranslationStore> Translator<S> {
    /// Create a translator over `store`.
    ///
    /// `default_locale` is used whenever `resolve` is called without a locale.
    pub fn new(store: S, default_locale: Locale) -> Self {
        Self {
            store,
            default_locale,
        }
    }

    /// The locale used when none is given.
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Resolve `key` for `locale` (or the default locale when absent).
    ///
    /// A missing or empty translation is not an error: the returned string
    /// is then the fallback message from [`missing_translation_message`].
    /// `Err` only carries faults raised by the store itself.
    pub fn resolve(
        &self,
        key: &TranslationKey,
        locale: Option<&Locale>,
    ) -> Result<String, S::Error> {
        let culture = locale.unwrap_or(&self.default_locale);

        match self.store.lookup(key.value(), Some(culture))? {
            Some(text) if !text.is_empty() => {
                debug!("Resolved '{}' for culture '{}'", key, culture);
                Ok(text)
            }
            _ => {
                warn!("No translation for '{}' in culture '{}'", key, culture);
                Ok(missing_translation_message(key, culture))
            }
        }
    }

    /// Resolve every valid key for `locale`, in mapping order.
    pub fn resolve_all(
        &self,
        locale: Option<&Locale>,
    ) -> Result<Vec<(TranslationKey, String)>, S::Error> {
        TranslationKey::all()
            .map(|key| self.resolve(&key, locale).map(|text| (key, text)))
            .collect()
    }
}

impl<S: TranslationStore<Error = Infallible>> Translator<S> {
    /// Like [`Translator::resolve`], for stores that cannot fail.
    pub fn text(&self, key: &TranslationKey, locale: Option<&Locale>) -> String {
        match self.resolve(key, locale) {
            Ok(text) => text,
            Err(never) => match never {},
        }
    }
}

impl Translator<ResourceStore> {
    /// Translator over the built-in tables.
    pub fn builtin(default_locale: Locale) -> Self {
        Self::new(ResourceStore::builtin(), default_locale)
    }
}

/// The diagnostic returned in place of a missing translation.
pub fn missing_translation_message(key: &TranslationKey, locale: &Locale) -> String {
    format!(
        "Translation for key '{}' not found in culture '{}'.",
        key, locale
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationKeyOption;
    use proptest::prelude::*;
    use std::fmt;

    fn key(raw: &str) -> TranslationKey {
        TranslationKey::new(raw).expect("Test key should be valid")
    }

    fn en_translator() -> Translator {
        Translator::builtin(Locale::new("en-US"))
    }

    // ==================== Hit Tests ====================

    #[test]
    fn test_resolve_default_locale() {
        let translator = en_translator();
        assert_eq!(translator.text(&key("BaseGreeting"), None), "Hello!");
    }

    #[test]
    fn test_resolve_explicit_locale() {
        let translator = en_translator();
        let pt_br = Locale::new("pt-BR");
        assert_eq!(translator.text(&key("BaseGreeting"), Some(&pt_br)), "Olá!");
    }

    #[test]
    fn test_resolve_unknown_locale_uses_default_table() {
        let translator = en_translator();
        let fr = Locale::new("fr-FR");
        assert_eq!(translator.text(&key("BaseGreeting"), Some(&fr)), "Hello!");
    }

    #[test]
    fn test_default_locale_selects_overlay() {
        let translator = Translator::builtin(Locale::new("pt-BR"));
        assert_eq!(translator.text(&key("BaseGreeting"), None), "Olá!");
    }

    // ==================== Miss Tests ====================

    #[test]
    fn test_miss_with_explicit_locale() {
        let translator = en_translator();
        let pt_br = Locale::new("pt-BR");
        assert_eq!(
            translator.text(&key("FarewellMessage"), Some(&pt_br)),
            "Translation for key 'FarewellMessage' not found in culture 'pt-BR'."
        );
    }

    #[test]
    fn test_miss_without_locale_names_default_locale() {
        let translator = en_translator();
        assert_eq!(
            translator.text(&key("FarewellMessage"), None),
            "Translation for key 'FarewellMessage' not found in culture 'en-US'."
        );
    }

    #[test]
    fn test_miss_with_invariant_default_locale() {
        let translator = Translator::builtin(Locale::invariant());
        assert_eq!(
            translator.text(&key("FarewellMessage"), None),
            "Translation for key 'FarewellMessage' not found in culture ''."
        );
    }

    #[test]
    fn test_empty_translation_is_a_miss() {
        let store = ResourceStore::new()
            .with_default("BaseGreeting", "Hello!")
            .with_overlay("de", "BaseGreeting", "");
        let translator = Translator::new(store, Locale::new("en"));
        let de = Locale::new("de");
        assert_eq!(
            translator.text(&key("BaseGreeting"), Some(&de)),
            "Translation for key 'BaseGreeting' not found in culture 'de'."
        );
    }

    #[test]
    fn test_missing_translation_message_keeps_tag_case() {
        let message = missing_translation_message(&key("BaseGreeting"), &Locale::new("PT_br"));
        assert_eq!(
            message,
            "Translation for key 'BaseGreeting' not found in culture 'PT_br'."
        );
    }

    // ==================== resolve_all Tests ====================

    #[test]
    fn test_resolve_all() {
        let translator = en_translator();
        let pt_br = Locale::new("pt-BR");
        let resolved = translator.resolve_all(Some(&pt_br)).unwrap();

        assert_eq!(resolved.len(), TranslationKeyOption::ALL.len());
        assert_eq!(resolved[0].1, "Olá!");
        assert_eq!(
            resolved[1].1,
            "Translation for key 'FarewellMessage' not found in culture 'pt-BR'."
        );
    }

    // ==================== Store Fault Tests ====================

    #[derive(Debug)]
    struct Unreachable;

    impl fmt::Display for Unreachable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("store unreachable")
        }
    }

    impl std::error::Error for Unreachable {}

    struct FailingStore;

    impl TranslationStore for FailingStore {
        type Error = Unreachable;

        fn lookup(
            &self,
            _key: &str,
            _locale: Option<&Locale>,
        ) -> Result<Option<String>, Self::Error> {
            Err(Unreachable)
        }
    }

    #[test]
    fn test_store_fault_propagates_unchanged() {
        let translator = Translator::new(FailingStore, Locale::new("en"));
        let err = translator.resolve(&key("BaseGreeting"), None).unwrap_err();
        assert_eq!(err.to_string(), "store unreachable");
    }

    #[test]
    fn test_resolve_all_stops_on_store_fault() {
        let translator = Translator::new(FailingStore, Locale::new("en"));
        assert!(translator.resolve_all(None).is_err());
    }

    // ==================== Concurrency Tests ====================

    #[test]
    fn test_shared_between_threads() {
        let translator = en_translator();
        let pt_br = Locale::new("pt-BR");

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(translator.text(&key("BaseGreeting"), Some(&pt_br)), "Olá!");
                });
            }
        });
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn test_resolve_is_total(tag in "[a-zA-Z_-]{0,12}", index in 0usize..2) {
            let translator = en_translator();
            let key = TranslationKey::from_option(TranslationKeyOption::ALL[index]).unwrap();
            let locale = Locale::new(tag);

            let with_locale = translator.text(&key, Some(&locale));
            let without_locale = translator.text(&key, None);
            prop_assert!(!with_locale.is_empty());
            prop_assert!(!without_locale.is_empty());
        }
    }
}
