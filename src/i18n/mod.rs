//! Typed translation keys and their resolution to localized text.
//!
//! Bare string keys are replaced by `TranslationKey`, which can only hold one
//! of a fixed set of known keys. Invalid keys are rejected when the key is
//! built, so resolving a key never has to deal with them.
//!
//! # Architecture
//!
//! - `registry`: The closed set of key options and the allow-list derived from it
//! - `key`: Validated `TranslationKey` type
//! - `locale`: Opaque locale tags with parent fallback
//! - `store`: Backing store trait and the in-memory default-plus-overlay store
//! - `translator`: Resolves keys, returning a fallback message on a miss
//!
//! # Example
//!
//! ```
//! use translation_keys::i18n::{Locale, TranslationKey, TranslationKeyOption, Translator};
//!
//! let translator = Translator::builtin(Locale::new("en-US"));
//! let greeting = TranslationKey::from_option(TranslationKeyOption::BaseGreeting).unwrap();
//!
//! assert_eq!(translator.text(&greeting, None), "Hello!");
//! assert_eq!(translator.text(&greeting, Some(&Locale::new("pt-BR"))), "Olá!");
//! ```

mod error;
mod key;
mod locale;
mod registry;
mod store;
mod translator;

pub use error::{InvalidKeyReason, KeyError};
pub use key::TranslationKey;
pub use locale::Locale;
pub use registry::{KeyEntry, KeyRegistry, TranslationKeyOption};
pub use store::{ResourceStore, TranslationStore};
pub use translator::{missing_translation_message, Translator};
