//! Typed translation keys resolved against a locale-keyed string store.

pub mod config;
pub mod i18n;
