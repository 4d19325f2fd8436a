// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations live in `assets/i18n/<code>.ftl` and are embedded into the
//! binary. The [`fluent::I18n`] store owns the active [`Language`]; components
//! that cache localized strings implement [`Localized`] so they can re-read
//! them after a language switch.
//!
//! Missing translations never fail: the lookup key is displayed instead, which
//! makes gaps easy to spot on screen.

pub mod fluent;
mod language;

pub use language::{Language, UnsupportedLanguage};

use crate::config::Config;

/// A component that displays strings taken from the localization store.
pub trait Localized {
    /// Re-reads every displayed string from `i18n`.
    fn refresh_texts(&mut self, i18n: &fluent::I18n);
}

/// Picks the startup language: CLI first, then the config file, then Russian.
///
/// Unsupported codes are logged and skipped.
pub fn resolve_language(cli_lang: Option<&str>, config: &Config) -> Language {
    let candidates = [
        ("command line", cli_lang),
        ("config file", config.general.language.as_deref()),
    ];

    for (source, code) in candidates {
        if let Some(code) = code {
            match code.parse::<Language>() {
                Ok(language) => return language,
                Err(err) => log::warn!("ignoring language from {source}: {err}"),
            }
        }
    }

    Language::default()
}
