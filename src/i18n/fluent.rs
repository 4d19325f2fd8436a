// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed localization store.

use super::Language;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::{BTreeSet, HashMap};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Owns the active language and one immutable bundle per supported language.
pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    keys: HashMap<Language, BTreeSet<String>>,
    current: Language,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current", &self.current)
            .field("languages", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl I18n {
    /// Builds the store from the `.ftl` files embedded at compile time.
    pub fn new(language: Language) -> Result<Self> {
        let mut sources = Vec::with_capacity(Language::ALL.len());
        for lang in Language::ALL {
            let filename = format!("{}.ftl", lang.code());
            let content = Asset::get(&filename)
                .ok_or_else(|| Error::I18n(format!("missing resource {filename}")))?;
            sources.push((lang, String::from_utf8_lossy(content.data.as_ref()).into_owned()));
        }
        Self::from_sources(language, sources)
    }

    /// Builds the store from in-memory Fluent sources, one per language.
    ///
    /// Every supported language must be present.
    pub fn from_sources(
        language: Language,
        sources: impl IntoIterator<Item = (Language, String)>,
    ) -> Result<Self> {
        let mut bundles = HashMap::new();
        let mut keys = HashMap::new();

        for (lang, source) in sources {
            keys.insert(lang, message_ids(&source));
            let resource = FluentResource::try_new(source)
                .map_err(|(_, errors)| Error::I18n(format!("{lang}: {errors:?}")))?;
            let mut bundle = FluentBundle::new(vec![lang.langid()]);
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|errors| Error::I18n(format!("{lang}: {errors:?}")))?;
            bundles.insert(lang, bundle);
        }

        if let Some(missing) = Language::ALL.iter().find(|lang| !bundles.contains_key(lang)) {
            return Err(Error::I18n(format!("no translations for {missing}")));
        }

        Ok(Self {
            bundles,
            keys,
            current: language,
        })
    }

    #[must_use]
    pub fn current_language(&self) -> Language {
        self.current
    }

    /// Looks up `key` in the active language. Unknown keys come back verbatim.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.into_owned();
                }
                log::warn!("failed to format {key} for {}: {errors:?}", self.current);
            }
        }
        key.to_string()
    }

    /// Switches to the language named by `code`.
    ///
    /// Returns `false` and keeps the current language when `code` is not
    /// supported.
    pub fn set_language(&mut self, code: &str) -> bool {
        match code.parse::<Language>() {
            Ok(language) => {
                self.current = language;
                true
            }
            Err(_) => false,
        }
    }

    /// Moves to the next supported language and returns it.
    pub fn toggle_language(&mut self) -> Language {
        self.current = self.current.next();
        self.current
    }

    /// Message ids defined for `language`.
    #[must_use]
    pub fn keys(&self, language: Language) -> BTreeSet<String> {
        self.keys.get(&language).cloned().unwrap_or_default()
    }

    /// Keys defined in at least one language but missing from another,
    /// paired with the language lacking them.
    #[must_use]
    pub fn asymmetric_keys(&self) -> Vec<(Language, String)> {
        let per_language: Vec<(Language, BTreeSet<String>)> = Language::ALL
            .into_iter()
            .map(|language| (language, self.keys(language)))
            .collect();
        let all: BTreeSet<&String> = per_language.iter().flat_map(|(_, keys)| keys).collect();

        let mut missing = Vec::new();
        for (language, keys) in &per_language {
            for key in &all {
                if !keys.contains(*key) {
                    missing.push((*language, (*key).clone()));
                }
            }
        }
        missing
    }
}

/// Ids of the top-level messages in a Fluent source.
///
/// Terms (`-name`), comments and continuation lines are skipped.
fn message_ids(source: &str) -> BTreeSet<String> {
    source
        .lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_alphabetic()))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| {
            id.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> I18n {
        I18n::new(Language::Ru).expect("embedded translations should load")
    }

    #[test]
    fn lookup_uses_active_language() {
        let mut i18n = store();
        assert_eq!(i18n.tr("services_title"), "Наши услуги");
        assert!(i18n.set_language("en"));
        assert_eq!(i18n.tr("services_title"), "Our Services");
    }

    #[test]
    fn unknown_key_is_echoed_in_every_language() {
        let mut i18n = store();
        for language in Language::ALL {
            i18n.set_language(language.code());
            assert_eq!(i18n.tr("no_such_key"), "no_such_key");
        }
    }

    #[test]
    fn toggle_twice_restores_language() {
        let mut i18n = store();
        let start = i18n.current_language();
        i18n.toggle_language();
        assert_ne!(i18n.current_language(), start);
        assert_eq!(i18n.toggle_language(), start);
    }

    #[test]
    fn toggle_returns_new_language() {
        let mut i18n = store();
        assert_eq!(i18n.toggle_language(), Language::En);
        assert_eq!(i18n.current_language(), Language::En);
    }

    #[test]
    fn unsupported_language_is_rejected() {
        let mut i18n = store();
        assert!(!i18n.set_language("fr"));
        assert_eq!(i18n.current_language(), Language::Ru);
        assert_eq!(i18n.tr("about_title"), "О нас");
    }

    #[test]
    fn embedded_tables_are_symmetric() {
        let i18n = store();
        assert_eq!(i18n.asymmetric_keys(), Vec::new());
        assert_eq!(i18n.keys(Language::Ru), i18n.keys(Language::En));
        assert!(i18n.keys(Language::Ru).contains("main_title"));
    }

    #[test]
    fn asymmetric_keys_reports_gaps() {
        let i18n = I18n::from_sources(
            Language::En,
            [
                (Language::Ru, "greeting = Привет\n".to_string()),
                (Language::En, "greeting = Hello\nfarewell = Bye\n".to_string()),
            ],
        )
        .expect("sources should parse");

        assert_eq!(
            i18n.asymmetric_keys(),
            vec![(Language::Ru, "farewell".to_string())]
        );
        let mut i18n = i18n;
        i18n.set_language("ru");
        assert_eq!(i18n.tr("farewell"), "farewell");
    }

    #[test]
    fn message_ids_skip_comments_and_continuations() {
        let ids = message_ids("# note\nfirst = One\n    continued = no\n-term = T\nsecond=Two\n");
        let expected: BTreeSet<String> = ["first", "second"].into_iter().map(String::from).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn from_sources_requires_every_language() {
        let result = I18n::from_sources(Language::Ru, [(Language::Ru, "a = b\n".to_string())]);
        assert!(matches!(result, Err(Error::I18n(_))));
    }

    #[test]
    fn from_sources_rejects_broken_syntax() {
        let result = I18n::from_sources(
            Language::Ru,
            [
                (Language::Ru, "= no id\n".to_string()),
                (Language::En, "a = b\n".to_string()),
            ],
        );
        assert!(matches!(result, Err(Error::I18n(_))));
    }
}
